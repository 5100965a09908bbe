use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::color::ColorCycle;
use crate::data::loader::load_file;
use crate::data::model::Series;
use crate::data::partition::build_series;
use crate::style::PlotStyle;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the viewer shows, independent of rendering.
pub struct AppState {
    /// One series per input file, in command-line order.
    pub series: Vec<Series>,

    /// Indices of series hidden from the plot via the side panel.
    pub hidden: BTreeSet<usize>,

    /// Global figure styling.
    pub style: PlotStyle,

    /// Colours resolved from `style` once loading is finished.
    pub colors: ColorCycle,
}

impl Default for AppState {
    fn default() -> Self {
        let style = PlotStyle::default();
        let colors = style.color_cycle(0);
        Self {
            series: Vec::new(),
            hidden: BTreeSet::new(),
            style,
            colors,
        }
    }
}

impl AppState {
    /// Load every path in order. The first failure aborts the whole run.
    pub fn load_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<()> {
        for path in paths {
            self.load_path(path.as_ref())?;
        }
        self.colors = self.style.color_cycle(self.series.len());
        Ok(())
    }

    /// Load one file and append its series, labelled with the path as given.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let table = load_file(path)?;
        let label = path.display().to_string();
        let series = build_series(label, &table)
            .with_context(|| format!("computing degradation ratio for {}", path.display()))?;

        log::info!(
            "Loaded {} ({} rows, {} points)",
            path.display(),
            table.n_rows(),
            series.len()
        );
        self.series.push(series);
        Ok(())
    }

    /// Indices of series currently drawn.
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.series.len())
            .filter(|i| !self.hidden.contains(i))
            .collect()
    }

    /// Toggle whether a series is drawn.
    pub fn toggle_visible(&mut self, index: usize) {
        if !self.hidden.remove(&index) {
            self.hidden.insert(index);
        }
    }

    /// Show every series again.
    pub fn show_all(&mut self) {
        self.hidden.clear();
    }
}
