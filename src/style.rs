use eframe::egui::{self, FontFamily, TextStyle};
use egui_plot::Corner;

use crate::color::ColorCycle;

/// Hex colour cycle applied to series in load order.
pub const DEFAULT_COLOR_CYCLE: [&str; 7] = [
    "348ABD", "7A68A6", "A60628", "467821", "CF4457", "188487", "E24A33",
];

// ---------------------------------------------------------------------------
// Global plot styling
// ---------------------------------------------------------------------------

/// Look of the figure. Applied once, after all series are loaded.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    pub font_family: FontFamily,
    pub font_size: f32,
    pub color_cycle: Vec<String>,
    pub show_grid: bool,
    pub x_label: String,
    pub y_label: String,
    pub legend_corner: Corner,
    pub line_width: f32,
    pub marker_radius: f32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Proportional,
            font_size: 13.0,
            color_cycle: DEFAULT_COLOR_CYCLE.iter().map(|s| s.to_string()).collect(),
            show_grid: true,
            x_label: "Input width".to_string(),
            y_label: "Performance degradation".to_string(),
            legend_corner: Corner::RightBottom,
            line_width: 1.5,
            marker_radius: 3.0,
        }
    }
}

impl PlotStyle {
    /// Set font family and size on every text style. Monospace keeps its
    /// family so code-like labels stay aligned.
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            for (text_style, font_id) in style.text_styles.iter_mut() {
                font_id.size = self.font_size;
                if *text_style != TextStyle::Monospace {
                    font_id.family = self.font_family.clone();
                }
            }
        });
    }

    /// The configured colour cycle, or evenly spaced hues for `n_series`
    /// when the custom cycle cannot be used.
    pub fn color_cycle(&self, n_series: usize) -> ColorCycle {
        match ColorCycle::from_hex(self.color_cycle.as_slice()) {
            Ok(cycle) => cycle,
            Err(e) => {
                log::debug!("custom colour cycle unusable ({e}), using default palette");
                ColorCycle::fallback(n_series)
            }
        }
    }
}
