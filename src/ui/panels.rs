use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – one entry per series
// ---------------------------------------------------------------------------

/// Render the series list with visibility checkboxes and ratio summaries.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    if state.series.is_empty() {
        ui.label("No input files given.");
        return;
    }

    if ui.small_button("Show all").clicked() {
        state.show_all();
    }

    let mut toggled = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, series) in state.series.iter().enumerate() {
                let color = state.colors.color_for(idx);
                let mut checked = !state.hidden.contains(&idx);
                let text = RichText::new(&series.label).color(color).strong();

                if ui.checkbox(&mut checked, text).changed() {
                    toggled = Some(idx);
                }

                ui.indent(("series_info", idx), |ui: &mut Ui| {
                    ui.label(format!("{} points", series.len()));
                    if let Some((min, mean, max)) = series.ratio_summary() {
                        ui.label(format!("min {min:.3}  mean {mean:.3}  max {max:.3}"));
                    }
                });
                ui.add_space(4.0);
            }
        });

    if let Some(idx) = toggled {
        state.toggle_visible(idx);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{} series loaded, {} visible",
            state.series.len(),
            state.visible_indices().len()
        ));
    });
}
