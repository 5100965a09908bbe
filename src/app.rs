use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct QperfViewerApp {
    pub state: AppState,
}

impl QperfViewerApp {
    /// Wrap loaded state and apply its styling to the egui context.
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        state.style.apply(&cc.egui_ctx);
        Self { state }
    }
}

impl eframe::App for QperfViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: series list ----
        egui::SidePanel::left("series_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::degradation_plot(ui, &self.state);
        });
    }
}
