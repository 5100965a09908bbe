mod app;
mod color;
mod data;
mod state;
mod style;
mod ui;

use anyhow::Result;
use app::QperfViewerApp;
use eframe::egui;
use state::AppState;

/// Load every file before the window opens; any failure ends the run.
fn load_inputs(paths: &[String]) -> Result<AppState> {
    let mut state = AppState::default();
    if let Err(e) = state.load_paths(paths) {
        log::debug!("aborting run: {e:#}");
        return Err(e);
    }
    Ok(state)
}

fn main() -> Result<()> {
    env_logger::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();

    let state = load_inputs(&paths)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        "qperf – Performance degradation",
        options,
        Box::new(|cc| Ok(Box::new(QperfViewerApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
