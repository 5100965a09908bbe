use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Degradation plot (central panel)
// ---------------------------------------------------------------------------

/// Render all visible series on one set of axes.
pub fn degradation_plot(ui: &mut Ui, state: &AppState) {
    let style = &state.style;

    Plot::new("degradation_plot")
        .legend(Legend::default().position(style.legend_corner))
        .show_grid(style.show_grid)
        .x_axis_label(style.x_label.as_str())
        .y_axis_label(style.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for idx in state.visible_indices() {
                let series = &state.series[idx];
                let color = state.colors.color_for(idx);
                let points = series.finite_points();

                // Line and markers share a name so the legend groups them.
                let line = Line::new(PlotPoints::from(points.clone()))
                    .name(&series.label)
                    .color(color)
                    .width(style.line_width);

                let markers = Points::new(PlotPoints::from(points))
                    .name(&series.label)
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(style.marker_radius);

                plot_ui.line(line);
                plot_ui.points(markers);
            }
        });
}
