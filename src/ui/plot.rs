use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::generate_palette;
use crate::data::aggregate::{pie_title, scatter_title, PieSlice};
use crate::state::AppState;

const EMPTY_NOTE: &str = "No launches match the current selection";

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Render the success pie chart for the current site selection.
pub fn success_pie(ui: &mut Ui, state: &AppState, height: f32) {
    ui.label(RichText::new(pie_title(&state.site)).strong());

    let total: u64 = state.pie.iter().map(|s| s.value).sum();
    if let Some(note) = pie_note(&state.pie) {
        ui.label(note);
    }

    let colors = generate_palette(state.pie.len());

    Plot::new("success_pie")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            if total == 0 {
                return;
            }
            let mut start = 0.0;
            for (slice, color) in state.pie.iter().zip(colors.iter().copied()) {
                let fraction = slice.value as f64 / total as f64;
                let end = start + fraction;
                if slice.value > 0 {
                    for (from, to) in convex_pieces(start, end) {
                        let wedge: PlotPoints = wedge_points(from, to).into_iter().collect();
                        plot_ui.polygon(
                            Polygon::new(wedge)
                                .name(&slice.label)
                                .fill_color(color)
                                .stroke(Stroke::new(1.0, Color32::WHITE)),
                        );
                    }

                    let [x, y] = label_anchor(start, end);
                    plot_ui.text(Text::new(
                        PlotPoint::new(x, y),
                        RichText::new(format!("{} ({:.1}%)", slice.value, fraction * 100.0))
                            .color(Color32::BLACK),
                    ));
                }
                start = end;
            }
        });
}

/// Note shown above the pie when there is nothing to draw.
pub fn pie_note(slices: &[PieSlice]) -> Option<&'static str> {
    if slices.is_empty() {
        Some(EMPTY_NOTE)
    } else if slices.iter().all(|s| s.value == 0) {
        Some("No successful launches")
    } else {
        None
    }
}

/// Split `[start, end]` into pieces of at most half a turn, each of which
/// outlines a convex polygon.
pub fn convex_pieces(start: f64, end: f64) -> Vec<(f64, f64)> {
    let pieces = ((end - start) / 0.5).ceil().max(1.0) as usize;
    let width = (end - start) / pieces as f64;
    (0..pieces)
        .map(|i| {
            let from = start + width * i as f64;
            let to = if i + 1 == pieces { end } else { from + width };
            (from, to)
        })
        .collect()
}

/// Outline of a unit-radius wedge covering `[start, end]` (fractions of a turn),
/// starting at 12 o'clock and running clockwise.
pub fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let segments = (((end - start) * 120.0).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let t = start + (end - start) * i as f64 / segments as f64;
        points.push(point_on_circle(t, 1.0));
    }
    points
}

/// Where a wedge's value label sits: mid-angle, two thirds out.
pub fn label_anchor(start: f64, end: f64) -> [f64; 2] {
    point_on_circle((start + end) / 2.0, 0.65)
}

fn point_on_circle(turn: f64, radius: f64) -> [f64; 2] {
    let angle = TAU * turn;
    [radius * angle.sin(), radius * angle.cos()]
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render payload mass vs. outcome class, one series per booster category.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    ui.label(RichText::new(scatter_title(&state.site)).strong());
    if state.scatter.is_empty() {
        ui.label(EMPTY_NOTE);
    }

    let dataset = &state.dataset;

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Class")
        .include_y(-0.25)
        .include_y(1.25)
        .include_x(state.payload_range.low.min(state.payload_range.high))
        .include_x(state.payload_range.high.max(state.payload_range.low))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, color) in state.color_map.legend_entries() {
                let points: PlotPoints = state
                    .scatter
                    .iter()
                    .map(|&idx| &dataset.records[idx])
                    .filter(|rec| rec.booster_category == category)
                    .map(|rec| [rec.payload_mass_kg, f64::from(rec.class)])
                    .collect();
                if points.points().is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(points)
                        .name(&category)
                        .color(color)
                        .radius(5.0)
                        .shape(MarkerShape::Circle)
                        .filled(true),
                );
            }
        });
}
