use eframe::egui::{self, Color32, Response, RichText, Ui};

use crate::config::SliderConfig;
use crate::data::model::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – control widgets
// ---------------------------------------------------------------------------

/// Render the site selector and payload range controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Site selector ----
    ui.strong("Launch site");
    let current = state.site.label().to_string();
    let mut picked: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt("site_selector")
        .selected_text(&current)
        .width(ui.available_width() * 0.9)
        .show_ui(ui, |ui: &mut Ui| {
            for option in &state.site_options {
                if ui.selectable_label(current == *option, option).clicked() {
                    picked = Some(SiteSelection::from_label(option));
                }
            }
        });
    if let Some(site) = picked {
        state.set_site(site);
    }

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let slider = state.slider.clone();
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;

    let low_response = ui.add(
        egui::Slider::new(&mut low, slider.min..=slider.max)
            .clamping(egui::SliderClamping::Never)
            .step_by(slider.step)
            .text("low"),
    );
    let high_response = ui.add(
        egui::Slider::new(&mut high, slider.min..=slider.max)
            .clamping(egui::SliderClamping::Never)
            .step_by(slider.step)
            .text("high"),
    );

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for mark in slider_marks(&slider) {
            ui.small(format!("{mark:.0}"));
        }
    });

    // Only user edits move the stored range.
    if edited_by_user(&low_response) || edited_by_user(&high_response) {
        state.set_payload_range(PayloadRange::new(low, high));
    }

    if ui.button("Reset range").clicked() {
        state.reset_payload_range();
    }

    if state.payload_range.low > state.payload_range.high {
        ui.label(RichText::new("Lower bound exceeds upper bound").color(Color32::YELLOW));
    }
}

fn edited_by_user(response: &Response) -> bool {
    response.changed()
        && (response.is_pointer_button_down_on()
            || response.drag_stopped()
            || response.has_focus()
            || response.lost_focus())
}

/// Tick labels shown under the range sliders.
pub fn slider_marks(slider: &SliderConfig) -> Vec<f64> {
    if slider.mark_every <= 0.0 || slider.max < slider.min {
        return Vec::new();
    }
    let mut marks = Vec::new();
    let mut mark = slider.min;
    while mark <= slider.max {
        marks.push(mark);
        mark += slider.mark_every;
    }
    marks
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with dataset counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(
            RichText::new("SpaceX Launch Records Dashboard")
                .size(28.0)
                .color(Color32::from_rgb(0x50, 0x3D, 0x36)),
        );
    });
    ui.horizontal(|ui: &mut Ui| {
        if state.dataset.is_empty() {
            ui.label(RichText::new("The launch dataset has no rows").color(Color32::YELLOW));
            return;
        }
        ui.label(format!(
            "{} launches from {} sites loaded, {} plotted",
            state.dataset.len(),
            state.dataset.sites.len(),
            state.scatter.len()
        ));
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::model::{LaunchDataset, LaunchRecord};

    fn state() -> AppState {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 600.0, 0, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, 1, "B5"),
            LaunchRecord::new("VAFB SLC-4E", 800.0, 1, "v1.1"),
        ]);
        AppState::new(Arc::new(ds), SliderConfig::default())
    }

    fn run_frame(ctx: &egui::Context, state: &mut AppState) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::SidePanel::left("control_panel").show(ctx, |ui| side_panel(ui, state));
        });
    }

    #[test]
    fn untouched_sliders_keep_dataset_range() {
        let ctx = egui::Context::default();
        let mut s = state();
        let scatter_before = s.scatter.clone();

        run_frame(&ctx, &mut s);
        run_frame(&ctx, &mut s);

        assert_eq!(s.payload_range, PayloadRange::new(600.0, 9600.0));
        assert_eq!(s.scatter, scatter_before);
        assert_eq!(s.scatter.len(), 3);
    }

    #[test]
    fn reset_range_survives_next_frame() {
        let ctx = egui::Context::default();
        let mut s = state();
        s.set_payload_range(PayloadRange::new(1000.0, 2000.0));
        run_frame(&ctx, &mut s);
        assert_eq!(s.payload_range, PayloadRange::new(1000.0, 2000.0));

        s.reset_payload_range();
        run_frame(&ctx, &mut s);
        assert_eq!(s.payload_range, PayloadRange::new(600.0, 9600.0));
        assert_eq!(s.scatter, vec![0, 1, 2]);
    }

    #[test]
    fn default_marks_every_two_tonnes() {
        let marks = slider_marks(&SliderConfig::default());
        assert_eq!(marks, vec![0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10000.0]);
    }

    #[test]
    fn no_marks_for_bad_spacing() {
        let slider = SliderConfig {
            mark_every: 0.0,
            ..SliderConfig::default()
        };
        assert!(slider_marks(&slider).is_empty());
    }
}
