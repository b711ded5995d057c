use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::class_label;
use crate::data::filter::select;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Records table (bottom panel)
// ---------------------------------------------------------------------------

/// List the launches currently shown in the scatter chart.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    ui.strong(format!("Plotted launches ({})", state.scatter.len()));

    let rows = select(&state.dataset, &state.scatter);
    if rows.is_empty() {
        ui.label("No launches match the current selection");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in [
                "Flight",
                "Launch Site",
                "Payload (kg)",
                "Outcome",
                "Booster Version",
                "Category",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let rec = rows[row.index()];
                row.col(|ui| {
                    ui.label(rec.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(&rec.launch_site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(class_label(rec.class));
                });
                row.col(|ui| {
                    ui.label(rec.booster_version.as_deref().unwrap_or("-"));
                });
                row.col(|ui| {
                    ui.label(&rec.booster_category);
                });
            });
        });
}
