// src/gui/components/source_panel.rs
//
// Left panel: input file paths, row filters, tie-break, Reload, and what
// the last load dropped.

use eframe::egui;

use crate::{config::options::TieBreak, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Data");
    ui.add_space(4.0);

    ui.label("Results CSV:");
    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.results_path_text)
            .font(egui::TextStyle::Monospace),
    );
    ui.label("Predictions CSV (blank for none):");
    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.predictions_path_text)
            .font(egui::TextStyle::Monospace),
    );

    ui.add_space(6.0);

    // Load filters only take effect on the next Reload.
    let load = &mut app.state.options.load;
    ui.checkbox(&mut load.exclude_draws, "Exclude draws");
    let mut windowed = load.window.is_some();
    if ui.checkbox(&mut windowed, "2024/2025 season only").changed() {
        load.window = if windowed {
            crate::config::options::LoadOptions::default().window
        } else {
            None
        };
        logf!("UI: Season window → {:?}", load.window);
    }

    // Tie-break is a view concern; rebuild immediately.
    let mut gd = app.state.options.tie_break == TieBreak::GoalDifference;
    if ui.checkbox(&mut gd, "Break ties by goal difference").changed() {
        app.state.options.tie_break = if gd { TieBreak::GoalDifference } else { TieBreak::Stable };
        logf!("UI: Tie-break → {:?}", app.state.options.tie_break);
        app.rebuild_view();
    }

    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if ui.button("Reload").clicked() {
            app.reload();
        }
        if app.cache.is_stale() {
            ui.colored_label(ui.visuals().warn_fg_color, "Files changed on disk");
        }
    });

    ui.separator();

    match app.data.as_deref() {
        Some(ds) => {
            let r = &ds.report;
            egui::Grid::new("load_report").num_columns(2).striped(true).show(ui, |ui| {
                let mut line = |k: &str, v: usize| {
                    ui.label(k);
                    ui.label(v.to_string());
                    ui.end_row();
                };
                line("Matches", ds.matches.len());
                line("Result rows", r.results_read);
                line("Prediction rows", r.predictions_read);
                line("Draws dropped", r.dropped_draws);
                line("Outside season", r.outside_window);
                line("Unmatched predictions", r.unmatched_predictions);
                line("Bad labels", r.bad_labels);
                line("Self fixtures", r.self_fixtures);
            });
        }
        None => {
            crate::gui::pages::no_data(ui, "Nothing loaded.");
        }
    }
}
