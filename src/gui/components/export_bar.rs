// src/gui/components/export_bar.rs
//
// Format, headers toggle, output path, and Copy / Export for the current
// page's table.

use eframe::egui;

use crate::{config::options::ExportFormat, file, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let export = &mut app.state.options.export;

    ui.horizontal(|ui| {
        ui.label("Format:");
        let prev = export.format;
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev {
            logf!("UI: Export format → {:?}", export.format);
            app.state.gui.out_path_text = export.out_path().to_string_lossy().into_owned();
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.label("Output:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace),
        );
    });

    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            match app.current_page().export_table(app) {
                Some(t) if !t.is_empty() => {
                    let export = &app.state.options.export;
                    ui.ctx().copy_text(t.to_delimited(export.include_headers, export.delim()));
                    logf!("Copy: page={:?}, rows={}", app.current_page_kind(), t.nrows());
                    app.status("Copied to clipboard");
                }
                _ => {
                    logd!("Copy: Clicked, but there's nothing to copy");
                    app.status("Nothing to copy");
                }
            }
        }

        if ui.button("Export").clicked() {
            match app.current_page().export_table(app) {
                Some(t) if !t.is_empty() => {
                    let text = app.state.gui.out_path_text.clone();
                    app.state.options.export.set_path(&text);
                    match file::export_table(&app.state.options.export, &t) {
                        Ok(path) => {
                            app.state.gui.out_path_text = path.to_string_lossy().into_owned();
                            app.status(format!("Exported {} rows → {}", t.nrows(), path.display()));
                        }
                        Err(e) => {
                            loge!("Export: {e}");
                            app.status(format!("Export failed: {e}"));
                        }
                    }
                }
                _ => {
                    logd!("Export: Clicked, but there's nothing to export");
                    app.status("Nothing to export");
                }
            }
        }
    });
}
