// src/gui/components/data_table.rs
//
// Read-only grid for a TableData. Numeric cells are centered, text cells
// left-aligned. `highlight` marks one body row.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::table::TableData;

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 24.0;

pub fn draw(
    ui: &mut egui::Ui,
    id_salt: &str,
    table: &TableData,
    widths: Option<&[f32]>,
    highlight: Option<usize>,
) {
    let cols = table.ncols();
    if cols == 0 {
        return;
    }

    let width_of = |i: usize| -> f32 {
        widths
            .and_then(|w| w.get(i).copied())
            .unwrap_or(if i == 1 { 160.0 } else { 80.0 })
    };

    let hl_color = ui.visuals().selection.bg_fill;

    let mut builder = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));

    for i in 0..cols {
        builder = builder.column(Column::initial(width_of(i)).clip(true).at_least(20.0));
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            for i in 0..cols {
                let text = table
                    .headers
                    .as_ref()
                    .and_then(|h| h.get(i))
                    .map(String::as_str)
                    .unwrap_or("");
                header.col(|ui| {
                    ui.label(RichText::new(text).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.nrows(), |mut row| {
                let r = row.index();
                let marked = highlight == Some(r);
                row.set_selected(marked);
                for i in 0..cols {
                    let cell = table.rows[r].get(i).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        let mut rt = RichText::new(cell);
                        if marked {
                            rt = rt.strong().background_color(hl_color);
                        }
                        if is_numeric(cell) {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        } else {
                            ui.label(rt);
                        }
                    });
                }
            });
        });
}

fn is_numeric(cell: &str) -> bool {
    !cell.is_empty()
        && cell
            .trim_start_matches(['-', '+'])
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '%')
}
