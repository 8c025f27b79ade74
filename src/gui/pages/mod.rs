// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, table::TableData};

use super::app::App;

pub mod head_to_head;
pub mod leaderboard;
pub mod prediction_stats;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body below the tabs and export bar.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Table that Copy / Export act on. `None` when there's nothing to export.
    fn export_table(&self, app: &App) -> Option<TableData>;

    /// Optional: per-column widths (in px-ish) for the main table.
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }
}

/// Warning-coloured "no data" line shared by pages.
pub fn no_data(ui: &mut egui::Ui, msg: &str) {
    ui.colored_label(ui.visuals().warn_fg_color, msg);
}
