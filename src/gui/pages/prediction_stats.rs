// src/gui/pages/prediction_stats.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    gui::{app::App, components::data_table},
    stats::PredictionStats,
    table::TableData,
};

use super::{no_data, Page};

pub struct PredictionStatsPage;
pub static PAGE: PredictionStatsPage = PredictionStatsPage;

fn stats_table(stats: &PredictionStats) -> TableData {
    TableData::with(
        &["Metric", "Value"],
        vec![
            row!["Total matches", stats.total],
            row!["Correct predictions", stats.correct],
            row!["Wrong predictions", stats.wrong()],
            row!["Accuracy", stats],
        ],
    )
}

impl Page for PredictionStatsPage {
    fn title(&self) -> &'static str { "Prediction stats" }
    fn kind(&self) -> PageKind { PageKind::PredictionStats }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let stats = PredictionStats::from_matches(app.matches());
        if stats.total == 0 {
            no_data(ui, "No matches with both a result and a prediction.");
            return;
        }

        ui.heading(format!("Accuracy: {stats}"));
        ui.label(format!("{} of {} predictions correct", stats.correct, stats.total));
        ui.add_space(6.0);
        data_table::draw(ui, "prediction_stats", &stats_table(&stats), Some(&[180.0, 100.0]), None);
    }

    fn export_table(&self, app: &App) -> Option<TableData> {
        let stats = PredictionStats::from_matches(app.matches());
        (stats.total > 0).then(|| stats_table(&stats))
    }
}
