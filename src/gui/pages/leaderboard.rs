// src/gui/pages/leaderboard.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    gui::{app::App, components::data_table},
    model::OutcomeSource,
    standings,
    table::{self, TableData},
};

use super::{no_data, Page};

pub struct LeaderboardPage;
pub static PAGE: LeaderboardPage = LeaderboardPage;

const STANDINGS_WIDTHS: [f32; 6] = [44.0, 150.0, 56.0, 70.0, 70.0, 90.0];

impl Page for LeaderboardPage {
    fn title(&self) -> &'static str { "Leaderboard" }
    fn kind(&self) -> PageKind { PageKind::Leaderboard }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.board.is_empty() {
            no_data(ui, "No matches loaded.");
            return;
        }

        let hl = standings::biggest_point_diff(&app.board)
            .and_then(|top| app.board.iter().position(|r| r.team == top.team));

        ui.columns(2, |cols| {
            for (ui, source) in cols.iter_mut().zip([OutcomeSource::Actual, OutcomeSource::Predicted]) {
                ui.heading(format!("{} standings", source.label()));
                let t = table::standings_table(&app.board, source);
                data_table::draw(ui, source.label(), &t, Some(&STANDINGS_WIDTHS), hl);
            }
        });

        if let Some(top) = standings::biggest_point_diff(&app.board) {
            ui.add_space(6.0);
            ui.label(format!(
                "Biggest gap: {} ({} actual vs {} predicted, {:+})",
                top.team, top.actual.points, top.predicted.points, top.point_diff
            ));
        }

        ui.separator();
        ui.heading("Combined");
        let t = table::leaderboard_table(&app.board);
        data_table::draw(ui, "combined", &t, self.preferred_column_widths(), hl);
    }

    fn export_table(&self, app: &App) -> Option<TableData> {
        (!app.board.is_empty()).then(|| table::leaderboard_table(&app.board))
    }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[44.0, 150.0, 90.0, 110.0, 76.0, 70.0, 70.0, 90.0, 56.0])
    }
}
