// src/gui/pages/head_to_head.rs
//
// Directed fixture view: the home pick at home against the away pick.
// Form strips use the home team's home games and the away team's away
// games; the overall record counts both venues.

use eframe::egui::{self, RichText};

use crate::{
    config::{consts::FORM_LENGTH, options::PageKind},
    filter::{self, Selection},
    gui::{app::App, components::data_table},
    model::{FormMark, Venue},
    standings,
    stats::{self, head_to_head_record},
    table::{self, TableData},
};

use super::{no_data, Page};

pub struct HeadToHeadPage;
pub static PAGE: HeadToHeadPage = HeadToHeadPage;

fn picker(ui: &mut egui::Ui, id: &str, label: &str, options: &[String], pick: &mut Option<String>) {
    ui.label(label);
    let shown = pick.as_deref().unwrap_or("Select…");
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .width(180.0)
        .show_ui(ui, |ui| {
            for team in options {
                if ui.selectable_label(pick.as_deref() == Some(team), team).clicked() {
                    *pick = Some(team.clone());
                }
            }
        });
}

fn form_strip(ui: &mut egui::Ui, label: &str, marks: &[FormMark]) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong());
        if marks.is_empty() {
            ui.weak("no games");
        }
        for m in marks {
            ui.label(m.emoji());
        }
    });
}

fn selection(app: &App) -> Option<(String, String, Selection)> {
    let home = app.state.gui.selected_home.clone()?;
    let away = app.state.gui.selected_away.clone()?;
    let sel = Selection::from_matches(filter::head_to_head(app.matches(), &home, &away));
    Some((home, away, sel))
}

impl Page for HeadToHeadPage {
    fn title(&self) -> &'static str { "Head-to-head" }
    fn kind(&self) -> PageKind { PageKind::HeadToHead }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.matches().is_empty() {
            no_data(ui, "No matches loaded.");
            return;
        }

        let homes = filter::home_teams(app.matches());
        let aways = filter::away_teams(app.matches());

        ui.horizontal(|ui| {
            let gui = &mut app.state.gui;
            picker(ui, "h2h_home", "Home:", &homes, &mut gui.selected_home);
            picker(ui, "h2h_away", "Away:", &aways, &mut gui.selected_away);
        });
        ui.add_space(6.0);

        let Some((home, away, sel)) = selection(app) else {
            ui.label("Pick a home and an away team.");
            return;
        };

        // Form and overall record don't depend on the directed fixture.
        ui.heading("Recent form");
        let matches = app.matches();
        form_strip(ui, &format!("{home} (home):"), &stats::recent_form(matches, &home, Venue::Home, FORM_LENGTH));
        form_strip(ui, &format!("{away} (away):"), &stats::recent_form(matches, &away, Venue::Away, FORM_LENGTH));

        let record = head_to_head_record(matches, &home, &away);
        ui.add_space(6.0);
        ui.label(format!(
            "All meetings: {} {} wins, {} draws, {} {} wins",
            record.a_wins, home, record.draws, record.b_wins, away
        ));
        if let Some(fav) = record.favourite() {
            ui.label(format!("Most likely by history: {}", fav.label()));
        }

        ui.separator();

        if sel.is_empty() {
            no_data(ui, &format!("No matches found between {home} (home) and {away} (away)."));
            return;
        }

        ui.heading(format!("{home} vs {away}"));
        data_table::draw(ui, "h2h_matches", &table::matches_table(sel.matches()), None, None);

        ui.add_space(6.0);
        ui.heading("Points in these fixtures");
        let board = standings::build_leaderboard_with_roster(
            sel.matches(),
            &[home.as_str(), away.as_str()],
            app.state.options.tie_break,
        );
        data_table::draw(ui, "h2h_summary", &table::summary_table(&board), None, None);
    }

    fn export_table(&self, app: &App) -> Option<TableData> {
        let (_, _, sel) = selection(app)?;
        (!sel.is_empty()).then(|| table::matches_table(sel.matches()))
    }
}
