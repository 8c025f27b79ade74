// src/table.rs
//! TableData: headers + string rows, the shape every front end renders.
//!
//! Builders here turn leaderboards, match lists and form strips into
//! tables. The GUI draws them with egui_extras, the CLI prints them as
//! aligned text or CSV/TSV, and `file` writes them out.

use crate::model::{FormMark, LeaderboardRow, Match, OutcomeSource, TeamStanding};

pub const STANDINGS_HEADERS: [&str; 6] =
    ["Rank", "Team", "Points", "Goal Diff", "Goals For", "Goals Against"];

pub const LEADERBOARD_HEADERS: [&str; 9] = [
    "Rank", "Team", "Points Actual", "Points Predicted", "Point Diff",
    "Goal Diff", "Goals For", "Goals Against", "Played",
];

pub const MATCH_HEADERS: [&str; 8] = [
    "Date", "Home Team", "Away Team", "Home Goals", "Away Goals", "Result", "Prediction", "Season",
];

pub const SUMMARY_HEADERS: [&str; 9] = [
    "Team",
    "Points Actual", "GD Actual", "GF Actual", "GA Actual",
    "Points Predicted", "GD Predicted", "GF Predicted", "GA Predicted",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn with(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self { headers: Some(headers.iter().map(|h| s!(*h)).collect()), rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Column-aligned plain text for terminals. Numeric-looking cells are
    /// right-aligned.
    pub fn to_text(&self) -> String {
        let ncols = self.ncols();
        let mut widths = vec![0usize; ncols];
        let all = self.headers.iter().chain(self.rows.iter());
        for r in all.clone() {
            for (i, cell) in r.iter().enumerate().take(ncols) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = s!();
        for r in all {
            let line: Vec<String> = r
                .iter()
                .enumerate()
                .take(ncols)
                .map(|(i, cell)| {
                    if is_numeric(cell) {
                        format!("{:>w$}", cell, w = widths[i])
                    } else {
                        format!("{:<w$}", cell, w = widths[i])
                    }
                })
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        }
        out
    }

    /// CSV/TSV text; quoting follows the csv crate.
    pub fn to_delimited(&self, include_headers: bool, delim: u8) -> String {
        let mut w = csv::WriterBuilder::new()
            .delimiter(delim)
            .flexible(true)
            .from_writer(Vec::new());

        if include_headers {
            if let Some(h) = &self.headers {
                let _ = w.write_record(h);
            }
        }
        for r in &self.rows {
            let _ = w.write_record(r);
        }

        match w.into_inner() {
            Ok(buf) => String::from_utf8(buf)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()),
            Err(_) => s!(),
        }
    }
}

fn is_numeric(cell: &str) -> bool {
    !cell.is_empty() && cell.trim_start_matches(['-', '+']).chars().all(|c| c.is_ascii_digit())
}

fn side(row: &LeaderboardRow, source: OutcomeSource) -> &TeamStanding {
    match source {
        OutcomeSource::Actual => &row.actual,
        OutcomeSource::Predicted => &row.predicted,
    }
}

/// Rank, Team, Points, GD, GF, GA under one source, in leaderboard order.
pub fn standings_table(board: &[LeaderboardRow], source: OutcomeSource) -> TableData {
    let rows = board
        .iter()
        .map(|r| {
            let s = side(r, source);
            row![r.rank, r.team, s.points, s.goal_difference, s.goals_for, s.goals_against]
        })
        .collect();
    TableData::with(&STANDINGS_HEADERS, rows)
}

/// Combined view with the actual/predicted point gap.
pub fn leaderboard_table(board: &[LeaderboardRow]) -> TableData {
    let rows = board
        .iter()
        .map(|r| {
            row![
                r.rank,
                r.team,
                r.actual.points,
                r.predicted.points,
                format_diff(r.point_diff),
                r.actual.goal_difference,
                r.actual.goals_for,
                r.actual.goals_against,
                r.actual.played,
            ]
        })
        .collect();
    TableData::with(&LEADERBOARD_HEADERS, rows)
}

/// Per-team actual vs predicted, no ranking (head-to-head summary).
pub fn summary_table(board: &[LeaderboardRow]) -> TableData {
    let rows = board
        .iter()
        .map(|r| {
            let (a, p) = (&r.actual, &r.predicted);
            row![
                r.team,
                a.points, a.goal_difference, a.goals_for, a.goals_against,
                p.points, p.goal_difference, p.goals_for, p.goals_against,
            ]
        })
        .collect();
    TableData::with(&SUMMARY_HEADERS, rows)
}

/// Match list with result / prediction codes (blank when absent).
pub fn matches_table(matches: &[Match]) -> TableData {
    let code = |o: Option<crate::model::Outcome>| o.map(|o| o.code()).unwrap_or("");
    let rows = matches
        .iter()
        .map(|m| {
            row![
                m.date.format("%Y-%m-%d"),
                m.home_team,
                m.away_team,
                m.home_goals,
                m.away_goals,
                code(m.actual),
                code(m.predicted),
                m.season(),
            ]
        })
        .collect();
    TableData::with(&MATCH_HEADERS, rows)
}

/// One-row strip: columns "1".."n", cells W / -.
pub fn form_table(marks: &[FormMark], n: usize) -> TableData {
    let headers: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
    let row = marks.iter().take(n).map(|m| s!(m.symbol())).collect();
    TableData { headers: Some(headers), rows: vec![row] }
}

fn format_diff(d: i64) -> String {
    if d > 0 { format!("+{d}") } else { d.to_string() }
}
