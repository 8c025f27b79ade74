// src/model.rs
//
// Core records shared by the aggregator, loader and views.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Full-time result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    /// Result code as it appears in the results table (`FTR`): H / A / D.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "H" => Some(Outcome::HomeWin),
            "A" => Some(Outcome::AwayWin),
            "D" => Some(Outcome::Draw),
            _ => None,
        }
    }

    /// Prediction label: "Home Win" / "Away Win" / "Draw".
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "home win" => Some(Outcome::HomeWin),
            "away win" => Some(Outcome::AwayWin),
            "draw" => Some(Outcome::Draw),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Outcome::HomeWin => "H",
            Outcome::AwayWin => "A",
            Outcome::Draw => "D",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::HomeWin => "Home Win",
            Outcome::AwayWin => "Away Win",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which outcome column the aggregator scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeSource {
    Actual,
    Predicted,
}

impl OutcomeSource {
    pub fn label(self) -> &'static str {
        match self {
            OutcomeSource::Actual => "Actual",
            OutcomeSource::Predicted => "Predicted",
        }
    }
}

/// One fixture with its recorded score and both outcome labels.
/// `actual` is `None` when the prediction row found no result (join miss)
/// or the result code was unreadable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub actual: Option<Outcome>,
    pub predicted: Option<Outcome>,
}

impl Match {
    pub fn outcome(&self, source: OutcomeSource) -> Option<Outcome> {
        match source {
            OutcomeSource::Actual => self.actual,
            OutcomeSource::Predicted => self.predicted,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// Winner under `source`, if any.
    pub fn winner(&self, source: OutcomeSource) -> Option<&str> {
        match self.outcome(source)? {
            Outcome::HomeWin => Some(&self.home_team),
            Outcome::AwayWin => Some(&self.away_team),
            Outcome::Draw => None,
        }
    }

    pub fn season(&self) -> String {
        season_label(self.date)
    }
}

/// Accumulated table line for one team.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamStanding {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub points: u32,
    pub goal_difference: i32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl TeamStanding {
    pub fn new(team: impl Into<String>) -> Self {
        Self { team: team.into(), ..Self::default() }
    }
}

/// A team's actual and predicted standings side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub team: String,
    pub actual: TeamStanding,
    pub predicted: TeamStanding,
    /// `actual.points - predicted.points`
    pub point_diff: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Venue {
    Home,
    Away,
    Any,
}

/// Win / not-win mark for the recent-form strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMark {
    Win,
    NotWin,
}

impl FormMark {
    pub fn symbol(self) -> &'static str {
        match self {
            FormMark::Win => "W",
            FormMark::NotWin => "-",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            FormMark::Win => "✅",
            FormMark::NotWin => "❌",
        }
    }
}

/// Season label for a match date. Seasons start on 1 August:
/// 2024-08-17 → "2024/2025", 2025-05-25 → "2024/2025".
pub fn season_label(date: NaiveDate) -> String {
    let start = if date.month() >= 8 { date.year() } else { date.year() - 1 };
    format!("{}/{}", start, start + 1)
}

/// First and last day of the season that starts in `start_year`
/// (1 August .. 31 July).
pub fn season_bounds(start_year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let from = NaiveDate::from_ymd_opt(start_year, 8, 1)?;
    let to = NaiveDate::from_ymd_opt(start_year + 1, 7, 31)?;
    Some((from, to))
}
