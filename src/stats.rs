// src/stats.rs
//! Prediction accuracy, head-to-head record and recent form.

use std::fmt;

use crate::filter;
use crate::model::{FormMark, Match, Outcome, OutcomeSource, Venue};

/// Agreement between recorded and predicted outcomes.
///
/// Only matches carrying both labels are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PredictionStats {
    pub total: usize,
    pub correct: usize,
}

impl PredictionStats {
    pub fn from_matches(matches: &[Match]) -> Self {
        matches
            .iter()
            .filter_map(|m| Some((m.actual?, m.predicted?)))
            .fold(Self::default(), |mut acc, (actual, predicted)| {
                acc.total += 1;
                if actual == predicted {
                    acc.correct += 1;
                }
                acc
            })
    }

    pub fn wrong(&self) -> usize {
        self.total - self.correct
    }

    /// Percentage in 0..=100, `None` when nothing was counted.
    pub fn accuracy_pct(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64 * 100.0)
    }
}

impl fmt::Display for PredictionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.accuracy_pct() {
            Some(p) => write!(f, "{p:.2}%"),
            None => f.write_str("n/a"),
        }
    }
}

/// Win/draw tally between two teams over both venues, by recorded result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct H2hRecord {
    pub a_wins: usize,
    pub draws: usize,
    pub b_wins: usize,
    pub total: usize,
}

impl H2hRecord {
    /// Most frequent result so far. Ties go Home (team a), then Draw, then
    /// Away (team b). `None` without history.
    pub fn favourite(&self) -> Option<Outcome> {
        if self.total == 0 {
            return None;
        }
        let mut best = (Outcome::HomeWin, self.a_wins);
        for cand in [(Outcome::Draw, self.draws), (Outcome::AwayWin, self.b_wins)] {
            if cand.1 > best.1 {
                best = cand;
            }
        }
        Some(best.0)
    }
}

pub fn head_to_head_record(matches: &[Match], a: &str, b: &str) -> H2hRecord {
    let mut rec = H2hRecord::default();
    for m in &filter::head_to_head_both(matches, a, b) {
        rec.total += 1;
        match m.actual {
            Some(Outcome::Draw) => rec.draws += 1,
            Some(_) => match m.winner(OutcomeSource::Actual) {
                Some(w) if w == a => rec.a_wins += 1,
                Some(_) => rec.b_wins += 1,
                None => {}
            },
            None => {}
        }
    }
    rec
}

/// The `n` most recent matches of `team` at `venue`, newest first, marked
/// win / not-win by the recorded result.
pub fn recent_form(matches: &[Match], team: &str, venue: Venue, n: usize) -> Vec<FormMark> {
    let mut played: Vec<&Match> = matches
        .iter()
        .filter(|m| match venue {
            Venue::Home => m.home_team == team,
            Venue::Away => m.away_team == team,
            Venue::Any => m.involves(team),
        })
        .collect();

    // Stable: same-day matches keep input order.
    played.sort_by(|x, y| y.date.cmp(&x.date));

    played
        .into_iter()
        .take(n)
        .map(|m| {
            if m.winner(OutcomeSource::Actual) == Some(team) {
                FormMark::Win
            } else {
                FormMark::NotWin
            }
        })
        .collect()
}
