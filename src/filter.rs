// src/filter.rs
//
// Match subsets handed to the aggregator. All filters borrow-and-clone;
// the loaded set is never mutated.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::model::{Match, Outcome};

/// Sorted, distinct team names (home ∪ away).
pub fn teams(matches: &[Match]) -> Vec<String> {
    let set: BTreeSet<&str> = matches
        .iter()
        .flat_map(|m| [m.home_team.as_str(), m.away_team.as_str()])
        .collect();
    set.into_iter().map(String::from).collect()
}

/// Sorted, distinct home sides.
pub fn home_teams(matches: &[Match]) -> Vec<String> {
    let set: BTreeSet<&str> = matches.iter().map(|m| m.home_team.as_str()).collect();
    set.into_iter().map(String::from).collect()
}

/// Sorted, distinct away sides.
pub fn away_teams(matches: &[Match]) -> Vec<String> {
    let set: BTreeSet<&str> = matches.iter().map(|m| m.away_team.as_str()).collect();
    set.into_iter().map(String::from).collect()
}

/// `home` hosting `away`. Order of input is kept.
pub fn head_to_head(matches: &[Match], home: &str, away: &str) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| m.home_team == home && m.away_team == away)
        .cloned()
        .collect()
}

/// Every meeting between `a` and `b`, either venue.
pub fn head_to_head_both(matches: &[Match], a: &str, b: &str) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| {
            (m.home_team == a && m.away_team == b) || (m.home_team == b && m.away_team == a)
        })
        .cloned()
        .collect()
}

/// Inclusive date window.
pub fn in_window(matches: &[Match], from: NaiveDate, to: NaiveDate) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| m.date >= from && m.date <= to)
        .cloned()
        .collect()
}

/// Drop matches whose recorded result is a draw. Matches with no recorded
/// result are kept.
pub fn exclude_draws(matches: &[Match]) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| m.actual != Some(Outcome::Draw))
        .cloned()
        .collect()
}

/// Outcome of narrowing to a subset: either rows to show or a "no data" notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Empty,
    Matches(Vec<Match>),
}

impl Selection {
    pub fn from_matches(matches: Vec<Match>) -> Self {
        if matches.is_empty() { Selection::Empty } else { Selection::Matches(matches) }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    pub fn matches(&self) -> &[Match] {
        match self {
            Selection::Empty => &[],
            Selection::Matches(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Outcome::*;

    fn m(date: (i32, u32, u32), home: &str, away: &str, actual: Outcome) -> Match {
        Match {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            home_team: s!(home),
            away_team: s!(away),
            home_goals: 0,
            away_goals: 0,
            actual: Some(actual),
            predicted: None,
        }
    }

    fn sample() -> Vec<Match> {
        vec![
            m((2024, 8, 17), "Arsenal", "Wolves", HomeWin),
            m((2024, 9, 1), "Wolves", "Arsenal", Draw),
            m((2025, 5, 25), "Chelsea", "Arsenal", AwayWin),
            m((2025, 6, 2), "Arsenal", "Wolves", AwayWin),
        ]
    }

    #[test]
    fn team_lists_are_sorted_and_distinct() {
        let ms = sample();
        assert_eq!(teams(&ms), ["Arsenal", "Chelsea", "Wolves"]);
        assert_eq!(home_teams(&ms), ["Arsenal", "Chelsea", "Wolves"]);
        assert_eq!(away_teams(&ms), ["Arsenal", "Wolves"]);
    }

    #[test]
    fn head_to_head_is_directed() {
        let ms = sample();
        assert_eq!(head_to_head(&ms, "Arsenal", "Wolves").len(), 2);
        assert_eq!(head_to_head(&ms, "Wolves", "Arsenal").len(), 1);
        assert_eq!(head_to_head_both(&ms, "Wolves", "Arsenal").len(), 3);
        assert!(head_to_head(&ms, "Chelsea", "Wolves").is_empty());
    }

    #[test]
    fn window_is_inclusive() {
        let ms = sample();
        let from = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 5, 25).unwrap();
        assert_eq!(in_window(&ms, from, to).len(), 3);
    }

    #[test]
    fn draws_dropped() {
        let out = exclude_draws(&sample());
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|m| m.actual != Some(Draw)));
    }

    #[test]
    fn selection_empty_notice() {
        let sel = Selection::from_matches(head_to_head(&sample(), "Chelsea", "Wolves"));
        assert!(sel.is_empty());
        assert!(sel.matches().is_empty());
    }
}
