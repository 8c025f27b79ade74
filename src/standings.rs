// src/standings.rs
//! Standings aggregation.
//!
//! Turns a slice of [`Match`]es into a league table under one outcome
//! source, and joins the actual and predicted tables into a ranked
//! leaderboard.
//!
//! The team universe is whatever appears in the matches handed in (home ∪
//! away), sorted by name. A head-to-head subset therefore only ever contains
//! its two teams; pass a roster to [`compute_points_with_roster`] to keep
//! everyone on the table.

use std::collections::BTreeMap;

use crate::model::{LeaderboardRow, Match, Outcome, OutcomeSource, TeamStanding};

pub const POINTS_PER_WIN: u32 = 3;

/// Ordering applied to equal actual points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep team-name order (stable sort on points only).
    #[default]
    Stable,
    /// Points, then goal difference, then goals for, then name.
    GoalDifference,
}

/// One standing per team appearing in `matches`, sorted by team name.
pub fn compute_points(matches: &[Match], source: OutcomeSource) -> Vec<TeamStanding> {
    compute_points_with_roster::<&str>(matches, &[], source)
}

/// Like [`compute_points`], but every team in `roster` gets a line even if
/// it has no match in `matches`.
pub fn compute_points_with_roster<S: AsRef<str>>(
    matches: &[Match],
    roster: &[S],
    source: OutcomeSource,
) -> Vec<TeamStanding> {
    let mut table: BTreeMap<&str, TeamStanding> = BTreeMap::new();

    for team in roster {
        let team = team.as_ref();
        table.entry(team).or_insert_with(|| TeamStanding::new(team));
    }
    for m in matches {
        table.entry(m.home_team.as_str()).or_insert_with(|| TeamStanding::new(&m.home_team));
        table.entry(m.away_team.as_str()).or_insert_with(|| TeamStanding::new(&m.away_team));
    }

    for m in matches {
        if m.home_team == m.away_team {
            logw!("Standings: {} {} v itself, not scored", m.date, m.home_team);
            continue;
        }
        let outcome = m.outcome(source);

        if let Some(home) = table.get_mut(m.home_team.as_str()) {
            credit(home, m.home_goals, m.away_goals, outcome == Some(Outcome::HomeWin));
        }
        if let Some(away) = table.get_mut(m.away_team.as_str()) {
            credit(away, m.away_goals, m.home_goals, outcome == Some(Outcome::AwayWin));
        }
    }

    table.into_values().collect()
}

fn credit(line: &mut TeamStanding, scored: u32, conceded: u32, won: bool) {
    line.played += 1;
    line.goals_for = line.goals_for.saturating_add(scored);
    line.goals_against = line.goals_against.saturating_add(conceded);
    line.goal_difference = line
        .goal_difference
        .saturating_add_unsigned(scored)
        .saturating_sub_unsigned(conceded);
    if won {
        line.won += 1;
        line.points += POINTS_PER_WIN;
    }
}

/// Actual and predicted standings joined per team, ranked by actual points.
pub fn build_leaderboard(matches: &[Match], tie_break: TieBreak) -> Vec<LeaderboardRow> {
    let actual = compute_points(matches, OutcomeSource::Actual);
    let predicted = compute_points(matches, OutcomeSource::Predicted);
    join_and_rank(actual, predicted, tie_break)
}

/// Leaderboard over a roster-completed universe (teams without matches get
/// zero lines on both sides).
pub fn build_leaderboard_with_roster<S: AsRef<str>>(
    matches: &[Match],
    roster: &[S],
    tie_break: TieBreak,
) -> Vec<LeaderboardRow> {
    let actual = compute_points_with_roster(matches, roster, OutcomeSource::Actual);
    let predicted = compute_points_with_roster(matches, roster, OutcomeSource::Predicted);
    join_and_rank(actual, predicted, tie_break)
}

fn join_and_rank(
    actual: Vec<TeamStanding>,
    predicted: Vec<TeamStanding>,
    tie_break: TieBreak,
) -> Vec<LeaderboardRow> {
    let mut predicted: BTreeMap<String, TeamStanding> =
        predicted.into_iter().map(|s| (s.team.clone(), s)).collect();

    // Inner join; both sides come from the same team universe.
    let mut rows: Vec<LeaderboardRow> = actual
        .into_iter()
        .filter_map(|a| {
            let p = predicted.remove(&a.team)?;
            Some(LeaderboardRow {
                rank: 0,
                team: a.team.clone(),
                point_diff: a.points as i64 - p.points as i64,
                actual: a,
                predicted: p,
            })
        })
        .collect();

    match tie_break {
        TieBreak::Stable => rows.sort_by(|a, b| b.actual.points.cmp(&a.actual.points)),
        TieBreak::GoalDifference => rows.sort_by(|a, b| {
            b.actual.points.cmp(&a.actual.points)
                .then(b.actual.goal_difference.cmp(&a.actual.goal_difference))
                .then(b.actual.goals_for.cmp(&a.actual.goals_for))
                .then_with(|| a.team.cmp(&b.team))
        }),
    }

    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Row with the largest |point_diff|; the first one in leaderboard order on ties.
pub fn biggest_point_diff(rows: &[LeaderboardRow]) -> Option<&LeaderboardRow> {
    rows.iter().fold(None, |best: Option<&LeaderboardRow>, row| match best {
        Some(b) if b.point_diff.abs() >= row.point_diff.abs() => Some(b),
        _ => Some(row),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Outcome::{self, *};
    use chrono::NaiveDate;

    fn m(home: &str, away: &str, hg: u32, ag: u32, actual: Option<Outcome>, pred: Option<Outcome>) -> Match {
        Match {
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            home_team: s!(home),
            away_team: s!(away),
            home_goals: hg,
            away_goals: ag,
            actual,
            predicted: pred,
        }
    }

    fn line<'a>(table: &'a [TeamStanding], team: &str) -> &'a TeamStanding {
        table.iter().find(|s| s.team == team).unwrap()
    }

    #[test]
    fn two_match_example() {
        let matches = vec![
            m("A", "B", 2, 1, Some(HomeWin), Some(HomeWin)),
            m("B", "A", 0, 0, Some(Draw), Some(Draw)),
        ];
        let table = compute_points(&matches, OutcomeSource::Actual);
        assert_eq!(table.len(), 2);

        let a = line(&table, "A");
        assert_eq!((a.points, a.goal_difference, a.goals_for, a.goals_against), (3, 1, 2, 1));
        let b = line(&table, "B");
        assert_eq!((b.points, b.goal_difference, b.goals_for, b.goals_against), (0, -1, 1, 2));
    }

    #[test]
    fn goals_count_even_without_outcome() {
        let matches = vec![m("A", "B", 3, 0, None, Some(AwayWin))];

        let actual = compute_points(&matches, OutcomeSource::Actual);
        assert_eq!(line(&actual, "A").points, 0);
        assert_eq!(line(&actual, "A").goals_for, 3);
        assert_eq!(line(&actual, "B").goals_against, 3);

        let predicted = compute_points(&matches, OutcomeSource::Predicted);
        assert_eq!(line(&predicted, "B").points, 3);
        assert_eq!(line(&predicted, "A").points, 0);
    }

    #[test]
    fn self_fixture_scores_nothing() {
        let matches = vec![
            m("A", "A", 2, 0, Some(HomeWin), Some(HomeWin)),
            m("A", "B", 1, 0, Some(HomeWin), Some(AwayWin)),
        ];
        let table = compute_points(&matches, OutcomeSource::Actual);
        let a = line(&table, "A");
        assert_eq!((a.played, a.won, a.points), (1, 1, 3));
        assert_eq!(table.iter().map(|t| t.points).sum::<u32>(), 3);
    }

    #[test]
    fn huge_goal_counts_saturate() {
        let matches = vec![
            m("A", "B", u32::MAX, 0, Some(HomeWin), None),
            m("B", "A", 0, 5, Some(AwayWin), None),
        ];
        let table = compute_points(&matches, OutcomeSource::Actual);
        let a = line(&table, "A");
        assert_eq!(a.goals_for, u32::MAX);
        assert_eq!(a.goal_difference, i32::MAX);
        assert_eq!(line(&table, "B").goal_difference, i32::MIN);
    }

    #[test]
    fn output_sorted_by_team_name() {
        let matches = vec![m("Wolves", "Arsenal", 0, 1, Some(AwayWin), None)];
        let table = compute_points(&matches, OutcomeSource::Actual);
        let names: Vec<_> = table.iter().map(|s| s.team.as_str()).collect();
        assert_eq!(names, ["Arsenal", "Wolves"]);
    }

    #[test]
    fn roster_keeps_idle_teams() {
        let matches = vec![m("A", "B", 1, 0, Some(HomeWin), Some(HomeWin))];
        let roster = ["A", "B", "C"];
        let table = compute_points_with_roster(&matches, &roster, OutcomeSource::Actual);
        assert_eq!(table.len(), 3);
        assert_eq!(line(&table, "C"), &TeamStanding::new("C"));

        // Without roster C is simply absent
        assert_eq!(compute_points(&matches, OutcomeSource::Actual).len(), 2);
    }

    #[test]
    fn leaderboard_stable_ties_keep_name_order() {
        let matches = vec![
            m("C", "D", 5, 0, Some(HomeWin), Some(AwayWin)),
            m("B", "A", 1, 0, Some(HomeWin), Some(HomeWin)),
        ];
        let board = build_leaderboard(&matches, TieBreak::Stable);
        let order: Vec<_> = board.iter().map(|r| (r.rank, r.team.as_str())).collect();
        // B and C tie on 3; name order wins, not goal difference
        assert_eq!(order, [(1, "B"), (2, "C"), (3, "A"), (4, "D")]);

        let c = board.iter().find(|r| r.team == "C").unwrap();
        assert_eq!(c.point_diff, 3);
        let d = board.iter().find(|r| r.team == "D").unwrap();
        assert_eq!(d.point_diff, -3);
    }

    #[test]
    fn leaderboard_goal_difference_tie_break() {
        let matches = vec![
            m("C", "D", 5, 0, Some(HomeWin), None),
            m("B", "A", 1, 0, Some(HomeWin), None),
        ];
        let board = build_leaderboard(&matches, TieBreak::GoalDifference);
        let order: Vec<_> = board.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(order, ["C", "B", "A", "D"]);
    }

    #[test]
    fn empty_input_gives_empty_leaderboard() {
        assert!(build_leaderboard(&[], TieBreak::Stable).is_empty());
        assert!(compute_points(&[], OutcomeSource::Predicted).is_empty());
        assert!(biggest_point_diff(&[]).is_none());
    }

    #[test]
    fn biggest_diff_prefers_first_on_ties() {
        let matches = vec![
            m("A", "B", 1, 0, Some(HomeWin), Some(AwayWin)),
        ];
        let board = build_leaderboard(&matches, TieBreak::Stable);
        // A: +3, B: -3; A ranks first
        assert_eq!(biggest_point_diff(&board).unwrap().team, "A");
    }
}
