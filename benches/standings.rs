// benches/standings.rs
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use epl_standings::model::Outcome;
use epl_standings::standings::{build_leaderboard, compute_points, TieBreak};
use epl_standings::{filter, Match, OutcomeSource};

const TEAMS: [&str; 20] = [
    "Arsenal", "Aston Villa", "Bournemouth", "Brentford", "Brighton",
    "Chelsea", "Crystal Palace", "Everton", "Fulham", "Ipswich",
    "Leicester", "Liverpool", "Man City", "Man United", "Newcastle",
    "Nott'm Forest", "Southampton", "Tottenham", "West Ham", "Wolves",
];

/// Double round-robin with deterministic pseudo-random scores.
fn synthetic_season() -> Vec<Match> {
    let start = NaiveDate::from_ymd_opt(2024, 8, 16).unwrap();
    let mut out = Vec::with_capacity(380);
    let mut seed: u32 = 0x2024;
    let mut next = || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (seed >> 16) % 5
    };
    for (i, home) in TEAMS.iter().enumerate() {
        for (j, away) in TEAMS.iter().enumerate() {
            if i == j {
                continue;
            }
            let (hg, ag) = (next(), next());
            let actual = match hg.cmp(&ag) {
                std::cmp::Ordering::Greater => Outcome::HomeWin,
                std::cmp::Ordering::Less => Outcome::AwayWin,
                std::cmp::Ordering::Equal => Outcome::Draw,
            };
            let predicted = if next() < 3 { Outcome::HomeWin } else { Outcome::AwayWin };
            out.push(Match {
                date: start + Duration::days(((i * 19 + j) % 280) as i64),
                home_team: (*home).into(),
                away_team: (*away).into(),
                home_goals: hg,
                away_goals: ag,
                actual: Some(actual),
                predicted: Some(predicted),
            });
        }
    }
    out
}

fn bench_standings(c: &mut Criterion) {
    let season = filter::exclude_draws(&synthetic_season());

    c.bench_function("compute_points_actual", |b| {
        b.iter(|| black_box(compute_points(black_box(&season), OutcomeSource::Actual).len()))
    });

    c.bench_function("build_leaderboard_stable", |b| {
        b.iter(|| black_box(build_leaderboard(black_box(&season), TieBreak::Stable).len()))
    });

    c.bench_function("build_leaderboard_gd", |b| {
        b.iter(|| black_box(build_leaderboard(black_box(&season), TieBreak::GoalDifference).len()))
    });
}

criterion_group!(benches, bench_standings);
criterion_main!(benches);
