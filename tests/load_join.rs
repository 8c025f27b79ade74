// tests/load_join.rs
use std::fs;
use std::path::Path;

use epl_standings::config::options::{DataPaths, LoadOptions};
use epl_standings::load::load;
use epl_standings::model::Outcome;
use epl_standings::Error;

const RESULTS: &str = "\
Date,HomeTeam,AwayTeam,FTHG,FTAG,FTR
16/08/2024,Man United,Fulham,1,0,H
17/08/2024,Arsenal,Wolves,2,0,H
17/08/2024,Everton,Brighton,0,3,A
25/08/2024,Brighton,Man United,2,2,D
20/05/2023,Arsenal,Everton,5,0,H
";

const PREDICTIONS: &str = "\
Date,HomeTeam,AwayTeam,Predicted
2024-08-16,Man United,Fulham,Away Win
2024-08-17,Arsenal,Wolves,Home Win
2024-08-17,Everton,Brighton,Draw
2024-09-01,Liverpool,Spurs,Home Win
";

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p
}

#[test]
fn filters_then_left_joins_predictions() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths {
        results: write(dir.path(), "results.csv", RESULTS),
        predictions: Some(write(dir.path(), "predictions.csv", PREDICTIONS)),
    };

    let ds = load(&paths, &LoadOptions::default()).unwrap();
    assert_eq!(ds.report.results_read, 5);
    assert_eq!(ds.report.predictions_read, 4);
    assert_eq!(ds.report.dropped_draws, 1);
    assert_eq!(ds.report.outside_window, 1);
    assert_eq!(ds.report.unmatched_predictions, 1);
    assert_eq!(ds.matches.len(), 4);

    let first = &ds.matches[0];
    assert_eq!(first.actual, Some(Outcome::HomeWin));
    assert_eq!(first.predicted, Some(Outcome::AwayWin));
    assert_eq!((first.home_goals, first.away_goals), (1, 0));

    let orphan = &ds.matches[3];
    assert_eq!(orphan.home_team, "Liverpool");
    assert_eq!(orphan.actual, None);
    assert_eq!((orphan.home_goals, orphan.away_goals), (0, 0));
}

#[test]
fn results_alone_keep_everything_when_unfiltered() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths {
        results: write(dir.path(), "results.csv", RESULTS),
        predictions: None,
    };

    let ds = load(&paths, &LoadOptions::unfiltered()).unwrap();
    assert_eq!(ds.matches.len(), 5);
    assert!(ds.matches.iter().all(|m| m.predicted.is_none()));
    assert_eq!(ds.report.dropped_draws, 0);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths {
        results: dir.path().join("nope.csv"),
        predictions: None,
    };
    match load(&paths, &LoadOptions::default()) {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("nope.csv")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn bad_goal_cell_is_a_parse_error_with_line() {
    let dir = tempfile::tempdir().unwrap();
    let body = "Date,HomeTeam,AwayTeam,FTHG,FTAG,FTR\n2024-08-17,Arsenal,Wolves,two,0,H\n";
    let paths = DataPaths {
        results: write(dir.path(), "results.csv", body),
        predictions: None,
    };
    match load(&paths, &LoadOptions::default()) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn two_digit_years_land_in_the_season() {
    let dir = tempfile::tempdir().unwrap();
    let body = "\
Date,HomeTeam,AwayTeam,FTHG,FTAG,FTR
16/08/24,Man United,Fulham,1,0,H
17/05/25,Arsenal,Wolves,2,0,H
20/05/23,Arsenal,Everton,5,0,H
";
    let paths = DataPaths {
        results: write(dir.path(), "results.csv", body),
        predictions: None,
    };

    let ds = load(&paths, &LoadOptions::default()).unwrap();
    assert_eq!(ds.report.outside_window, 1);
    assert_eq!(ds.matches.len(), 2);
    assert_eq!(ds.matches[0].date, chrono::NaiveDate::from_ymd_opt(2024, 8, 16).unwrap());
    assert_eq!(ds.matches[1].date, chrono::NaiveDate::from_ymd_opt(2025, 5, 17).unwrap());
}

#[test]
fn excluded_draw_leaves_one_counted_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let results = "\
Date,HomeTeam,AwayTeam,FTHG,FTAG,FTR
2024-09-01,Arsenal,Chelsea,2,1,H
2024-09-08,Chelsea,Arsenal,1,1,D
";
    let predictions = "\
Date,HomeTeam,AwayTeam,Predicted
2024-09-01,Arsenal,Chelsea,Home Win
2024-09-08,Chelsea,Arsenal,Draw
";
    let paths = DataPaths {
        results: write(dir.path(), "results.csv", results),
        predictions: Some(write(dir.path(), "predictions.csv", predictions)),
    };

    let ds = load(&paths, &LoadOptions::default()).unwrap();
    assert_eq!(ds.report.dropped_draws, 1);

    let stats = epl_standings::stats::PredictionStats::from_matches(&ds.matches);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.correct, 1);
    assert_eq!(stats.to_string(), "100.00%");
}
