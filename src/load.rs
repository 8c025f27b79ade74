// src/load.rs
//! Input tables → [`Match`] list.
//!
//! Two CSV files feed the app:
//! - results:     `Date, HomeTeam, AwayTeam, FTHG, FTAG, FTR` (+ any extra columns)
//! - predictions: `Date, HomeTeam, AwayTeam, Predicted` (optional `Actual` label)
//!
//! The results table is narrowed first (season window, draws), then the
//! predictions are left-joined onto it on `(Date, HomeTeam, AwayTeam)`.
//! A prediction without a result keeps its row with no recorded outcome and
//! zero goals. Unknown outcome labels become "no outcome"; they never fail
//! the load. Bad dates or goal counts do, with file and line.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::options::{DataPaths, LoadOptions};
use crate::error::{Error, Result};
use crate::filter;
use crate::model::{Match, Outcome};

/// Loaded, joined match list plus what was dropped on the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub matches: Vec<Match>,
    pub report: LoadReport,
}

impl DataSet {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub results_read: usize,
    pub predictions_read: usize,
    pub outside_window: usize,
    pub dropped_draws: usize,
    /// Prediction rows with no result row to join to.
    pub unmatched_predictions: usize,
    /// Outcome cells that weren't H/A/D or Home Win/Away Win/Draw.
    pub bad_labels: usize,
    /// Result rows with the same team on both sides; skipped.
    pub self_fixtures: usize,
}

/// One parsed line of the results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub result: Option<Outcome>,
}

/// One parsed line of the predictions table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionRow {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub predicted: Option<Outcome>,
}

type JoinKey = (NaiveDate, String, String);

// Raw serde shapes (private)

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawResult {
    Date: String,
    HomeTeam: String,
    AwayTeam: String,
    FTHG: String,
    FTAG: String,
    #[serde(default)]
    FTR: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawPrediction {
    Date: String,
    HomeTeam: String,
    AwayTeam: String,
    #[serde(default, alias = "predicted")]
    Predicted: String,
    #[serde(default, alias = "actual")]
    Actual: String,
}

/// Load both tables from disk and join them.
pub fn load(paths: &DataPaths, opts: &LoadOptions) -> Result<DataSet> {
    let t = std::time::Instant::now();

    let results = read_results(open(&paths.results)?, &paths.results)?;
    let predictions = match &paths.predictions {
        Some(p) => Some(read_predictions(open(p)?, p)?),
        None => None,
    };

    let ds = join(results, predictions, opts);
    logf!(
        "Load: {} matches in {:?} (results={}, predictions={}, unmatched={}, draws dropped={}, bad labels={})",
        ds.matches.len(),
        t.elapsed(),
        ds.report.results_read,
        ds.report.predictions_read,
        ds.report.unmatched_predictions,
        ds.report.dropped_draws,
        ds.report.bad_labels,
    );
    Ok(ds)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

/// Deserialized rows paired with the file line each record starts on.
/// Blank lines and quoted line breaks are counted.
fn records<T, R>(rdr: R, path: &Path) -> Result<impl Iterator<Item = Result<(u64, T)>>>
where
    T: serde::de::DeserializeOwned,
    R: Read,
{
    let csv_err = |source| Error::Csv { path: path.to_path_buf(), source };
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let headers = reader.headers().map_err(csv_err)?.clone();
    let path = path.to_path_buf();

    Ok(reader.into_records().map(move |rec| {
        let csv_err = |source| Error::Csv { path: path.clone(), source };
        let rec = rec.map_err(csv_err)?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let row: T = rec.deserialize(Some(&headers)).map_err(csv_err)?;
        Ok((line, row))
    }))
}

/// Parse the results table. `path` is only used in error messages.
pub fn read_results<R: Read>(rdr: R, path: &Path) -> Result<Vec<ResultRow>> {
    let mut out = Vec::new();

    for rec in records::<RawResult, R>(rdr, path)? {
        let (line, raw) = rec?;
        let parse_err = |msg: String| Error::Parse { path: path.to_path_buf(), line, msg };

        let date = parse_date(&raw.Date).ok_or_else(|| parse_err(format!("bad date {:?}", raw.Date)))?;
        let home_goals = parse_goals(&raw.FTHG).ok_or_else(|| parse_err(format!("bad FTHG {:?}", raw.FTHG)))?;
        let away_goals = parse_goals(&raw.FTAG).ok_or_else(|| parse_err(format!("bad FTAG {:?}", raw.FTAG)))?;

        let result = Outcome::from_code(&raw.FTR);
        if result.is_none() {
            logw!("{}:{}: unknown result code {:?}, scoring as no result", path.display(), line, raw.FTR);
        }

        out.push(ResultRow {
            date,
            home_team: raw.HomeTeam,
            away_team: raw.AwayTeam,
            home_goals,
            away_goals,
            result,
        });
    }
    Ok(out)
}

/// Parse the predictions table. `path` is only used in error messages.
pub fn read_predictions<R: Read>(rdr: R, path: &Path) -> Result<Vec<PredictionRow>> {
    let mut out = Vec::new();

    for rec in records::<RawPrediction, R>(rdr, path)? {
        let (line, raw) = rec?;

        let date = parse_date(&raw.Date).ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
            line,
            msg: format!("bad date {:?}", raw.Date),
        })?;

        let predicted = Outcome::from_label(&raw.Predicted);
        if predicted.is_none() {
            logw!("{}:{}: unknown prediction label {:?}, scoring as no result", path.display(), line, raw.Predicted);
        }

        out.push(PredictionRow {
            date,
            home_team: raw.HomeTeam,
            away_team: raw.AwayTeam,
            predicted,
        });
    }
    Ok(out)
}

/// Narrow the results and left-join predictions onto them.
/// Without predictions, the narrowed results are the match list.
pub fn join(
    results: Vec<ResultRow>,
    predictions: Option<Vec<PredictionRow>>,
    opts: &LoadOptions,
) -> DataSet {
    let mut report = LoadReport {
        results_read: results.len(),
        bad_labels: results.iter().filter(|r| r.result.is_none()).count(),
        ..LoadReport::default()
    };

    let mut kept: Vec<Match> = Vec::with_capacity(results.len());
    for r in results {
        if r.home_team == r.away_team {
            logw!("Load: {} {} v itself, skipping", r.date, r.home_team);
            report.self_fixtures += 1;
            continue;
        }
        kept.push(to_match(r, None));
    }

    if opts.exclude_draws {
        let before = kept.len();
        kept = filter::exclude_draws(&kept);
        report.dropped_draws = before - kept.len();
    }
    if let Some((from, to)) = opts.window {
        let before = kept.len();
        kept = filter::in_window(&kept, from, to);
        report.outside_window = before - kept.len();
    }

    let Some(predictions) = predictions else {
        return DataSet { matches: kept, report };
    };

    report.predictions_read = predictions.len();
    report.bad_labels += predictions.iter().filter(|p| p.predicted.is_none()).count();

    let mut by_key: HashMap<JoinKey, Match> = HashMap::with_capacity(kept.len());
    for r in kept {
        let key = (r.date, r.home_team.clone(), r.away_team.clone());
        if by_key.contains_key(&key) {
            logw!("Load: duplicate result {} {} v {}, keeping the first", key.0, key.1, key.2);
            continue;
        }
        by_key.insert(key, r);
    }

    let matches = predictions
        .into_iter()
        .map(|p| {
            let key = (p.date, p.home_team, p.away_team);
            match by_key.get(&key) {
                Some(r) => Match { predicted: p.predicted, ..r.clone() },
                None => {
                    report.unmatched_predictions += 1;
                    logw!("Load: no result for {} {} v {}", key.0, key.1, key.2);
                    Match {
                        date: key.0,
                        home_team: key.1,
                        away_team: key.2,
                        home_goals: 0,
                        away_goals: 0,
                        actual: None,
                        predicted: p.predicted,
                    }
                }
            }
        })
        .collect();

    DataSet { matches, report }
}

fn to_match(r: ResultRow, predicted: Option<Outcome>) -> Match {
    Match {
        date: r.date,
        home_team: r.home_team,
        away_team: r.away_team,
        home_goals: r.home_goals,
        away_goals: r.away_goals,
        actual: r.result,
        predicted,
    }
}

/// `YYYY-MM-DD`, `DD/MM/YYYY` or `DD/MM/YY`; a trailing time part is ignored.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let day = s.trim().split([' ', 'T']).next()?;
    // %Y also takes two digits, so the short year must be tried first;
    // %y rejects "2024" on the trailing input.
    ["%Y-%m-%d", "%d/%m/%y", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
}

/// Highest goal count a single side can be credited with.
pub const MAX_GOALS: u32 = 99;

/// Whole goal count in `0..=MAX_GOALS`. Accepts "2" and "2.0" (pandas float export).
fn parse_goals(s: &str) -> Option<u32> {
    let s = s.trim();
    let n = match s.parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            let f: f64 = s.parse().ok()?;
            if !(f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= MAX_GOALS as f64) {
                return None;
            }
            f as u32
        }
    };
    (n <= MAX_GOALS).then_some(n)
}
