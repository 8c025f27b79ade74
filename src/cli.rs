// src/cli.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, WrapErr};

use crate::config::consts::{DEFAULT_RESULTS_FILE, FORM_LENGTH};
use crate::config::options::{AppOptions, DataPaths, ExportFormat, LoadOptions, TieBreak};
use crate::filter::{self, Selection};
use crate::load::DataSet;
use crate::model::{season_bounds, OutcomeSource, Venue};
use crate::standings::{biggest_point_diff, build_leaderboard, build_leaderboard_with_roster};
use crate::stats::{head_to_head_record, recent_form, PredictionStats};
use crate::store::DatasetCache;
use crate::table::{self, TableData};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "League table from results vs model predictions")]
pub struct Args {
    /// Results table (Date, HomeTeam, AwayTeam, FTHG, FTAG, FTR)
    #[arg(long, global = true, default_value = DEFAULT_RESULTS_FILE)]
    pub results: PathBuf,

    /// Predictions table (Date, HomeTeam, AwayTeam, Predicted)
    #[arg(long, global = true)]
    pub predictions: Option<PathBuf>,

    /// First day of the season window (inclusive)
    #[arg(long, global = true, value_parser = parse_day)]
    pub from: Option<NaiveDate>,

    /// Last day of the season window (inclusive)
    #[arg(long, global = true, value_parser = parse_day)]
    pub to: Option<NaiveDate>,

    /// Use every row regardless of date
    #[arg(long, global = true, conflicts_with_all = ["from", "to", "season"])]
    pub all_dates: bool,

    /// Whole season starting in this year (1 Aug .. 31 Jul), e.g. 2023
    #[arg(long, global = true, conflicts_with_all = ["from", "to"])]
    pub season: Option<i32>,

    /// Keep drawn results (dropped by default)
    #[arg(long, global = true)]
    pub keep_draws: bool,

    #[arg(long, global = true, value_enum, default_value_t = TieBreakArg::Stable)]
    pub tie_break: TieBreakArg,

    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write the main table to this file (CSV unless --format tsv)
    #[arg(short, long, global = true)]
    pub out: Option<PathBuf>,

    /// Omit the header row in CSV/TSV output
    #[arg(long, global = true)]
    pub no_headers: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Actual vs predicted leaderboard
    Leaderboard,
    /// One league table
    Standings {
        #[arg(long, value_enum, default_value_t = SourceArg::Actual)]
        source: SourceArg,
    },
    /// How often the prediction matched the result
    Accuracy,
    /// Meetings of one home side with one away side
    H2h {
        #[arg(long)]
        home: String,
        #[arg(long)]
        away: String,
    },
    /// Last results of one team
    Form {
        #[arg(long)]
        team: String,
        #[arg(long, value_enum, default_value_t = VenueArg::Any)]
        venue: VenueArg,
        #[arg(short, default_value_t = FORM_LENGTH)]
        n: usize,
    },
    /// Teams in the loaded data
    Teams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg { Stable, Gd }

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format { Text, Csv, Tsv }

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg { Actual, Predicted }

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VenueArg { Home, Away, Any }

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    crate::load::parse_date(s).ok_or_else(|| format!("not a date: {s} (use YYYY-MM-DD)"))
}

impl Args {
    /// Fold flags over the built-in defaults.
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.data = DataPaths {
            results: self.results.clone(),
            predictions: self.predictions.clone(),
        };

        opts.load = if self.all_dates {
            LoadOptions { window: None, ..LoadOptions::default() }
        } else if let Some(year) = self.season {
            LoadOptions { window: season_bounds(year), ..LoadOptions::default() }
        } else {
            let mut load = LoadOptions::default();
            if let Some((from, to)) = load.window {
                load.window = Some((self.from.unwrap_or(from), self.to.unwrap_or(to)));
            }
            load
        };
        opts.load.exclude_draws = !self.keep_draws;

        opts.tie_break = match self.tie_break {
            TieBreakArg::Stable => TieBreak::Stable,
            TieBreakArg::Gd => TieBreak::GoalDifference,
        };

        opts.export.format = match self.format {
            Format::Tsv => ExportFormat::Tsv,
            Format::Text | Format::Csv => ExportFormat::Csv,
        };
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// What a command produced: titled tables plus free-text lines.
#[derive(Debug, Default)]
pub struct Report {
    pub sections: Vec<(String, TableData)>,
    pub notes: Vec<String>,
}

impl Report {
    fn section(mut self, title: impl Into<String>, table: TableData) -> Self {
        self.sections.push((title.into(), table));
        self
    }

    fn note(mut self, line: impl Into<String>) -> Self {
        self.notes.push(line.into());
        self
    }

    /// First table; the one `--out` writes.
    pub fn primary(&self) -> Option<&TableData> {
        self.sections.first().map(|(_, t)| t)
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init_stderr();

    let opts = args.to_options();
    if let Some((from, to)) = opts.load.window {
        if from > to {
            bail!("--from {from} is after --to {to}");
        }
    }

    let mut cache = DatasetCache::new(opts.data.clone(), opts.load.clone());
    let data = cache
        .get()
        .wrap_err_with(|| format!("loading {}", opts.data.results.display()))?;

    let report = execute(&args.command, &data, &opts);
    print_report(&report, args.format, &opts);

    if args.out.is_some() {
        if let Some(t) = report.primary() {
            let path = crate::file::export_table(&opts.export, t)?;
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}

pub fn execute(cmd: &Command, data: &DataSet, opts: &AppOptions) -> Report {
    let matches = &data.matches;

    match cmd {
        Command::Leaderboard => {
            let board = build_leaderboard(matches, opts.tie_break);
            if board.is_empty() {
                return Report::default().note("No matches loaded.");
            }
            let mut r = Report::default().section("Leaderboard", table::leaderboard_table(&board));
            if let Some(top) = biggest_point_diff(&board) {
                r = r.note(format!(
                    "Biggest gap: {} ({} points)",
                    top.team,
                    top.point_diff.unsigned_abs()
                ));
            }
            r
        }
        Command::Standings { source } => {
            let source = match source {
                SourceArg::Actual => OutcomeSource::Actual,
                SourceArg::Predicted => OutcomeSource::Predicted,
            };
            let board = build_leaderboard(matches, opts.tie_break);
            if board.is_empty() {
                return Report::default().note("No matches loaded.");
            }
            Report::default().section(
                format!("{} standings", source.label()),
                table::standings_table(&board, source),
            )
        }
        Command::Accuracy => {
            let st = PredictionStats::from_matches(matches);
            let t = TableData::with(
                &["Matches", "Correct", "Accuracy"],
                vec![row![st.total, st.correct, st]],
            );
            Report::default().section("Prediction stats", t)
        }
        Command::H2h { home, away } => {
            let sel = Selection::from_matches(filter::head_to_head(matches, home, away));
            if sel.is_empty() {
                return Report::default().note(format!("No meetings of {home} (home) and {away} (away) in this data."));
            }
            let board = build_leaderboard_with_roster(sel.matches(), &[home, away], opts.tie_break);
            let rec = head_to_head_record(matches, home, away);
            let fav = match rec.favourite() {
                Some(crate::model::Outcome::HomeWin) => home.as_str(),
                Some(crate::model::Outcome::AwayWin) => away.as_str(),
                Some(crate::model::Outcome::Draw) => "draw",
                None => "-",
            };
            let home_form = recent_form(matches, home, Venue::Home, FORM_LENGTH);
            let away_form = recent_form(matches, away, Venue::Away, FORM_LENGTH);

            Report::default()
                .section(format!("{home} vs {away}"), table::matches_table(sel.matches()))
                .section("Summary points", table::summary_table(&board))
                .section(format!("{home}: last {FORM_LENGTH} at home"), table::form_table(&home_form, FORM_LENGTH))
                .section(format!("{away}: last {FORM_LENGTH} away"), table::form_table(&away_form, FORM_LENGTH))
                .note(format!(
                    "All meetings: {home} {} / draws {} / {away} {} (favourite: {fav})",
                    rec.a_wins, rec.draws, rec.b_wins
                ))
        }
        Command::Form { team, venue, n } => {
            let venue = match venue {
                VenueArg::Home => Venue::Home,
                VenueArg::Away => Venue::Away,
                VenueArg::Any => Venue::Any,
            };
            let marks = recent_form(matches, team, venue, *n);
            if marks.is_empty() {
                return Report::default().note(format!("No matches for {team}."));
            }
            Report::default().section(format!("{team}: last {n}"), table::form_table(&marks, *n))
        }
        Command::Teams => {
            let rows = filter::teams(matches).into_iter().map(|t| vec![t]).collect();
            Report::default().section("Teams", TableData::with(&["Team"], rows))
        }
    }
}

fn print_report(report: &Report, format: Format, opts: &AppOptions) {
    for (i, (title, t)) in report.sections.iter().enumerate() {
        if i > 0 { println!(); }
        match format {
            Format::Text => {
                println!("== {title}");
                print!("{}", t.to_text());
            }
            Format::Csv | Format::Tsv => {
                print!("{}", t.to_delimited(opts.export.include_headers, opts.export.delim()));
            }
        }
    }
    for n in &report.notes {
        if format == Format::Text { println!("{n}"); } else { eprintln!("{n}"); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Match, Outcome::*};

    fn data() -> DataSet {
        let m = |d: u32, home: &str, away: &str, hg, ag, actual, pred| Match {
            date: NaiveDate::from_ymd_opt(2024, 9, d).unwrap(),
            home_team: s!(home),
            away_team: s!(away),
            home_goals: hg,
            away_goals: ag,
            actual,
            predicted: pred,
        };
        DataSet {
            matches: vec![
                m(1, "Arsenal", "Chelsea", 2, 1, Some(HomeWin), Some(HomeWin)),
                m(8, "Chelsea", "Arsenal", 0, 1, Some(AwayWin), Some(HomeWin)),
                m(15, "Arsenal", "Chelsea", 0, 3, Some(AwayWin), Some(HomeWin)),
            ],
            ..DataSet::default()
        }
    }

    #[test]
    fn flags_fold_into_options() {
        let args = Args::try_parse_from([
            "cli", "--from", "2024-09-01", "--keep-draws", "--tie-break", "gd",
            "--format", "tsv", "-o", "out/table.txt", "leaderboard",
        ])
        .unwrap();
        let opts = args.to_options();
        let (from, to) = opts.load.window.unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2025, 5, 31).unwrap());
        assert!(!opts.load.exclude_draws);
        assert_eq!(opts.tie_break, TieBreak::GoalDifference);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(opts.export.out_path().ends_with("table.txt"));
    }

    #[test]
    fn all_dates_clears_window() {
        let args = Args::try_parse_from(["cli", "teams", "--all-dates"]).unwrap();
        assert_eq!(args.to_options().load.window, None);
    }

    #[test]
    fn season_flag_sets_full_season_window() {
        let args = Args::try_parse_from(["cli", "--season", "2023", "accuracy"]).unwrap();
        let (from, to) = args.to_options().load.window.unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2023, 8, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 7, 31).unwrap());
    }

    #[test]
    fn leaderboard_report() {
        let opts = AppOptions::default();
        let r = execute(&Command::Leaderboard, &data(), &opts);
        let t = r.primary().unwrap();
        assert_eq!(t.nrows(), 2);
        assert_eq!(t.rows[0][1], "Arsenal");
        assert!(r.notes[0].contains("Biggest gap"));
    }

    #[test]
    fn h2h_report_and_empty_notice() {
        let opts = AppOptions::default();
        let cmd = Command::H2h { home: s!("Arsenal"), away: s!("Chelsea") };
        let r = execute(&cmd, &data(), &opts);
        assert_eq!(r.sections.len(), 4);
        assert_eq!(r.primary().unwrap().nrows(), 2);
        assert!(r.notes[0].contains("Arsenal 2 / draws 0 / Chelsea 1"));

        let none = Command::H2h { home: s!("Arsenal"), away: s!("Everton") };
        let r = execute(&none, &data(), &opts);
        assert!(r.sections.is_empty());
        assert!(r.notes[0].starts_with("No meetings"));
    }

    #[test]
    fn accuracy_report() {
        let r = execute(&Command::Accuracy, &data(), &AppOptions::default());
        assert_eq!(r.primary().unwrap().rows[0], ["3", "1", "33.33%"]);
    }
}
