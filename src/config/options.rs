// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::consts::*;
pub use crate::standings::TieBreak;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub data: DataPaths,
    pub load: LoadOptions,
    pub tie_break: TieBreak,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Leaderboard,
    PredictionStats,
    HeadToHead,
}

/// Where the two input tables live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    pub results: PathBuf,
    /// Without predictions every match carries `predicted = None`.
    pub predictions: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            results: PathBuf::from(DEFAULT_RESULTS_FILE),
            predictions: Some(PathBuf::from(DEFAULT_PREDICTIONS_FILE)),
        }
    }
}

/// Row filters applied to the results table before the join.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Inclusive date window; `None` keeps every row.
    pub window: Option<(NaiveDate, NaiveDate)>,
    pub exclude_draws: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        let day = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d);
        Self {
            window: day(SEASON_FROM).zip(day(SEASON_TO)),
            exclude_draws: EXCLUDE_DRAWS,
        }
    }
}

impl LoadOptions {
    /// Everything in the file, draws included.
    pub fn unfiltered() -> Self {
        Self { window: None, exclude_draws: false }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; a user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        self.out_path.dir.join(name)
    }

    /// Parse user text into dir + stem (+ extension, if typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn delim(&self) -> u8 {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
