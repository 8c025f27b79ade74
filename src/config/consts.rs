// src/config/consts.rs

// Input tables
pub const DEFAULT_RESULTS_FILE: &str = "data/results.csv";
pub const DEFAULT_PREDICTIONS_FILE: &str = "data/predictions.csv";

// Season window applied at load (inclusive), as (y, m, d)
pub const SEASON_FROM: (i32, u32, u32) = (2024, 8, 1);
pub const SEASON_TO: (i32, u32, u32) = (2025, 5, 31);
pub const EXCLUDE_DRAWS: bool = true;

// Views
pub const FORM_LENGTH: usize = 5;

// Local store
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_FILTER_ENV: &str = "EPL_LOG";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "leaderboard";
