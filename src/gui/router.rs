// src/gui/router.rs
use super::pages::{self, Page};

/// Tab order.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::leaderboard::PAGE,
    &pages::prediction_stats::PAGE,
    &pages::head_to_head::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
