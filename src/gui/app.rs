// src/gui/app.rs
use std::{error::Error, path::PathBuf, sync::Arc};

use eframe::egui;

use crate::{
    config::{
        options::{AppOptions, DataPaths, PageKind},
        state::AppState,
    },
    load::DataSet,
    model::LeaderboardRow,
    standings,
    store::DatasetCache,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "EPL Standings: Actual vs Prediction",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(AppOptions::default()))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // load-once input tables; Reload invalidates
    pub cache: DatasetCache,
    pub data: Option<Arc<DataSet>>,

    // derived view, rebuilt on load / tie-break change
    pub board: Vec<LeaderboardRow>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let cache = DatasetCache::new(state.options.data.clone(), state.options.load.clone());
        let mut app = Self {
            state,
            cache,
            data: None,
            board: Vec::new(),
            status: s!("Idle"),
        };
        app.load();
        logf!("Init: default page={:?}", app.current_page_kind());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn matches(&self) -> &[crate::model::Match] {
        self.data.as_deref().map(|d| d.matches.as_slice()).unwrap_or(&[])
    }

    /// Fetch from cache (loading if needed) and rebuild derived views.
    pub fn load(&mut self) {
        match self.cache.get() {
            Ok(ds) => {
                self.status(format!("Loaded {} matches", ds.matches.len()));
                self.data = Some(ds);
            }
            Err(e) => {
                loge!("Load: {e}");
                self.status(format!("Load failed: {e}"));
                self.data = None;
            }
        }
        self.rebuild_view();
    }

    /// Apply side-panel text fields to options, drop the cache, load again.
    pub fn reload(&mut self) {
        let gui = &self.state.gui;
        let predictions = gui.predictions_path_text.trim();
        self.state.options.data = DataPaths {
            results: PathBuf::from(gui.results_path_text.trim()),
            predictions: (!predictions.is_empty()).then(|| PathBuf::from(predictions)),
        };
        self.cache.set_source(self.state.options.data.clone(), self.state.options.load.clone());
        self.cache.invalidate();
        logf!("UI: Reload {:?}", self.state.options.data);
        self.load();
    }

    pub fn rebuild_view(&mut self) {
        let board = standings::build_leaderboard(self.matches(), self.state.options.tie_break);
        self.board = board;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("source")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::source_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    let page = self.current_page();
                    page.draw(ui, self);
                });
        });
    }
}
