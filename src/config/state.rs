// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Head-to-head picks
    pub selected_home: Option<String>,
    pub selected_away: Option<String>,

    /// Side panel text fields (applied on Reload)
    pub results_path_text: String,
    pub predictions_path_text: String,

    /// Export bar text field
    pub out_path_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            selected_home: None,
            selected_away: None,
            results_path_text: s!(),
            predictions_path_text: s!(),
            out_path_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Seed GUI text fields from options.
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            results_path_text: options.data.results.to_string_lossy().into_owned(),
            predictions_path_text: options
                .data
                .predictions
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            out_path_text: options.export.out_path().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
