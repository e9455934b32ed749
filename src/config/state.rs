// src/config/state.rs
use super::options::{AppOptions, ApiOptions};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Dark visuals (toggle lives in the sidebar footer)
    pub dark_mode: bool,

    /// Show product thumbnails in grids; off saves bandwidth on slow links
    pub show_images: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1280,
            window_h: 820,
            dark_mode: false,
            show_images: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn with_api(api: ApiOptions) -> Self {
        let mut state = Self::default();
        state.options.api = api;
        state
    }
}
