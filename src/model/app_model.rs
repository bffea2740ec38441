//! Main application model: the named UI regions and their accessors

use std::sync::Arc;
use tokio::sync::Mutex;

use super::types::{AccessToken, MoodReport, MoodSummary, UiState};

/// Presentation state shared between the controller and the view
#[derive(Clone, Default)]
pub struct AppModel {
    ui_state: Arc<Mutex<UiState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Search input & control
    // ========================================================================

    pub async fn read_search_input(&self) -> String {
        self.ui_state.lock().await.search_input.clone()
    }

    pub async fn write_search_input(&self, value: String) {
        let mut state = self.ui_state.lock().await;
        state.search_input = value;
        refresh_enabled(&mut state);
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_input.push(c);
        refresh_enabled(&mut state);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_input.pop();
        refresh_enabled(&mut state);
    }

    pub async fn set_search_enabled(&self, enabled: bool) {
        self.ui_state.lock().await.search_enabled = enabled;
    }

    pub async fn is_search_enabled(&self) -> bool {
        self.ui_state.lock().await.search_enabled
    }

    /// Clear the input and disable the control
    pub async fn reset_search_input(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_input.clear();
        state.search_enabled = false;
    }

    /// Mark a search as running. Returns false if one already is.
    pub async fn begin_search(&self) -> bool {
        let mut state = self.ui_state.lock().await;
        if state.search_in_flight {
            return false;
        }
        state.search_in_flight = true;
        state.search_enabled = false;
        true
    }

    pub async fn end_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_in_flight = false;
        refresh_enabled(&mut state);
    }

    pub async fn is_search_in_flight(&self) -> bool {
        self.ui_state.lock().await.search_in_flight
    }

    // ========================================================================
    // Stored token
    // ========================================================================

    pub async fn read_stored_token(&self) -> Option<AccessToken> {
        self.ui_state.lock().await.stored_token.clone()
    }

    pub async fn write_stored_token(&self, token: AccessToken) {
        let mut state = self.ui_state.lock().await;
        state.stored_token = Some(token);
        state.status = Some(format!(
            "Connected to Spotify at {}",
            chrono::Local::now().format("%H:%M:%S")
        ));
    }

    // ========================================================================
    // Results & alert
    // ========================================================================

    pub async fn render_mood_summary(&self, summary: &MoodSummary, artist_name: &str, track_count: usize) {
        let mut state = self.ui_state.lock().await;
        state.report = Some(MoodReport::new(summary, artist_name, track_count));
        state.results_visible = true;
    }

    pub async fn show_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.results_visible = false;
        state.error_message = Some(message);
    }

    pub async fn clear_error(&self) {
        self.ui_state.lock().await.error_message = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    // ========================================================================
    // Help popup
    // ========================================================================

    pub async fn toggle_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = !state.show_help_popup;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

fn refresh_enabled(state: &mut UiState) {
    state.search_enabled = !state.search_in_flight && !state.search_input.trim().is_empty();
}
