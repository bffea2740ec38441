//! View module - UI rendering
//!
//! This module renders the presentation state using ratatui.
//!
//! - `utils`: Shared helpers (intensity colours, popup placement)
//! - `layout`: Search bar and status bar
//! - `report`: The mood ring results panel
//! - `overlays`: Alert and help popups

mod utils;
mod layout;
mod report;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::UiState;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input + button
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_search_bar(frame, chunks[0], ui_state);
        report::render_results(frame, chunks[1], ui_state);
        layout::render_status_bar(frame, chunks[2], ui_state);

        if ui_state.error_message.is_some() {
            overlays::render_alert(frame, ui_state);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
