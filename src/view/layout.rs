//! Layout rendering (search bar, status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::UiState;

pub fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Artist name input
            Constraint::Length(14), // Search control
        ])
        .split(area);

    let (text, text_style) = if ui_state.search_input.is_empty() {
        ("Type an artist name...", Style::default().fg(Color::DarkGray))
    } else {
        (ui_state.search_input.as_str(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Artist ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(input, chunks[0]);

    let (label, button_style) = if ui_state.search_in_flight {
        ("Searching...", Style::default().fg(Color::Yellow))
    } else if ui_state.search_enabled {
        (
            "Search",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        ("Search", Style::default().fg(Color::DarkGray))
    };

    let button = Paragraph::new(label)
        .style(button_style)
        .centered()
        .block(Block::default().borders(Borders::ALL).border_style(button_style));
    frame.render_widget(button, chunks[1]);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let status = match (&ui_state.stored_token, &ui_state.status) {
        (Some(_), Some(status)) => Span::styled(status.clone(), Style::default().fg(Color::Cyan)),
        (Some(_), None) => Span::styled("Connected", Style::default().fg(Color::Cyan)),
        (None, _) => Span::styled("Connecting to Spotify...", Style::default().fg(Color::Yellow)),
    };

    let line = Line::from(vec![
        Span::raw(" "),
        status,
        Span::styled(
            "   Enter: search  Esc: clear  ?: help  Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
