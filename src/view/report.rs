//! Mood ring results panel

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::UiState;
use super::utils::intensity_color;

pub fn render_results(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Mood ring ")
        .padding(Padding::new(2, 2, 1, 1));

    let report = match (&ui_state.report, ui_state.results_visible) {
        (Some(report), true) => report,
        _ => {
            let hint = Paragraph::new("Search for an artist to see how their top tracks feel.")
                .style(Style::default().add_modifier(Modifier::DIM))
                .block(block);
            frame.render_widget(hint, area);
            return;
        }
    };

    let mut lines = vec![
        Line::styled(report.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];

    for row in &report.rows {
        lines.push(Line::styled(
            row.text(),
            Style::default()
                .fg(intensity_color(row.intensity))
                .add_modifier(Modifier::BOLD),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("Based on {} top tracks", report.track_count),
        Style::default().add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
