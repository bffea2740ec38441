//! Overlay rendering (alert, help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::UiState;
use super::utils::centered_rect;

pub fn render_alert(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref message) = ui_state.error_message {
        let area = frame.area();

        let popup_width = 56u16;
        let inner_width = popup_width.saturating_sub(4) as usize;
        let line_count = message.chars().count().div_ceil(inner_width.max(1)) as u16;
        let popup_area = centered_rect(area, popup_width, 2 + line_count.max(1));

        frame.render_widget(Clear, popup_area);

        let alert = Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Oops (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(alert, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect(frame.area(), 48, 10);
    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let bindings = [
        ("Type", "enter an artist name"),
        ("Enter", "look up the artist's mood ring"),
        ("Backspace", "delete a character"),
        ("Esc", "dismiss alert / clear input"),
        ("?", "toggle this help"),
        ("Ctrl+C", "quit"),
    ];

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:>10}  ", key), key_style),
                Span::raw(*action),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(help, popup_area);
}
