//! Gender selection rendering

use crate::state::{Gender, GenderField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the mutually exclusive option row with its error line underneath
pub fn draw_gender(frame: &mut Frame, area: Rect, field: &GenderField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // bordered option row
            Constraint::Length(1), // error text
        ])
        .split(area);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = Vec::new();
    for gender in Gender::ALL {
        let selected = field.choice == Some(gender);
        let marker = if selected { "(•) " } else { "( ) " };
        let option_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{marker}{}  ", gender.label()),
            option_style,
        ));
    }
    if is_active {
        spans.push(Span::styled(
            "(Space selects)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .title(" Gender ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(message) = field.error {
        let error_line = Paragraph::new(message).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, chunks[1]);
    }
}
