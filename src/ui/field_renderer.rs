//! Field rendering utilities for the registration form

use crate::state::{PasswordField, TextField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a labelled input with its error line underneath.
///
/// Expects a four-row area: three for the bordered input, one for the
/// error text.
pub fn draw_field(frame: &mut Frame, area: Rect, label: &str, field: &TextField, is_active: bool) {
    draw_input(frame, area, label, &field.value, field.error, is_active);
}

/// Draw a password input, masking the value while hidden
pub fn draw_password_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &PasswordField,
    mask: char,
    is_active: bool,
) {
    let display = if field.visibility.is_hidden() {
        mask.to_string().repeat(field.input.value.chars().count())
    } else {
        field.input.value.clone()
    };
    draw_input(frame, area, label, &display, field.input.error, is_active);
}

fn draw_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    error: Option<&'static str>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // bordered input
            Constraint::Length(1), // error text
        ])
        .split(area);

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(message) = error {
        let error_line = Paragraph::new(message).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, chunks[1]);
    }
}
