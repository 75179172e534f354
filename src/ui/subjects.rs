//! Subject list rendering

use crate::platform::{ADD_SUBJECT_SHORTCUT, REMOVE_SUBJECT_SHORTCUT};
use crate::state::SubjectList;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows the subject block needs for a given list: one per entry, one for
/// the add hint, two borders, one error line
pub fn block_height(subjects: &SubjectList) -> u16 {
    subjects.len() as u16 + 4
}

/// Draw the dynamic subject list.
///
/// The remove affordance is shown per entry exactly while more than one
/// entry exists; at length 1 it disappears entirely.
pub fn draw_subjects(
    frame: &mut Frame,
    area: Rect,
    subjects: &SubjectList,
    focused: Option<usize>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(subjects.len() as u16 + 3), // bordered list + add hint
            Constraint::Length(1),                         // error text
        ])
        .split(area);

    let border_style = if focused.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();
    for (index, entry) in subjects.iter().enumerate() {
        let is_active = focused == Some(index);
        let value_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            dim
        };
        let display = if entry.value.is_empty() && !is_active {
            "(empty)"
        } else {
            entry.value.as_str()
        };

        let mut spans = vec![
            Span::styled(format!("{}. ", index + 1), dim),
            Span::styled(display.to_string(), value_style),
        ];
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        if subjects.can_remove() {
            spans.push(Span::styled(
                format!("  [{REMOVE_SUBJECT_SHORTCUT} removes]"),
                dim,
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("+ {ADD_SUBJECT_SHORTCUT} adds another"),
        dim,
    )));

    let block = Block::default()
        .title(" Subjects to Upload ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    if let Some(message) = subjects.error {
        let error_line = Paragraph::new(message).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, chunks[1]);
    }
}
