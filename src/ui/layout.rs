//! Form layout and screen chrome

use super::components::{render_button, BUTTON_HEIGHT};
use super::{field_renderer, gender, subjects};
use crate::app::App;
use crate::platform::{ADD_SUBJECT_SHORTCUT, SUBMIT_SHORTCUT, TOGGLE_VISIBILITY_KEY};
use crate::state::{Focus, StatusKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per labelled field: bordered input plus its error line
const FIELD_HEIGHT: u16 = 4;

/// Draw the whole screen: form columns, status line, hint line
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let hint_height = if app.config.show_hints() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),            // form
            Constraint::Length(1),         // aggregate status
            Constraint::Length(hint_height), // key hints
        ])
        .split(area);

    draw_form(frame, chunks[0], app);
    draw_status_bar(frame, chunks[1], app);
    if app.config.show_hints() {
        draw_hints(frame, chunks[2]);
    }
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Student Registration ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    draw_identity_column(frame, columns[0], app);
    draw_credentials_column(frame, columns[1], app);
}

fn draw_identity_column(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // first name
            Constraint::Length(FIELD_HEIGHT), // last name
            Constraint::Length(FIELD_HEIGHT), // user id
            Constraint::Length(FIELD_HEIGHT), // email
            Constraint::Length(FIELD_HEIGHT), // phone
            Constraint::Length(FIELD_HEIGHT), // age
            Constraint::Length(FIELD_HEIGHT), // date of birth
            Constraint::Min(0),
        ])
        .split(area);

    let form = &app.state.form;
    field_renderer::draw_field(
        frame,
        chunks[0],
        "First Name",
        &form.first_name,
        form.focus == Focus::FirstName,
    );
    field_renderer::draw_field(
        frame,
        chunks[1],
        "Last Name",
        &form.last_name,
        form.focus == Focus::LastName,
    );
    field_renderer::draw_field(
        frame,
        chunks[2],
        "User ID",
        &form.user_id,
        form.focus == Focus::UserId,
    );
    field_renderer::draw_field(
        frame,
        chunks[3],
        "Email",
        &form.email,
        form.focus == Focus::Email,
    );
    field_renderer::draw_field(
        frame,
        chunks[4],
        "Phone Number",
        &form.phone,
        form.focus == Focus::Phone,
    );
    field_renderer::draw_field(frame, chunks[5], "Age", &form.age, form.focus == Focus::Age);
    field_renderer::draw_field(
        frame,
        chunks[6],
        "Date of Birth (YYYY-MM-DD)",
        &form.birth_date,
        form.focus == Focus::BirthDate,
    );
}

fn draw_credentials_column(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // password
            Constraint::Length(FIELD_HEIGHT), // confirm password
            Constraint::Length(FIELD_HEIGHT), // gender
            Constraint::Length(subjects::block_height(&form.subjects)),
            Constraint::Length(FIELD_HEIGHT), // profile picture
            Constraint::Length(BUTTON_HEIGHT), // submit
            Constraint::Min(0),
        ])
        .split(area);

    let mask = app.config.mask_char();
    field_renderer::draw_password_field(
        frame,
        chunks[0],
        "Password",
        &form.password,
        mask,
        form.focus == Focus::Password,
    );
    field_renderer::draw_password_field(
        frame,
        chunks[1],
        "Confirm Password",
        &form.confirm_password,
        mask,
        form.focus == Focus::ConfirmPassword,
    );

    gender::draw_gender(frame, chunks[2], &form.gender, form.focus == Focus::Gender);

    let focused_subject = match form.focus {
        Focus::Subject(index) => Some(index),
        _ => None,
    };
    subjects::draw_subjects(frame, chunks[3], &form.subjects, focused_subject);

    field_renderer::draw_field(
        frame,
        chunks[4],
        "Profile Picture (path)",
        &form.profile_picture,
        form.focus == Focus::ProfilePicture,
    );

    render_button(
        frame,
        chunks[5],
        "Submit Registration",
        form.focus == Focus::Submit,
        Some(Color::Green),
    );
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(status) = &app.state.status {
        let color = match status.kind {
            StatusKind::Error => Color::Red,
            StatusKind::Success => Color::Green,
        };
        let line = Paragraph::new(status.text).style(Style::default().fg(color));
        frame.render_widget(line, area);
    }
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
        Span::styled(TOGGLE_VISIBILITY_KEY, key_style),
        Span::raw(": show/hide password  "),
        Span::styled(ADD_SUBJECT_SHORTCUT, key_style),
        Span::raw(": add subject  "),
        Span::styled(SUBMIT_SHORTCUT, key_style),
        Span::raw(": submit  "),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
