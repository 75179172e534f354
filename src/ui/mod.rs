//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod gender;
mod layout;
mod subjects;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    layout::draw(frame, app);
}
