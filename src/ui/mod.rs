mod chrome;
mod rows;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::Messages;
use crate::form::{FormState, ValidationErrors};

pub(crate) const HELP_TEXT: &str =
    "Tab/Shift+Tab cells • ↑/↓ rows • ←/→ type • Ctrl+N add • Ctrl+D remove • Ctrl+S submit • Ctrl+Q quit";

/// Everything the renderer needs besides the form itself.
pub(crate) struct UiContext<'a> {
    pub messages: &'a Messages,
    pub status: &'a str,
    pub help: Option<&'static str>,
    pub dirty: bool,
    pub errors: Option<&'a ValidationErrors>,
}

pub(crate) fn draw(frame: &mut Frame<'_>, state: &mut FormState, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    chrome::render_header(frame, chunks[0], &ctx);
    rows::render_rows(frame, chunks[1], state, &ctx);
    chrome::render_footer(frame, chunks[2], &ctx);
}
