//! Landing screen: app banner, session state, and entry hints.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Vertical centering: banner block sits a third of the way down
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let session_line = if app.session.is_authenticated() {
        Line::from(Span::styled(
            "Session: logged in",
            app.palette.home_session_ok,
        ))
    } else {
        Line::from(Span::styled(
            "Session: not logged in (run with --login <token>)",
            app.palette.home_session_missing,
        ))
    };

    let lines = vec![
        Line::from(Span::styled("quill", app.palette.home_title)),
        Line::from(Span::styled(
            "a terminal blog-post composer",
            app.palette.home_hint,
        )),
        Line::default(),
        session_line,
        Line::default(),
        Line::from(Span::styled(
            "n: new post    t: theme    ?: help    q: quit",
            app.palette.home_hint,
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[1]);
}
