use crate::app::{App, StatusKind, View};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed status messages
    let (text, style): (Cow<'_, str>, _) = if app.submitting {
        (Cow::Borrowed("Publishing..."), app.palette.status_bar)
    } else if let Some((msg, kind, _)) = &app.status_message {
        let style = match kind {
            StatusKind::Info => app.palette.status_bar,
            StatusKind::Success => app.palette.status_success,
            StatusKind::Error => app.palette.status_error,
        };
        (Cow::Borrowed(msg.as_ref()), style)
    } else {
        // Static keybinding hints - zero allocation
        let hints = match app.view {
            View::Home => "[n]ew post [t]heme [?]help [q]uit",
            View::Compose => {
                "[Tab]next field [Space]toggle [Ctrl+P]gallery [Ctrl+S]publish [Esc]cancel"
            }
        };
        (Cow::Borrowed(hints), app.palette.status_bar)
    };

    let paragraph = Paragraph::new(text).style(style);
    f.render_widget(paragraph, area);
}
