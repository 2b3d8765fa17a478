//! Help overlay with a key reference table.

use crate::app::App;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Row, Table},
    Frame,
};

/// Key reference grouped by view: (section, key, action).
const KEYS: &[(&str, &str, &str)] = &[
    ("Home", "n / c", "Open the compose form"),
    ("Home", "t", "Cycle the color theme"),
    ("Home", "?", "Toggle this help"),
    ("Home", "q", "Quit"),
    ("Compose", "Tab / Shift+Tab", "Move between fields"),
    ("Compose", "Left / Right", "Move the category cursor"),
    ("Compose", "Space", "Toggle category or featured flag"),
    ("Compose", "Ctrl+P", "Open the cover-image gallery"),
    ("Compose", "Ctrl+S", "Publish the post"),
    ("Compose", "F1", "Toggle this help"),
    ("Compose", "Esc", "Discard the draft and go home"),
];

/// Render the help overlay on top of the current view.
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    let overlay = centered_rect(70, 70, area);
    if overlay.width < 30 || overlay.height < 8 {
        return;
    }

    f.render_widget(Clear, overlay);

    let mut rows: Vec<Row> = Vec::new();
    let mut last_section = "";
    for (section, key, action) in KEYS {
        if *section != last_section {
            if !last_section.is_empty() {
                rows.push(Row::new(vec![String::new(), String::new()]));
            }
            rows.push(
                Row::new(vec![
                    Line::from(Span::styled(
                        format!("-- {} --", section),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                ])
                .style(app.palette.form_label),
            );
            last_section = section;
        }
        rows.push(Row::new(vec![format!("  {}", key), action.to_string()]));
    }

    let widths = [Constraint::Length(18), Constraint::Min(20)];

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.palette.field_border_focused)
                .title(" Help (? to close) "),
        )
        .header(
            Row::new(vec!["Key", "Action"])
                .style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::UNDERLINED),
                )
                .bottom_margin(1),
        );

    f.render_widget(table, overlay);
}

/// Create a centered rectangle with the given percentage of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
