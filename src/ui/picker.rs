//! Cover-image picker overlay.
//!
//! A centered list of preset gallery images. Selecting one fills the
//! Cover Image URL field.

use crate::app::{App, GALLERY};
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let picker = match &app.picker {
        Some(p) => p,
        None => return,
    };

    let area = f.area();
    let width = 60u16.min(area.width.saturating_sub(4));
    let height = (GALLERY.len() as u16 + 4).min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 20 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);

    let inner_width = overlay.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::with_capacity(GALLERY.len() + 2);
    for (i, (label, url)) in GALLERY.iter().enumerate() {
        let style = if i == picker.selected {
            app.palette.picker_selected
        } else {
            app.palette.picker_item
        };
        let marker = if i == picker.selected { "> " } else { "  " };
        let text = format!("{}{} - {}", marker, label, url);
        lines.push(Line::from(Span::styled(
            truncate_to_width(&text, inner_width).into_owned(),
            style,
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "(Enter) Select  (Esc) Cancel",
        app.palette.form_placeholder,
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.picker_border)
            .title(" Cover Image Gallery "),
    );
    f.render_widget(paragraph, overlay);
}
