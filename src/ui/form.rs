//! The compose form: one bordered box per field, category pills, and the
//! featured checkbox.

use crate::app::{App, FormField};
use crate::draft::{CATEGORIES, MAX_CATEGORIES};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // author
            Constraint::Length(3), // image link
            Constraint::Length(3), // categories
            Constraint::Min(5),    // description
            Constraint::Length(1), // featured
        ])
        .split(area);

    render_text_field(
        f,
        app,
        chunks[0],
        FormField::Title,
        &app.draft.title,
        "What is the title of your blog post?",
    );
    render_text_field(
        f,
        app,
        chunks[1],
        FormField::Author,
        &app.draft.author_name,
        "Who is the author?",
    );
    render_text_field(
        f,
        app,
        chunks[2],
        FormField::ImageLink,
        &app.draft.image_link,
        "Paste an https:// image URL or press Ctrl+P for the gallery",
    );
    render_categories(f, app, chunks[3]);
    render_description(f, app, chunks[4]);
    render_featured(f, app, chunks[5]);
}

/// Render one single-line bordered text field.
fn render_text_field(
    f: &mut Frame,
    app: &App,
    area: Rect,
    field: FormField,
    value: &str,
    placeholder: &str,
) {
    let focused = app.focused_field == field;
    let border_style = if focused {
        app.palette.field_border_focused
    } else {
        app.palette.field_border
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let content = if value.is_empty() {
        Span::styled(
            truncate_to_width(placeholder, inner_width).into_owned(),
            app.palette.form_placeholder,
        )
    } else {
        // Show the tail of long values so the caret end stays visible
        let shown = if focused {
            tail_to_width(value, inner_width.saturating_sub(1))
        } else {
            truncate_to_width(value, inner_width).into_owned()
        };
        Span::styled(shown, app.palette.form_value)
    };

    let mut spans = vec![content];
    if focused {
        spans.push(Span::styled("_", app.palette.form_value));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", field.label()),
                app.palette.form_label,
            )),
    );
    f.render_widget(paragraph, area);
}

/// Keep the last characters of `s` that fit in `max_width` columns.
fn tail_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    let mut width = 0;
    let mut out: Vec<char> = Vec::new();
    for c in s.chars().rev() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.into_iter().rev().collect()
}

/// Render the category pills.
///
/// Selected pills show a check mark. Once the cap is reached, unselected
/// pills render disabled; toggling them is a no-op until one is removed.
fn render_categories(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == FormField::Categories;

    let mut spans: Vec<Span> = Vec::with_capacity(CATEGORIES.len() * 2);
    for (i, name) in CATEGORIES.iter().enumerate() {
        let selected = app.draft.has_category(name);
        let style = if selected {
            app.palette.pill_selected
        } else if app.draft.category_at_capacity(name) {
            app.palette.pill_disabled
        } else {
            app.palette.pill_normal
        };

        let marker = if selected { "✓" } else { " " };
        let text = if focused && i == app.category_cursor {
            format!("[{}{}]", marker, name)
        } else {
            format!(" {}{} ", marker, name)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    let border_style = if focused {
        app.palette.field_border_focused
    } else {
        app.palette.field_border
    };
    let title = format!(
        " {} ({}/{}) ",
        FormField::Categories.label(),
        app.draft.categories.len(),
        MAX_CATEGORIES
    );

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(title, app.palette.form_label)),
    );
    f.render_widget(paragraph, area);
}

/// Render the multi-line description editor.
fn render_description(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == FormField::Description;
    let border_style = if focused {
        app.palette.field_border_focused
    } else {
        app.palette.field_border
    };

    let body = if app.draft.description.is_empty() {
        Paragraph::new(Span::styled(
            "Write your blog content (at least 10 characters)",
            app.palette.form_placeholder,
        ))
    } else {
        let text = if focused {
            format!("{}_", app.draft.description)
        } else {
            app.draft.description.clone()
        };
        Paragraph::new(text).style(app.palette.form_value)
    };

    let paragraph = body.wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", FormField::Description.label()),
                app.palette.form_label,
            )),
    );
    f.render_widget(paragraph, area);
}

/// Render the featured-post checkbox line.
fn render_featured(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == FormField::Featured;
    let checked = app.draft.is_featured_post;

    let box_style = if checked {
        app.palette.featured_on
    } else if focused {
        app.palette.form_value
    } else {
        app.palette.form_placeholder
    };

    let marker = if checked { "[x]" } else { "[ ]" };
    let prefix = if focused { "> " } else { "  " };
    let line = Line::from(vec![
        Span::raw(prefix),
        Span::styled(marker, box_style),
        Span::raw(" "),
        Span::styled(FormField::Featured.label(), app.palette.form_label),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
