//! Input handling for the TUI.
//!
//! This module processes keyboard input and dispatches to the appropriate
//! handler based on the current view and any open overlay.

use crate::app::{App, AppEvent, FormField, PickerState, StatusKind, View, GALLERY};
use crate::submit::submit;
use crate::util::{MAX_DESCRIPTION_LENGTH, MAX_FIELD_LENGTH, MAX_URL_LENGTH};
use crate::validate::validate;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::Action;
use crate::draft::CATEGORIES;

/// Main input dispatch function.
///
/// Routes input to the appropriate handler based on the current view.
/// Overlays (help, image picker) capture all keys while open.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    if app.show_help {
        return Ok(handle_help_input(app, code));
    }

    if app.picker.is_some() {
        return Ok(handle_picker_input(app, code));
    }

    match app.view {
        View::Home => Ok(handle_home_input(app, code)),
        View::Compose => Ok(handle_compose_input(app, code, modifiers, event_tx)),
    }
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: Esc/q/? dismiss, everything else is ignored.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.needs_redraw = true;
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input while the image-picker overlay is open.
fn handle_picker_input(app: &mut App, code: KeyCode) -> Action {
    let picker = match app.picker.as_mut() {
        Some(p) => p,
        None => return Action::Continue,
    };

    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            picker.selected = picker.selected.saturating_sub(1);
            app.needs_redraw = true;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if picker.selected + 1 < GALLERY.len() {
                picker.selected += 1;
            }
            app.needs_redraw = true;
        }
        KeyCode::Enter => {
            let (label, url) = GALLERY[picker.selected];
            app.draft.image_link = url.to_string();
            app.picker = None;
            app.set_status(format!("Cover image set: {}", label));
        }
        KeyCode::Esc => {
            app.picker = None;
            app.needs_redraw = true;
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input on the home view.
fn handle_home_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('n') | KeyCode::Char('c') => app.open_compose(),
        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            app.needs_redraw = true;
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input on the compose form.
fn handle_compose_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    // Control chords first; plain characters go to the focused field.
    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('s') => {
                try_submit(app, event_tx);
                return Action::Continue;
            }
            KeyCode::Char('p') => {
                app.picker = Some(PickerState { selected: 0 });
                app.focused_field = FormField::ImageLink;
                app.needs_redraw = true;
                return Action::Continue;
            }
            _ => return Action::Continue,
        }
    }

    match code {
        KeyCode::Esc => {
            app.go_home();
            return Action::Continue;
        }
        KeyCode::Tab => {
            app.focused_field = app.focused_field.next();
            app.needs_redraw = true;
            return Action::Continue;
        }
        KeyCode::BackTab => {
            app.focused_field = app.focused_field.prev();
            app.needs_redraw = true;
            return Action::Continue;
        }
        KeyCode::F(1) => {
            app.show_help = true;
            app.needs_redraw = true;
            return Action::Continue;
        }
        _ => {}
    }

    let changed = match app.focused_field {
        FormField::Title => edit_line(&mut app.draft.title, code, MAX_FIELD_LENGTH),
        FormField::Author => edit_line(&mut app.draft.author_name, code, MAX_FIELD_LENGTH),
        FormField::ImageLink => edit_line(&mut app.draft.image_link, code, MAX_URL_LENGTH),
        FormField::Categories => {
            handle_category_input(app, code);
            false
        }
        FormField::Description => {
            handle_description_input(app, code);
            false
        }
        FormField::Featured => {
            if matches!(code, KeyCode::Char(' ') | KeyCode::Enter) {
                app.draft.is_featured_post = !app.draft.is_featured_post;
                true
            } else {
                false
            }
        }
    };
    if changed {
        app.needs_redraw = true;
    }

    Action::Continue
}

/// Single-line text editing with a length cap. Returns true if the field
/// changed. Characters past the cap are dropped.
fn edit_line(field: &mut String, code: KeyCode, max_len: usize) -> bool {
    match code {
        KeyCode::Char(c) => {
            if field.chars().count() < max_len {
                field.push(c);
                true
            } else {
                false
            }
        }
        KeyCode::Backspace => field.pop().is_some(),
        _ => false,
    }
}

/// Category pill navigation and toggling.
fn handle_category_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => {
            app.category_cursor = app.category_cursor.saturating_sub(1);
            app.needs_redraw = true;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.category_cursor + 1 < CATEGORIES.len() {
                app.category_cursor += 1;
            }
            app.needs_redraw = true;
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            let name = CATEGORIES[app.category_cursor];
            // Silent no-op at capacity; the pill renders disabled instead
            app.draft.toggle_category(name);
            app.needs_redraw = true;
        }
        _ => {}
    }
}

/// Multi-line description editing.
fn handle_description_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            if app.draft.description.chars().count() < MAX_DESCRIPTION_LENGTH {
                app.draft.description.push(c);
                app.needs_redraw = true;
            }
        }
        KeyCode::Enter => {
            if app.draft.description.chars().count() < MAX_DESCRIPTION_LENGTH {
                app.draft.description.push('\n');
                app.needs_redraw = true;
            }
        }
        KeyCode::Backspace => {
            app.draft.description.pop();
            app.needs_redraw = true;
        }
        _ => {}
    }
}

/// Validate the draft and, if it passes, spawn the submission task.
///
/// The guard order is: in-flight check, local validation, credential check.
/// No network request is made unless all three pass.
fn try_submit(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    if app.submitting {
        app.set_status("Submission already in progress");
        return;
    }

    if let Err(e) = validate(&app.draft) {
        app.set_status_kind(e.to_string(), StatusKind::Error);
        return;
    }

    let credential = match app.session.credential() {
        Some(c) => c.clone(),
        None => {
            app.set_status_kind(
                "Not logged in. Restart with --login <token> to authenticate.",
                StatusKind::Error,
            );
            return;
        }
    };

    app.submitting = true;
    app.submit_generation = app.submit_generation.wrapping_add(1);
    app.set_status("Publishing...");

    let generation = app.submit_generation;
    let client = app.http_client.clone();
    let base_url = app.api_base_url.clone();
    let draft = app.draft.clone();
    let tx = event_tx.clone();

    tokio::spawn(async move {
        let result = submit(&client, &base_url, &credential, &draft).await;
        // Receiver dropped means the app is shutting down
        let _ = tx
            .send(AppEvent::SubmitFinished { generation, result })
            .await;
    });
}
