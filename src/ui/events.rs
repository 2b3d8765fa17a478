//! Application event handling.
//!
//! This module processes background task completion events. The only
//! background work in this app is the submission request, so the heart of
//! the module is the outcome dispatch table: a pure mapping from the
//! classified HTTP result to user-visible effects (notification, session
//! clearing, navigation).

use crate::app::{App, AppEvent, StatusKind};
use crate::submit::{Outcome, SubmitError};

/// Handle application events from background tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::SubmitFinished { generation, result } => {
            handle_submit_finished(app, generation, result);
        }
    }
}

/// Dispatch a finished submission to its effects.
///
/// | Result              | Effect                                              |
/// |---------------------|-----------------------------------------------------|
/// | 200 Accepted        | success notification; navigate home after the delay |
/// | 403 AuthExpired     | error notification; clear session; navigate home    |
/// | 401 Unauthorized    | error notification; navigate home (session kept)    |
/// | other / transport   | generic failure notification; stay on the form      |
///
/// Completions whose generation does not match the current one belong to a
/// compose view the user already left; they are discarded.
fn handle_submit_finished(
    app: &mut App,
    generation: u64,
    result: Result<Outcome, SubmitError>,
) {
    if generation != app.submit_generation {
        tracing::debug!(
            generation,
            current = app.submit_generation,
            "Discarding stale submission result"
        );
        return;
    }

    app.submitting = false;

    match result {
        Ok(Outcome::Accepted) => {
            app.set_status_kind("Blog post successfully created!", StatusKind::Success);
            app.schedule_navigation();
        }
        Ok(Outcome::AuthExpired) => {
            app.set_status_kind(
                "Error: Your session has expired, please login again!",
                StatusKind::Error,
            );
            if let Err(e) = app.session.clear() {
                tracing::warn!(error = %e, "Failed to clear stored session credential");
            }
            app.go_home();
        }
        Ok(Outcome::Unauthorized) => {
            app.set_status_kind("Error: You are not authorized!", StatusKind::Error);
            app.go_home();
        }
        Ok(Outcome::Rejected { status, message }) => {
            tracing::warn!(status, message = %message, "Submission rejected by server");
            app.set_status_kind(format!("Error: {}", message), StatusKind::Error);
        }
        Err(e) => {
            tracing::debug!(error = %e, "Submission transport failure");
            app.set_status_kind(
                "Something went wrong. Please try again later.",
                StatusKind::Error,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::config::Config;
    use crate::session::Session;

    fn app_with_session(name: &str, token: Option<&str>) -> App {
        let dir = std::env::temp_dir().join(format!("quill_events_test_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        let _ = std::fs::remove_file(dir.join("session.token"));
        let mut session = Session::load(&dir).unwrap();
        if let Some(token) = token {
            session.store(token).unwrap();
        }
        let mut app = App::new(&Config::default(), session).unwrap();
        app.open_compose();
        app.submitting = true;
        app
    }

    #[tokio::test]
    async fn test_accepted_notifies_and_schedules_navigation() {
        let mut app = app_with_session("accepted", Some("tok"));
        handle_submit_finished(&mut app, 0, Ok(Outcome::Accepted));

        let (msg, kind, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Blog post successfully created!");
        assert_eq!(*kind, StatusKind::Success);
        // Navigation is delayed, not immediate
        assert_eq!(app.view, View::Compose);
        assert!(app.pending_navigation.is_some());
        assert!(!app.submitting);
    }

    #[tokio::test]
    async fn test_auth_expired_clears_session_and_navigates() {
        let mut app = app_with_session("expired", Some("tok"));
        handle_submit_finished(&mut app, 0, Ok(Outcome::AuthExpired));

        assert!(!app.session.is_authenticated());
        assert_eq!(app.view, View::Home);
        // Immediate navigation: nothing left pending
        assert!(app.pending_navigation.is_none());
        let (_, kind, _) = app.status_message.as_ref().unwrap();
        assert_eq!(*kind, StatusKind::Error);
    }

    #[tokio::test]
    async fn test_unauthorized_navigates_but_keeps_session() {
        let mut app = app_with_session("unauthorized", Some("tok"));
        handle_submit_finished(&mut app, 0, Ok(Outcome::Unauthorized));

        assert!(app.session.is_authenticated());
        assert_eq!(app.view, View::Home);
        assert!(app.pending_navigation.is_none());
    }

    #[tokio::test]
    async fn test_rejected_stays_on_form_with_server_message() {
        let mut app = app_with_session("rejected", Some("tok"));
        handle_submit_finished(
            &mut app,
            0,
            Ok(Outcome::Rejected {
                status: 500,
                message: "database unavailable".into(),
            }),
        );

        assert_eq!(app.view, View::Compose);
        assert!(app.pending_navigation.is_none());
        let (msg, kind, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Error: database unavailable");
        assert_eq!(*kind, StatusKind::Error);
    }

    #[tokio::test]
    async fn test_transport_error_is_generic_failure_without_navigation() {
        let mut app = app_with_session("transport", Some("tok"));
        handle_submit_finished(&mut app, 0, Err(SubmitError::Timeout));

        assert_eq!(app.view, View::Compose);
        assert!(app.pending_navigation.is_none());
        let (msg, _, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Something went wrong. Please try again later.");
        assert!(!app.submitting);
    }

    #[tokio::test]
    async fn test_stale_generation_discarded() {
        let mut app = app_with_session("stale", Some("tok"));
        app.submit_generation = 3;
        handle_submit_finished(&mut app, 2, Ok(Outcome::Accepted));

        // Nothing happened: guard untouched, no status, no navigation
        assert!(app.submitting);
        assert!(app.status_message.is_none());
        assert!(app.pending_navigation.is_none());
    }
}
