use crate::config::Config;
use crate::draft::Draft;
use crate::session::Session;
use crate::submit::{Outcome, SubmitError};
use crate::theme::{ColorPalette, ThemeVariant};
use anyhow::Result;
use reqwest::redirect::Policy;
use std::borrow::Cow;
use std::time::Duration;
use tokio::time::Instant;

/// How long a transient status message stays visible.
const STATUS_DURATION: Duration = Duration::from_secs(5);

// ============================================================================
// HTTP Client Configuration
// ============================================================================

/// Create a custom redirect policy with loop detection and limited hops.
///
/// - Limits redirects to 3 hops maximum
/// - Detects redirect loops (same URL appearing twice in chain)
/// - Logs redirect chain for debugging
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        // Limit to 3 redirects
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }

        // Detect loops
        let url = attempt.url();
        for prev in attempt.previous() {
            if prev.as_str() == url.as_str() {
                return attempt.error("Redirect loop detected");
            }
        }

        tracing::debug!(
            from = %attempt.previous().last().map(|u| u.as_str()).unwrap_or("initial"),
            to = %url,
            hop = attempt.previous().len() + 1,
            "Following redirect"
        );

        attempt.follow()
    })
}

// ============================================================================
// View and Focus Enums
// ============================================================================

/// Current view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Landing screen: session status and entry hints.
    Home,
    /// The blog-post compose form.
    Compose,
}

/// Identifies the focused field in the compose form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    ImageLink,
    Categories,
    Description,
    Featured,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: &'static [Self] = &[
        Self::Title,
        Self::Author,
        Self::ImageLink,
        Self::Categories,
        Self::Description,
        Self::Featured,
    ];

    /// Advance to the next field (wraps).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Go to the previous field (wraps).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        let len = Self::ALL.len();
        Self::ALL[(idx + len - 1) % len]
    }

    /// Human-readable label for this field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Blog Title",
            Self::Author => "Author Name",
            Self::ImageLink => "Cover Image URL",
            Self::Categories => "Categories (max 3)",
            Self::Description => "Blog Content",
            Self::Featured => "Featured Post",
        }
    }
}

// ============================================================================
// Image Picker Overlay
// ============================================================================

/// Preset cover-image gallery offered by the picker overlay.
/// Each entry is (display label, image URL).
pub const GALLERY: &[(&str, &str)] = &[
    ("Mountains at dawn", "https://images.unsplash.com/photo-1506905925346-21bda4d32df4"),
    ("Old town alley", "https://images.unsplash.com/photo-1499856871958-5b9627545d1a"),
    ("Forest trail", "https://images.unsplash.com/photo-1441974231531-c6227db76b6e"),
    ("Coastal cliffs", "https://images.unsplash.com/photo-1507525428034-b723cf961d3e"),
    ("Desert road", "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800"),
    ("Street food market", "https://images.unsplash.com/photo-1504674900247-0877df9cc836"),
];

/// State for the image-picker overlay.
pub struct PickerState {
    /// Index into [`GALLERY`].
    pub selected: usize,
}

// ============================================================================
// Status Messages
// ============================================================================

/// Visual tag for a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

// ============================================================================
// Events
// ============================================================================

/// Events from background tasks
pub enum AppEvent {
    /// The submission task finished, successfully or not.
    ///
    /// Fields:
    /// - `generation`: The submit generation when the task was spawned;
    ///   stale completions (user already left the compose view) are discarded
    /// - `result`: The classified outcome, or the transport error
    SubmitFinished {
        generation: u64,
        result: Result<Outcome, SubmitError>,
    },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state
pub struct App {
    pub http_client: reqwest::Client,

    /// Base URL of the posts API.
    pub api_base_url: String,

    /// Authentication state. Passed to the submission pipeline explicitly;
    /// cleared when the server reports the session expired.
    pub session: Session,

    /// Delay between a successful submission and the navigation home.
    pub navigate_delay: Duration,

    // Theme
    pub theme_variant: ThemeVariant,
    pub palette: ColorPalette,

    // Draft
    /// Default author name from config, applied to each fresh draft.
    pub default_author: Option<String>,
    pub draft: Draft,

    // UI State
    pub view: View,
    pub focused_field: FormField,
    /// Highlighted pill when the Categories field has focus.
    pub category_cursor: usize,
    /// Image-picker overlay, when open.
    pub picker: Option<PickerState>,
    pub show_help: bool,
    pub needs_redraw: bool,

    // Submission
    /// In-flight guard: the submit binding is ignored while true.
    pub submitting: bool,
    /// Incremented per submit; stale `SubmitFinished` events are discarded.
    pub submit_generation: u64,

    /// Deadline for the post-success navigation home. Checked by the event
    /// loop tick; cleared when the compose view is left, which cancels the
    /// pending navigation.
    pub pending_navigation: Option<Instant>,

    // Status message with expiry - Cow avoids allocation for static literals
    pub status_message: Option<(Cow<'static, str>, StatusKind, Instant)>,
}

impl App {
    pub fn new(config: &Config, session: Session) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .redirect(create_redirect_policy())
            .user_agent(concat!("quill/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme in config, using dark");
            ThemeVariant::Dark
        });

        Ok(Self {
            http_client,
            api_base_url: config.api_base_url.clone(),
            session,
            navigate_delay: Duration::from_millis(config.navigate_delay_ms),
            theme_variant,
            palette: theme_variant.palette(),
            default_author: config.author_name.clone(),
            draft: Draft::new(config.author_name.as_deref()),
            view: View::Home,
            focused_field: FormField::Title,
            category_cursor: 0,
            picker: None,
            show_help: false,
            needs_redraw: true,
            submitting: false,
            submit_generation: 0,
            pending_navigation: None,
            status_message: None,
        })
    }

    // ------------------------------------------------------------------
    // Status messages
    // ------------------------------------------------------------------

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.set_status_kind(msg, StatusKind::Info);
    }

    pub fn set_status_kind(&mut self, msg: impl Into<Cow<'static, str>>, kind: StatusKind) {
        self.status_message = Some((msg.into(), kind, Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear the status message once it has been visible long enough.
    /// Returns true if a message was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, _, shown_at)) = &self.status_message {
            if shown_at.elapsed() >= STATUS_DURATION {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Enter the compose view with a fresh draft.
    pub fn open_compose(&mut self) {
        self.draft = Draft::new(self.default_author.as_deref());
        self.view = View::Compose;
        self.focused_field = FormField::Title;
        self.category_cursor = 0;
        self.picker = None;
        self.needs_redraw = true;
    }

    /// Return to the home view. Discards the draft and cancels any pending
    /// post-success navigation - the scheduled event dies with the view.
    pub fn go_home(&mut self) {
        self.view = View::Home;
        self.picker = None;
        self.pending_navigation = None;
        // An in-flight submission belongs to the view being left; bumping the
        // generation makes its completion stale.
        if self.submitting {
            self.submitting = false;
            self.submit_generation = self.submit_generation.wrapping_add(1);
        }
        self.draft = Draft::new(self.default_author.as_deref());
        self.needs_redraw = true;
    }

    /// Schedule the delayed navigation home after a successful submission.
    pub fn schedule_navigation(&mut self) {
        self.pending_navigation = Some(Instant::now() + self.navigate_delay);
    }

    /// Fire the pending navigation if its deadline has passed.
    /// Returns true if navigation happened.
    pub fn take_due_navigation(&mut self) -> bool {
        match self.pending_navigation {
            Some(deadline) if Instant::now() >= deadline => {
                self.pending_navigation = None;
                self.go_home();
                true
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    /// Cycle to the next theme variant; returns its name for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        self.theme_variant = self.theme_variant.next();
        self.palette = self.theme_variant.palette();
        self.needs_redraw = true;
        self.theme_variant.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let dir = std::env::temp_dir().join("quill_app_test");
        std::fs::create_dir_all(&dir).unwrap();
        let session = Session::load(&dir).unwrap();
        App::new(&Config::default(), session).unwrap()
    }

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(FormField::Title.next(), FormField::Author);
        assert_eq!(FormField::Featured.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Featured);
    }

    #[tokio::test]
    async fn test_open_compose_resets_draft() {
        let mut app = test_app();
        app.open_compose();
        app.draft.title = "half-typed".into();
        app.go_home();
        app.open_compose();
        assert!(app.draft.title.is_empty());
        assert_eq!(app.view, View::Compose);
        assert_eq!(app.focused_field, FormField::Title);
    }

    #[tokio::test]
    async fn test_go_home_cancels_pending_navigation() {
        let mut app = test_app();
        app.open_compose();
        app.schedule_navigation();
        assert!(app.pending_navigation.is_some());
        app.go_home();
        assert!(app.pending_navigation.is_none());
    }

    #[tokio::test]
    async fn test_navigation_fires_only_after_deadline() {
        tokio::time::pause();
        let mut app = test_app();
        app.open_compose();
        app.schedule_navigation();

        assert!(!app.take_due_navigation());
        assert_eq!(app.view, View::Compose);

        tokio::time::advance(app.navigate_delay + Duration::from_millis(1)).await;
        assert!(app.take_due_navigation());
        assert_eq!(app.view, View::Home);
        assert!(app.pending_navigation.is_none());
    }

    #[tokio::test]
    async fn test_status_expiry() {
        tokio::time::pause();
        let mut app = test_app();
        app.set_status("hello");
        assert!(!app.clear_expired_status());
        tokio::time::advance(Duration::from_secs(6)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }
}
