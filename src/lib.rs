//! quill - a terminal client for composing and publishing blog posts.
//!
//! The crate is a library plus a thin binary so the submission pipeline and
//! form state can be exercised by integration tests.
//!
//! # Module Structure
//!
//! - `draft` - The blog-post draft and the category toggle rules
//! - `validate` - Declarative pre-submission validation
//! - `submit` - The HTTP submission pipeline and outcome classification
//! - `session` - Persisted API credential
//! - `config` - TOML config file loading
//! - `app` - Central application state
//! - `theme` - Color palettes for the TUI
//! - `ui` - Event loop, input handling, and rendering
//! - `util` - URL validation and text helpers

pub mod app;
pub mod config;
pub mod draft;
pub mod session;
pub mod submit;
pub mod theme;
pub mod ui;
pub mod util;
pub mod validate;
