//! Terminal User Interface module.
//!
//! This module provides the TUI for the blog composer, including:
//! - Main event loop (`run`)
//! - Input handling for the home and compose views
//! - Rendering for the form, image picker, and status bar
//! - Background task event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - View rendering dispatch
//! - `home` - Landing screen widget
//! - `form` - Compose form widget
//! - `picker` - Cover-image picker overlay
//! - `help` - Key reference overlay
//! - `status` - Status bar widget

// Submodules for UI components
mod events;
mod form;
mod help;
mod home;
mod input;
mod loop_runner;
mod picker;
mod render;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
