//! Utility functions for common operations.
//!
//! - **URL validation**: checks the image-link value parses as an http(s) URL
//! - **Text processing**: Unicode-aware width calculation and truncation for
//!   terminal rendering

mod text;
mod url_validator;

pub use text::{display_width, truncate_to_width};
pub use url_validator::{validate_url, UrlValidationError};

/// Maximum length of a single-line form field, shared by the input layer.
pub const MAX_FIELD_LENGTH: usize = 256;

/// Maximum length of the description field.
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Maximum length of the image URL field.
pub const MAX_URL_LENGTH: usize = 2048;
