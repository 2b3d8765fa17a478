//! Local draft validation.
//!
//! A single declarative table maps each field to its constraint and
//! user-facing message, covering both emptiness and the length/URL/count
//! rules. Validation fails closed: the first violated rule aborts the
//! submission before any network call is made.

use crate::draft::{Draft, MAX_CATEGORIES};
use crate::util::validate_url;
use thiserror::Error;

/// A draft failed local validation; carries the single message shown to
/// the user.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// One field constraint: predicate over the draft plus its failure message.
struct Rule {
    check: fn(&Draft) -> bool,
    message: &'static str,
}

/// Minimum lengths mirror the server-side schema.
const RULES: &[Rule] = &[
    Rule {
        check: |d| !d.title.trim().is_empty(),
        message: "All fields must be filled out.",
    },
    Rule {
        check: |d| !d.author_name.trim().is_empty(),
        message: "All fields must be filled out.",
    },
    Rule {
        check: |d| !d.image_link.trim().is_empty(),
        message: "All fields must be filled out.",
    },
    Rule {
        check: |d| !d.description.trim().is_empty(),
        message: "All fields must be filled out.",
    },
    Rule {
        check: |d| !d.categories.is_empty(),
        message: "All fields must be filled out.",
    },
    Rule {
        check: |d| d.title.trim().chars().count() >= 3,
        message: "Title must be at least 3 characters long",
    },
    Rule {
        check: |d| d.author_name.trim().chars().count() >= 2,
        message: "Author name must be at least 2 characters long",
    },
    Rule {
        check: |d| d.description.trim().chars().count() >= 10,
        message: "Description must be at least 10 characters long",
    },
    Rule {
        check: |d| validate_url(d.image_link.trim()).is_ok(),
        message: "Image URL must be a valid URL",
    },
    Rule {
        check: |d| d.categories.len() <= MAX_CATEGORIES,
        message: "Select up to three categories",
    },
];

/// Validate a draft against the rule table.
///
/// Returns the first violated rule's message. Emptiness rules come first so
/// an entirely blank form reports the combined message rather than a
/// per-field length complaint.
pub fn validate(draft: &Draft) -> Result<(), ValidationError> {
    for rule in RULES {
        if !(rule.check)(draft) {
            return Err(ValidationError(rule.message.to_owned()));
        }
    }
    Ok(())
}
