//! The in-progress blog post draft and category selection.
//!
//! The draft is page-local state: it lives for the lifetime of the compose
//! view and is discarded on successful submit or navigation away. Field names
//! serialize in the camelCase shape the posts API expects.

use serde::Serialize;

/// Maximum number of categories a post may carry.
pub const MAX_CATEGORIES: usize = 3;

/// The fixed set of category tags offered by the selector.
pub const CATEGORIES: &[&str] = &[
    "Travel",
    "Nature",
    "City",
    "Adventure",
    "Culture",
    "Food",
    "Photography",
    "History",
];

/// A blog post draft as composed in the form.
///
/// Serializes to the exact JSON body `POST /api/posts/` expects.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub title: String,
    pub author_name: String,
    pub image_link: String,
    pub categories: Vec<String>,
    pub description: String,
    pub is_featured_post: bool,
}

impl Draft {
    /// Create an empty draft, optionally pre-filling the author name
    /// from configuration.
    pub fn new(author_name: Option<&str>) -> Self {
        Self {
            author_name: author_name.unwrap_or_default().to_owned(),
            ..Self::default()
        }
    }

    /// Toggle a category tag's membership.
    ///
    /// Removing an already-selected tag is always permitted. Adding a tag when
    /// three are already selected is a silent no-op - the UI disables the
    /// control at capacity, but the rule holds here regardless of caller.
    /// Insertion order is preserved for display.
    pub fn toggle_category(&mut self, tag: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == tag) {
            self.categories.remove(pos);
        } else if self.categories.len() < MAX_CATEGORIES {
            self.categories.push(tag.to_owned());
        }
    }

    /// Whether `tag` is currently selected.
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }

    /// True when the selector should reject adding `tag`: the cap is reached
    /// and the tag is not already selected (so toggling could not remove it).
    pub fn category_at_capacity(&self, tag: &str) -> bool {
        self.categories.len() >= MAX_CATEGORIES && !self.has_category(tag)
    }
}
