//! Add-task form draft
//!
//! The draft title and its validation error belong to the form, not to the
//! controller. Editing the draft clears the error; a valid submission hands
//! the trimmed title on and resets the draft.

use crate::validation::{ValidationError, validate_title};

/// State behind an add-task input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    draft: String,
    error: Option<ValidationError>,
}

impl TaskForm {
    /// Create an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Validation error from the last submission, if still shown
    #[must_use]
    pub const fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Whether the input should be marked invalid
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Replace the draft text, clearing any shown error
    pub fn edit(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.error = None;
    }

    /// Validate the draft
    ///
    /// Returns the trimmed title and resets the form when valid; otherwise
    /// keeps the draft, records the error and returns `None`.
    pub fn submit(&mut self) -> Option<String> {
        match validate_title(&self.draft) {
            Ok(title) => {
                self.draft.clear();
                self.error = None;
                Some(title)
            },
            Err(err) => {
                self.error = Some(err);
                None
            },
        }
    }
}
