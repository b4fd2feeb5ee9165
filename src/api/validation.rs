//! Identifier validation for snack routes.
//!
//! Earlier revisions enforced the id rule through two mechanisms (a
//! per-route filter and a scan of the handler signature for an `id`
//! argument) with identical outcomes; the rule now lives in one function
//! that gated handlers call directly.

use crate::api::error::ApiError;

/// Letter every validated snack id must start with when nothing else is
/// configured.
pub const DEFAULT_REQUIRED_LETTER: char = 's';

/// Validation rule loaded from environment variables.
#[derive(Clone, Debug)]
pub struct ValidationConfig {
    /// Required leading letter; `None` switches the gate off entirely.
    required_letter: Option<char>,
}

impl ValidationConfig {
    /// Load the required letter from SNACKDIR_ID_LETTER, falling back to
    /// [`DEFAULT_REQUIRED_LETTER`].
    pub fn from_env() -> Self {
        let required_letter = std::env::var("SNACKDIR_ID_LETTER")
            .ok()
            .and_then(|s| s.trim().chars().next())
            .unwrap_or(DEFAULT_REQUIRED_LETTER);

        Self {
            required_letter: Some(required_letter),
        }
    }

    /// Create a config with the gate switched off (for local development/testing).
    pub fn disabled() -> Self {
        Self {
            required_letter: None,
        }
    }

    /// Create a config requiring a specific leading letter.
    pub fn with_required_letter(letter: char) -> Self {
        Self {
            required_letter: Some(letter),
        }
    }

    /// Check an id against the gate: non-empty and starting with the
    /// required letter. Applied to reads and creates only, never to
    /// upserts or deletes.
    pub fn check_id(&self, id: &str) -> Result<(), ApiError> {
        let Some(letter) = self.required_letter else {
            return Ok(());
        };

        if id.is_empty() || !id.starts_with(letter) {
            return Err(ApiError::invalid_id(format!(
                "Snack id must not be empty and has to start with the letter '{letter}'"
            )));
        }

        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
