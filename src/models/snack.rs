use serde::{Deserialize, Serialize};

/// A snack record.
///
/// Immutable value type: updates replace the whole record, never patch
/// individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snack {
    pub name: String,
    /// Subjective rating, higher is better.
    pub rating: i32,
    /// Ordered taste tags (e.g. `["sweet", "crunchy"]`).
    pub taste: Vec<String>,
}
