use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text note attached to a stock at a point in time.
///
/// At most one note exists per stock per second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDetails {
    pub timestamp: DateTime<Utc>,
    pub note: String,
}

impl NoteDetails {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, note: impl Into<String>) -> Self {
        Self {
            timestamp,
            note: note.into(),
        }
    }
}
