//! Completion records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Day-level completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingProgress {
    pub day_number: u32,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
}

impl ReadingProgress {
    /// Record for `day_number`, stamped with `at` only when completed.
    pub fn new(day_number: u32, completed: bool, at: Timestamp) -> Self {
        Self {
            day_number,
            completed,
            completed_at: completed.then_some(at),
        }
    }
}

/// Chapter-level completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterProgress {
    pub group_code: String,
    pub chapter: u32,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
}

impl ChapterProgress {
    pub fn new(group_code: impl Into<String>, chapter: u32, completed: bool, at: Timestamp) -> Self {
        Self {
            group_code: group_code.into(),
            chapter,
            completed,
            completed_at: completed.then_some(at),
        }
    }
}
