//! Per-reader reading preferences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::ScriptureVersion;
use crate::domain::foundation::{Timestamp, ValidationError};

pub const DEFAULT_FONT_SIZE: u32 = 18;
pub const MIN_FONT_SIZE: u32 = 14;
pub const MAX_FONT_SIZE: u32 = 28;

/// Stored preferences of one reader.
///
/// `start_date` is kept as given; the schedule always runs from the
/// standard epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub bible_version: ScriptureVersion,
    pub start_date: Option<NaiveDate>,
    pub font_size: u32,
    pub updated_at: Option<Timestamp>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            bible_version: ScriptureVersion::default(),
            start_date: None,
            font_size: DEFAULT_FONT_SIZE,
            updated_at: None,
        }
    }
}

impl UserPreferences {
    /// Overwrites the fields present in `update` and stamps the record.
    pub fn apply(&mut self, update: &PreferencesUpdate, at: Timestamp) {
        if let Some(version) = update.bible_version {
            self.bible_version = version;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = Some(start_date);
        }
        if let Some(font_size) = update.font_size {
            self.font_size = font_size;
        }
        self.updated_at = Some(at);
    }
}

/// A partial change; absent fields keep their stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub bible_version: Option<ScriptureVersion>,
    pub start_date: Option<NaiveDate>,
    pub font_size: Option<u32>,
}

impl PreferencesUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.font_size {
            Some(size) if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) => {
                Err(ValidationError::out_of_range(
                    "font_size",
                    MIN_FONT_SIZE as i64,
                    MAX_FONT_SIZE as i64,
                    size as i64,
                ))
            }
            _ => Ok(()),
        }
    }
}
