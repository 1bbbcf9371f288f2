//! Seed data for the in-memory adapters.
//!
//! A JSON document listing group members and chapter text:
//!
//! ```json
//! {
//!   "members": [{ "userId": "u1", "displayName": "Ann" }],
//!   "chapters": [
//!     { "version": "krv", "groupCode": "oba", "chapter": 1, "verses": { "1": "..." } }
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::catalog::section_group_by_code;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::progress::Member;
use crate::ports::{ScriptureChapter, ScriptureVersion};

use super::{InMemoryMemberDirectory, InMemoryScriptureStore};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedChapter {
    pub version: ScriptureVersion,
    pub group_code: String,
    pub chapter: u32,
    pub verses: BTreeMap<u32, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub members: Vec<Member>,
    pub chapters: Vec<SeedChapter>,
}

impl SeedData {
    /// Parses a seed document, rejecting chapters outside the catalog.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let seed: SeedData = serde_json::from_str(raw).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Invalid seed data: {}", e))
        })?;

        for chapter in &seed.chapters {
            let known = section_group_by_code(&chapter.group_code)
                .is_some_and(|group| group.contains_chapter(chapter.chapter));
            if !known {
                return Err(DomainError::new(
                    ErrorCode::ChapterNotFound,
                    format!(
                        "Seed chapter {} {} is not in the catalog",
                        chapter.group_code, chapter.chapter
                    ),
                ));
            }
        }

        Ok(seed)
    }

    /// Reads and parses a seed file.
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::storage(format!("Cannot read seed file {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    /// Loads the members and chapters into the given stores.
    pub async fn apply(
        self,
        directory: &InMemoryMemberDirectory,
        scripture: &InMemoryScriptureStore,
    ) {
        for member in self.members {
            directory.register(member).await;
        }
        for seed in self.chapters {
            scripture
                .insert(
                    seed.version,
                    ScriptureChapter {
                        group_code: seed.group_code,
                        chapter: seed.chapter,
                        verses: seed.verses,
                    },
                )
                .await;
        }
    }
}
