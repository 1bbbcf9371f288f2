//! Scripture text port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crate::domain::catalog::ScriptureVersion;
use crate::domain::foundation::DomainError;

/// Text of one chapter, verse number to verse text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureChapter {
    pub group_code: String,
    pub chapter: u32,
    pub verses: BTreeMap<u32, String>,
}

/// Key-value text store.
#[async_trait]
pub trait ScriptureReader: Send + Sync {
    /// Returns `None` when the store has no text for the key.
    async fn chapter(
        &self,
        version: ScriptureVersion,
        group_code: &str,
        chapter: u32,
    ) -> Result<Option<ScriptureChapter>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_verses_serialize_in_order() {
        let mut verses = BTreeMap::new();
        verses.insert(2, "second".to_string());
        verses.insert(1, "first".to_string());
        let chapter = ScriptureChapter {
            group_code: "oba".to_string(),
            chapter: 1,
            verses,
        };
        let json = serde_json::to_string(&chapter).unwrap();
        assert!(json.find("first").unwrap() < json.find("second").unwrap());
    }
}
