//! GetChapterTextHandler - verse text of one chapter in one version.

use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::progress::require_chapter;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ScriptureChapter, ScriptureReader, ScriptureVersion};

#[derive(Debug, Clone)]
pub struct GetChapterTextQuery {
    pub version: ScriptureVersion,
    pub group_code: String,
    pub chapter: u32,
}

pub struct GetChapterTextHandler {
    reader: Arc<dyn ScriptureReader>,
}

impl GetChapterTextHandler {
    pub fn new(reader: Arc<dyn ScriptureReader>) -> Self {
        Self { reader }
    }

    /// Catalog-checked lookup; a valid chapter with no stored text is
    /// still reported as not found.
    pub async fn handle(&self, query: GetChapterTextQuery) -> Result<ScriptureChapter, DomainError> {
        let group = require_chapter(&query.group_code, query.chapter)?;

        let text = self.reader.chapter(query.version, group.code, query.chapter).await?;
        debug!(
            version = %query.version,
            group = group.code,
            chapter = query.chapter,
            found = text.is_some(),
            "scripture lookup"
        );

        text.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ChapterNotFound,
                format!(
                    "No {} text for {} {}",
                    query.version.display_name(),
                    group.abbreviation,
                    query.chapter
                ),
            )
            .with_detail("version", query.version.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScriptureStore;
    use std::collections::BTreeMap;

    async fn store_with_obadiah() -> Arc<InMemoryScriptureStore> {
        let store = Arc::new(InMemoryScriptureStore::new());
        let mut verses = BTreeMap::new();
        verses.insert(1, "오바댜의 묵시라".to_string());
        store
            .insert(
                ScriptureVersion::Krv,
                ScriptureChapter {
                    group_code: "oba".to_string(),
                    chapter: 1,
                    verses,
                },
            )
            .await;
        store
    }

    fn query(version: ScriptureVersion, group_code: &str, chapter: u32) -> GetChapterTextQuery {
        GetChapterTextQuery {
            version,
            group_code: group_code.to_string(),
            chapter,
        }
    }

    #[tokio::test]
    async fn returns_stored_text() {
        let handler = GetChapterTextHandler::new(store_with_obadiah().await);

        let chapter = handler
            .handle(query(ScriptureVersion::Krv, "oba", 1))
            .await
            .unwrap();
        assert_eq!(chapter.verses.len(), 1);
    }

    #[tokio::test]
    async fn other_version_is_not_found() {
        let handler = GetChapterTextHandler::new(store_with_obadiah().await);

        let err = handler
            .handle(query(ScriptureVersion::Nkrv, "oba", 1))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ChapterNotFound);
        assert_eq!(err.details.get("version").map(String::as_str), Some("nkrv"));
    }

    #[tokio::test]
    async fn catalog_is_checked_before_the_reader() {
        let handler = GetChapterTextHandler::new(store_with_obadiah().await);

        let err = handler
            .handle(query(ScriptureVersion::Krv, "oba", 2))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ChapterNotFound);

        let err = handler
            .handle(query(ScriptureVersion::Krv, "nope", 1))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SectionGroupNotFound);
    }
}
