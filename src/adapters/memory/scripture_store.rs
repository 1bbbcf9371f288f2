//! In-memory scripture text store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{ScriptureChapter, ScriptureReader, ScriptureVersion};

type ChapterKey = (ScriptureVersion, String, u32);

/// Chapter text keyed by (version, group code, chapter).
#[derive(Debug, Default)]
pub struct InMemoryScriptureStore {
    chapters: RwLock<HashMap<ChapterKey, ScriptureChapter>>,
}

impl InMemoryScriptureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces one chapter's text.
    pub async fn insert(&self, version: ScriptureVersion, chapter: ScriptureChapter) {
        let key = (version, chapter.group_code.clone(), chapter.chapter);
        self.chapters.write().await.insert(key, chapter);
    }

    pub async fn len(&self) -> usize {
        self.chapters.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.chapters.read().await.is_empty()
    }
}

#[async_trait]
impl ScriptureReader for InMemoryScriptureStore {
    async fn chapter(
        &self,
        version: ScriptureVersion,
        group_code: &str,
        chapter: u32,
    ) -> Result<Option<ScriptureChapter>, DomainError> {
        let key = (version, group_code.to_string(), chapter);
        Ok(self.chapters.read().await.get(&key).cloned())
    }
}
