//! Chapter flattener.

use serde::Serialize;

use crate::domain::catalog::SectionGroup;

/// One chapter of one section group, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatUnit {
    pub group_code: &'static str,
    /// 1-based chapter index.
    pub chapter: u32,
}

impl FlatUnit {
    pub fn new(group_code: &'static str, chapter: u32) -> Self {
        Self { group_code, chapter }
    }
}

/// Expands groups into one unit per chapter, groups in iteration order.
pub fn flatten_units<'a, I>(groups: I) -> Vec<FlatUnit>
where
    I: IntoIterator<Item = &'a SectionGroup>,
{
    groups
        .into_iter()
        .flat_map(|group| (1..=group.chapters).map(move |ch| FlatUnit::new(group.code, ch)))
        .collect()
}
