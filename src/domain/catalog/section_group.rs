//! SectionGroup - one catalog entry.

use serde::Serialize;

use super::Testament;

/// A top-level division of the corpus with its numbered chapters.
///
/// Entries are `'static` constants; nothing mutates them after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionGroup {
    /// Unique short identifier (e.g. `"gen"`).
    pub code: &'static str,
    /// Full display name.
    pub name: &'static str,
    /// Canonical abbreviated name used in day labels.
    pub abbreviation: &'static str,
    /// Number of chapters, always positive.
    pub chapters: u32,
    pub testament: Testament,
    /// 1-based position in the whole catalog.
    pub order: u32,
}

impl SectionGroup {
    /// Whether `chapter` is a valid 1-based chapter of this group.
    pub fn contains_chapter(&self, chapter: u32) -> bool {
        (1..=self.chapters).contains(&chapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUTH: SectionGroup = SectionGroup {
        code: "rut",
        name: "룻기",
        abbreviation: "룻",
        chapters: 4,
        testament: Testament::Old,
        order: 8,
    };

    #[test]
    fn contains_chapter_is_one_based_and_inclusive() {
        assert!(!RUTH.contains_chapter(0));
        assert!(RUTH.contains_chapter(1));
        assert!(RUTH.contains_chapter(4));
        assert!(!RUTH.contains_chapter(5));
    }

    #[test]
    fn section_group_serializes_camel_case() {
        let json = serde_json::to_value(RUTH).unwrap();
        assert_eq!(json["code"], "rut");
        assert_eq!(json["testament"], "OT");
        assert_eq!(json["chapters"], 4);
    }
}
