//! Corpus catalog - the 66 section groups in canonical order.
//!
//! The catalog is fixed data. Lookups never fail loudly: an unknown code is
//! reported as `None` and callers decide how to render the absence.

mod data;
mod section_group;
mod testament;
mod version;

pub use data::{
    CATALOG, NEW_TESTAMENT_CHAPTERS, NEW_TESTAMENT_GROUPS, OLD_TESTAMENT_CHAPTERS,
    OLD_TESTAMENT_GROUPS,
};
pub use section_group::SectionGroup;
pub use testament::Testament;
pub use version::ScriptureVersion;

/// Returns the full catalog in canonical order.
pub fn catalog() -> &'static [SectionGroup] {
    CATALOG
}

/// Looks up a section group by its short code (e.g. `"gen"`).
pub fn section_group_by_code(code: &str) -> Option<&'static SectionGroup> {
    CATALOG.iter().find(|group| group.code == code)
}

/// Returns the groups of one testament, preserving canonical order.
pub fn section_groups_by_testament(testament: Testament) -> Vec<&'static SectionGroup> {
    CATALOG
        .iter()
        .filter(|group| group.testament == testament)
        .collect()
}

/// Total chapter count across a set of groups.
pub fn chapter_total<'a, I>(groups: I) -> u32
where
    I: IntoIterator<Item = &'a SectionGroup>,
{
    groups.into_iter().map(|group| group.chapters).sum()
}
