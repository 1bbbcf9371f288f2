//! DayPlan - one day's assigned reading.

use serde::Serialize;

use crate::domain::catalog::Testament;

use super::{FlatUnit, ReadingRange};

/// The contiguous slice of chapters assigned to one schedule day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-based, dense across the whole schedule.
    pub day_number: u32,
    pub testament: Testament,
    /// Ordered by canonical group order, then start chapter.
    pub ranges: Vec<ReadingRange>,
    /// Derived from `ranges`, e.g. `"창 48-50, 출 1-2"`.
    pub label: String,
}

impl DayPlan {
    /// Total chapters assigned to the day.
    pub fn chapter_count(&self) -> u32 {
        self.ranges.iter().map(ReadingRange::chapter_count).sum()
    }

    /// Every chapter of the day, in reading order.
    pub fn units(&self) -> Vec<FlatUnit> {
        self.ranges.iter().flat_map(|range| range.units()).collect()
    }

    /// Whether the day covers the given chapter.
    pub fn covers(&self, group_code: &str, chapter: u32) -> bool {
        self.ranges.iter().any(|range| {
            range.group_code == group_code
                && (range.start_chapter..=range.end_chapter).contains(&chapter)
        })
    }
}

/// Renders ranges as a label using each group's abbreviated name.
///
/// A single-chapter range renders as `"<abbr> <n>"`, longer ranges as
/// `"<abbr> <start>-<end>"`; ranges are joined with `", "`. Codes that
/// `abbreviation` cannot resolve fall back to the raw code.
pub fn render_label<'a, F>(ranges: &[ReadingRange], abbreviation: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    ranges
        .iter()
        .map(|range| {
            let name = abbreviation(range.group_code).unwrap_or(range.group_code);
            if range.is_single() {
                format!("{} {}", name, range.start_chapter)
            } else {
                format!("{} {}-{}", name, range.start_chapter, range.end_chapter)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
