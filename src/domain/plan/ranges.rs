//! Range compressor.

use serde::Serialize;

use super::FlatUnit;

/// A contiguous span of chapters within one section group.
///
/// `start_chapter <= end_chapter`, both inside the group's chapter range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRange {
    pub group_code: &'static str,
    pub start_chapter: u32,
    pub end_chapter: u32,
}

impl ReadingRange {
    /// A range covering a single chapter.
    pub fn single(group_code: &'static str, chapter: u32) -> Self {
        Self {
            group_code,
            start_chapter: chapter,
            end_chapter: chapter,
        }
    }

    /// Number of chapters covered.
    pub fn chapter_count(&self) -> u32 {
        self.end_chapter - self.start_chapter + 1
    }

    /// Whether the range is exactly one chapter.
    pub fn is_single(&self) -> bool {
        self.start_chapter == self.end_chapter
    }

    /// Expands the range back into its units.
    pub fn units(&self) -> impl Iterator<Item = FlatUnit> + '_ {
        (self.start_chapter..=self.end_chapter).map(move |ch| FlatUnit::new(self.group_code, ch))
    }

    /// Whether `unit` directly continues this range.
    fn is_continued_by(&self, unit: &FlatUnit) -> bool {
        unit.group_code == self.group_code && unit.chapter == self.end_chapter + 1
    }
}

/// Collapses units into maximal contiguous same-group ranges, in order.
pub fn compress_ranges(units: &[FlatUnit]) -> Vec<ReadingRange> {
    let mut ranges: Vec<ReadingRange> = Vec::new();

    for unit in units {
        match ranges.last_mut() {
            Some(current) if current.is_continued_by(unit) => current.end_chapter = unit.chapter,
            _ => ranges.push(ReadingRange::single(unit.group_code, unit.chapter)),
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn units(pairs: &[(&'static str, u32)]) -> Vec<FlatUnit> {
        pairs.iter().map(|&(g, ch)| FlatUnit::new(g, ch)).collect()
    }

    fn expand(ranges: &[ReadingRange]) -> Vec<FlatUnit> {
        ranges.iter().flat_map(|r| r.units()).collect()
    }

    #[test]
    fn empty_input_yields_no_ranges() {
        assert!(compress_ranges(&[]).is_empty());
    }

    #[test]
    fn consecutive_chapters_merge() {
        let ranges = compress_ranges(&units(&[("g", 1), ("g", 2)]));
        assert_eq!(
            ranges,
            vec![ReadingRange {
                group_code: "g",
                start_chapter: 1,
                end_chapter: 2
            }]
        );
    }

    #[test]
    fn group_boundary_splits_ranges() {
        let ranges = compress_ranges(&units(&[("a", 2), ("b", 1)]));
        assert_eq!(
            ranges,
            vec![ReadingRange::single("a", 2), ReadingRange::single("b", 1)]
        );
    }

    #[test]
    fn gap_within_group_splits_ranges() {
        let ranges = compress_ranges(&units(&[("g", 1), ("g", 2), ("g", 4)]));
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].chapter_count(), 2);
        assert!(ranges[1].is_single());
    }

    #[test]
    fn units_expands_inclusive_span() {
        let range = ReadingRange {
            group_code: "psa",
            start_chapter: 119,
            end_chapter: 121,
        };
        assert_eq!(
            range.units().collect::<Vec<_>>(),
            units(&[("psa", 119), ("psa", 120), ("psa", 121)])
        );
    }

    fn arbitrary_units() -> impl Strategy<Value = Vec<FlatUnit>> {
        prop::collection::vec(
            (prop::sample::select(vec!["a", "b", "c"]), 1u32..6),
            0..40,
        )
        .prop_map(|pairs| pairs.into_iter().map(|(g, ch)| FlatUnit::new(g, ch)).collect())
    }

    proptest! {
        #[test]
        fn compression_partitions_input_in_order(input in arbitrary_units()) {
            let ranges = compress_ranges(&input);
            prop_assert_eq!(expand(&ranges), input);
        }

        #[test]
        fn compression_is_maximal(input in arbitrary_units()) {
            let ranges = compress_ranges(&input);
            for pair in ranges.windows(2) {
                prop_assert!(!(pair[0].group_code == pair[1].group_code
                    && pair[1].start_chapter == pair[0].end_chapter + 1));
            }
        }

        #[test]
        fn recompressing_expansion_is_a_no_op(input in arbitrary_units()) {
            let ranges = compress_ranges(&input);
            prop_assert_eq!(compress_ranges(&expand(&ranges)), ranges);
        }
    }
}
