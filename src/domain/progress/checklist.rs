//! Per-day chapter checklist for the reading flow.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::plan::DayPlan;

use super::ChapterProgress;

/// One chapter of the day with its completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterCheck {
    pub group_code: &'static str,
    pub chapter: u32,
    pub completed: bool,
}

/// The chapters of one day and how many are done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayChecklist {
    pub day_number: u32,
    pub label: String,
    pub chapters: Vec<ChapterCheck>,
    pub completed_count: u32,
    pub all_completed: bool,
}

impl DayChecklist {
    /// Overlays chapter records onto the day's chapters.
    pub fn build(plan: &DayPlan, records: &[ChapterProgress]) -> Self {
        let done: HashSet<(&str, u32)> = records
            .iter()
            .filter(|r| r.completed)
            .map(|r| (r.group_code.as_str(), r.chapter))
            .collect();

        let chapters: Vec<ChapterCheck> = plan
            .units()
            .into_iter()
            .map(|unit| ChapterCheck {
                group_code: unit.group_code,
                chapter: unit.chapter,
                completed: done.contains(&(unit.group_code, unit.chapter)),
            })
            .collect();

        let completed_count = chapters.iter().filter(|c| c.completed).count() as u32;
        Self {
            day_number: plan.day_number,
            label: plan.label.clone(),
            all_completed: !chapters.is_empty() && completed_count as usize == chapters.len(),
            completed_count,
            chapters,
        }
    }
}
