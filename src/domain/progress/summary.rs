//! Progress summary across the whole schedule.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::calendar::READING_DAYS_PER_CYCLE;
use crate::domain::foundation::Percentage;
use crate::domain::plan::Schedule;

use super::ReadingProgress;

/// Completed days within one cadence cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekCompletion {
    /// 1-based.
    pub week_number: u32,
    pub completed: u32,
    pub total: u32,
}

impl WeekCompletion {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// A reader's overall standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed_days: u32,
    pub total_days: u32,
    pub overall: Percentage,
    pub weeks: Vec<WeekCompletion>,
}

impl ProgressSummary {
    /// Summarizes day records against the schedule.
    ///
    /// Records for days outside the schedule and cleared records are
    /// ignored; duplicates count once.
    pub fn compute(records: &[ReadingProgress], schedule: &Schedule) -> Self {
        let total_days = schedule.len() as u32;
        let completed: BTreeSet<u32> = records
            .iter()
            .filter(|r| r.completed && schedule.day(r.day_number).is_some())
            .map(|r| r.day_number)
            .collect();

        let mut weeks: Vec<WeekCompletion> = Vec::new();
        for day in schedule {
            let week_number = (day.day_number - 1) / READING_DAYS_PER_CYCLE + 1;
            if weeks.last().map(|w| w.week_number) != Some(week_number) {
                weeks.push(WeekCompletion {
                    week_number,
                    completed: 0,
                    total: 0,
                });
            }
            if let Some(week) = weeks.last_mut() {
                week.total += 1;
                if completed.contains(&day.day_number) {
                    week.completed += 1;
                }
            }
        }

        let completed_days = completed.len() as u32;
        Self {
            completed_days,
            total_days,
            overall: Percentage::from_ratio(completed_days, total_days),
            weeks,
        }
    }
}
