//! Plan generator and the memoized standard schedule.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::catalog::{SectionGroup, Testament, CATALOG};

use super::{
    compress_ranges, distribute_counts, flatten_units, render_label, DayPlan, PlanError,
};

/// Days given to the old testament.
pub const OLD_TESTAMENT_DAYS: u32 = 216;
/// Days given to the new testament.
pub const NEW_TESTAMENT_DAYS: u32 = 72;
/// Length of the full schedule.
pub const TOTAL_READING_DAYS: u32 = 288;

/// Per-testament day budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanConfig {
    pub old_testament_days: u32,
    pub new_testament_days: u32,
    pub total_days: u32,
}

impl PlanConfig {
    /// The fixed 216 + 72 day split.
    pub const STANDARD: Self = Self {
        old_testament_days: OLD_TESTAMENT_DAYS,
        new_testament_days: NEW_TESTAMENT_DAYS,
        total_days: TOTAL_READING_DAYS,
    };

    /// Day budget of one testament.
    pub fn days_for(&self, testament: Testament) -> u32 {
        match testament {
            Testament::Old => self.old_testament_days,
            Testament::New => self.new_testament_days,
        }
    }

    /// Day number of the testament's first day.
    pub fn first_day(&self, testament: Testament) -> u32 {
        match testament {
            Testament::Old => 1,
            Testament::New => self.old_testament_days + 1,
        }
    }

    /// Checks that both budgets are positive and sum to the total.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.old_testament_days == 0 || self.new_testament_days == 0 {
            return Err(PlanError::NoDays);
        }
        if self.old_testament_days.checked_add(self.new_testament_days) != Some(self.total_days) {
            return Err(PlanError::SplitMismatch {
                old_testament: self.old_testament_days,
                new_testament: self.new_testament_days,
                total: self.total_days,
            });
        }
        Ok(())
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The complete, ordered, immutable list of day plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    days: Vec<DayPlan>,
}

impl Schedule {
    /// Looks up a day by its 1-based number.
    pub fn day(&self, day_number: u32) -> Option<&DayPlan> {
        let idx = day_number.checked_sub(1)? as usize;
        self.days.get(idx)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayPlan> {
        self.days.iter()
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// The day that assigns the given chapter. Days partition the
    /// catalog, so there is at most one.
    pub fn day_covering(&self, group_code: &str, chapter: u32) -> Option<&DayPlan> {
        self.days.iter().find(|day| day.covers(group_code, chapter))
    }

    /// The days belonging to one testament, in order.
    pub fn days_for(&self, testament: Testament) -> impl Iterator<Item = &DayPlan> {
        self.days.iter().filter(move |day| day.testament == testament)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a DayPlan;
    type IntoIter = std::slice::Iter<'a, DayPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Builds a schedule over an arbitrary catalog.
///
/// Groups are partitioned by testament and ordered canonically; each
/// testament is flattened, split with [`distribute_counts`] over its own
/// budget, and sliced in order with a running cursor.
///
/// # Errors
///
/// Returns [`PlanError`] if `config` violates its invariants.
pub fn generate_schedule_from(
    groups: &[SectionGroup],
    config: &PlanConfig,
) -> Result<Schedule, PlanError> {
    config.validate()?;

    let abbreviations: HashMap<&str, &str> = groups
        .iter()
        .map(|group| (group.code, group.abbreviation))
        .collect();
    let mut days = Vec::with_capacity(config.total_days as usize);

    for &testament in Testament::all() {
        let mut members: Vec<&SectionGroup> =
            groups.iter().filter(|g| g.testament == testament).collect();
        members.sort_by_key(|group| group.order);

        let units = flatten_units(members);
        let counts = distribute_counts(units.len() as u32, config.days_for(testament))?;
        let first_day = config.first_day(testament);

        let mut cursor = 0usize;
        for (offset, count) in counts.into_iter().enumerate() {
            let end = cursor + count as usize;
            let ranges = compress_ranges(&units[cursor..end]);
            cursor = end;

            let label = render_label(&ranges, |code| abbreviations.get(code).copied());
            days.push(DayPlan {
                day_number: first_day + offset as u32,
                testament,
                ranges,
                label,
            });
        }
    }

    Ok(Schedule { days })
}

/// Generates the standard schedule from the built-in catalog.
pub fn generate_schedule() -> Result<Schedule, PlanError> {
    generate_schedule_from(CATALOG, &PlanConfig::STANDARD)
}

static SCHEDULE: Lazy<Schedule> = Lazy::new(|| {
    let schedule = generate_schedule().expect("built-in reading plan constants are valid");
    tracing::debug!(days = schedule.len(), "reading plan generated");
    schedule
});

/// The process-wide standard schedule, generated on first use.
pub fn schedule() -> &'static Schedule {
    &SCHEDULE
}

/// Looks up a day of the standard schedule; `None` outside `1..=288`.
pub fn day_plan(day_number: u32) -> Option<&'static DayPlan> {
    SCHEDULE.day(day_number)
}
