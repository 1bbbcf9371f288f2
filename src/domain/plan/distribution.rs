//! Count distributor.

use super::PlanError;

/// Splits `total_items` over `total_days` as evenly as possible.
///
/// Day `d` (0-based) ends at the cumulative target
/// `round((d + 1) * total_items / total_days)`, rounding halves up, and
/// its count is whatever that adds to the running total. The cumulative
/// never drifts more than half a unit from the ideal, so any remainder is
/// spread across the days instead of landing on the last one.
///
/// The rounding is done in exact integer arithmetic.
///
/// # Errors
///
/// Returns [`PlanError::NoDays`] when `total_days` is zero.
pub fn distribute_counts(total_items: u32, total_days: u32) -> Result<Vec<u32>, PlanError> {
    if total_days == 0 {
        return Err(PlanError::NoDays);
    }

    let items = u64::from(total_items);
    let days = u64::from(total_days);
    let mut counts = Vec::with_capacity(total_days as usize);
    let mut assigned = 0u64;

    for day in 0..days {
        // floor(x + 1/2) with x = (day + 1) * items / days
        let target = (2 * (day + 1) * items + days) / (2 * days);
        counts.push((target - assigned) as u32);
        assigned = target;
    }

    Ok(counts)
}
