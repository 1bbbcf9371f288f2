//! Plan generation errors.

use thiserror::Error;

/// Violations of the plan's configuration invariants.
///
/// These are programming errors in fixed constants, never runtime
/// conditions; generation stops rather than producing a partial schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Cannot distribute readings over zero days")]
    NoDays,

    #[error("Testament day counts {old_testament} + {new_testament} do not sum to {total} total days")]
    SplitMismatch {
        old_testament: u32,
        new_testament: u32,
        total: u32,
    },
}
