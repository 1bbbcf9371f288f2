//! Clock port - where "today" comes from.

use chrono::{FixedOffset, NaiveDate};

use crate::domain::foundation::Timestamp;

/// Supplies the current instant and the reader's calendar date.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Timestamp;

    /// Today's calendar date, time of day stripped.
    fn today(&self) -> NaiveDate;
}

/// Wall clock viewed from a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn today(&self) -> NaiveDate {
        Timestamp::now().local_date(self.offset)
    }
}

/// Clock pinned to one date, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: Timestamp,
    today: NaiveDate,
}

impl FixedClock {
    /// Pins the clock to noon UTC of `today`.
    pub fn on(today: NaiveDate) -> Self {
        let now = today
            .and_hms_opt(12, 0, 0)
            .map(|dt| Timestamp::from_datetime(dt.and_utc()))
            .unwrap_or_default();
        Self { now, today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
