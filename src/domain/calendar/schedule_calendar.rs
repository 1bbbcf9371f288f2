//! ScheduleCalendar - bidirectional date/day-number mapping.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;

use crate::domain::plan::TOTAL_READING_DAYS;

use super::{CalendarError, DayStatus};

/// Days in one cadence cycle.
pub const CYCLE_LENGTH: u32 = 7;
/// Position of the rest day within a cycle (0-based from the epoch weekday).
pub const REST_DAY_OFFSET: u32 = 6;
/// Reading days per cycle.
pub const READING_DAYS_PER_CYCLE: u32 = 6;

pub const EPOCH_YEAR: i32 = 2026;
pub const EPOCH_MONTH: u32 = 2;
pub const EPOCH_DAY: u32 = 2;

static STANDARD: Lazy<ScheduleCalendar> = Lazy::new(|| {
    let epoch = NaiveDate::from_ymd_opt(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY)
        .expect("built-in epoch is a valid date");
    ScheduleCalendar::new(epoch, TOTAL_READING_DAYS).expect("built-in schedule is non-empty")
});

/// Maps calendar dates to 1-based schedule days and back.
///
/// `epoch` is schedule day 1 and the first reading day of its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleCalendar {
    epoch: NaiveDate,
    total_days: u32,
}

impl ScheduleCalendar {
    /// Creates a calendar with `total_days` reading days starting at `epoch`.
    pub fn new(epoch: NaiveDate, total_days: u32) -> Result<Self, CalendarError> {
        if total_days == 0 {
            return Err(CalendarError::EmptySchedule);
        }
        Ok(Self { epoch, total_days })
    }

    /// The standard calendar: epoch 2026-02-02, 288 reading days.
    pub fn standard() -> Self {
        *STANDARD
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    fn days_since_epoch(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.epoch).num_days()
    }

    fn offset(&self, days: u64) -> Result<NaiveDate, CalendarError> {
        self.epoch
            .checked_add_days(Days::new(days))
            .ok_or(CalendarError::DateOverflow)
    }

    /// Classifies `date` against the schedule.
    pub fn day_status(&self, date: NaiveDate) -> DayStatus {
        let since = self.days_since_epoch(date);
        if since < 0 {
            return DayStatus::BeforeStart;
        }

        let cycle = i64::from(CYCLE_LENGTH);
        let week = since / cycle;
        let day_of_week = since % cycle;
        if day_of_week == i64::from(REST_DAY_OFFSET) {
            return DayStatus::RestDay;
        }

        let day_number = week * i64::from(READING_DAYS_PER_CYCLE) + day_of_week + 1;
        if day_number > i64::from(self.total_days) {
            return DayStatus::AfterEnd;
        }
        DayStatus::Reading(day_number as u32)
    }

    /// Schedule day for `date`; `None` before the epoch, on rest days and
    /// past the last day.
    pub fn date_to_day_number(&self, date: NaiveDate) -> Option<u32> {
        self.day_status(date).day_number()
    }

    /// Calendar date of a schedule day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayOutOfRange`] unless
    /// `1 <= day_number <= total_days`.
    pub fn day_number_to_date(&self, day_number: u32) -> Result<NaiveDate, CalendarError> {
        if day_number == 0 || day_number > self.total_days {
            return Err(CalendarError::DayOutOfRange {
                day: day_number,
                max: self.total_days,
            });
        }

        let zero_based = day_number - 1;
        let week = zero_based / READING_DAYS_PER_CYCLE;
        let day_in_week = zero_based % READING_DAYS_PER_CYCLE;
        let calendar_offset = u64::from(week) * u64::from(CYCLE_LENGTH) + u64::from(day_in_week);
        self.offset(calendar_offset)
    }

    /// Whether `date` is a rest day on or after the epoch.
    pub fn is_rest_day(&self, date: NaiveDate) -> bool {
        self.day_status(date).is_rest_day()
    }

    /// 0-based cycle of `date`, clamped to 0 before the epoch.
    pub fn week_index(&self, date: NaiveDate) -> u32 {
        let since = self.days_since_epoch(date);
        if since < 0 {
            return 0;
        }
        (since / i64::from(CYCLE_LENGTH)) as u32
    }

    /// 0-based cycle a schedule day falls in.
    pub fn week_of_day(&self, day_number: u32) -> Result<u32, CalendarError> {
        if day_number == 0 || day_number > self.total_days {
            return Err(CalendarError::DayOutOfRange {
                day: day_number,
                max: self.total_days,
            });
        }
        Ok((day_number - 1) / READING_DAYS_PER_CYCLE)
    }

    /// Number of cycles the schedule spans.
    pub fn week_count(&self) -> u32 {
        (self.total_days + READING_DAYS_PER_CYCLE - 1) / READING_DAYS_PER_CYCLE
    }

    /// The seven dates of a cycle, starting at `epoch + week_index * 7`.
    pub fn dates_in_week(&self, week_index: u32) -> Result<[NaiveDate; 7], CalendarError> {
        let start = u64::from(week_index) * u64::from(CYCLE_LENGTH);
        let mut dates = [self.epoch; 7];
        for (i, slot) in dates.iter_mut().enumerate() {
            *slot = self.offset(start + i as u64)?;
        }
        Ok(dates)
    }

    /// Date of the final schedule day.
    pub fn last_reading_date(&self) -> Result<NaiveDate, CalendarError> {
        self.day_number_to_date(self.total_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> ScheduleCalendar {
        ScheduleCalendar::standard()
    }

    #[test]
    fn standard_epoch_is_a_monday() {
        assert_eq!(calendar().epoch(), date(2026, 2, 2));
        assert_eq!(calendar().epoch().weekday(), Weekday::Mon);
        assert_eq!(calendar().total_days(), 288);
    }

    #[test]
    fn epoch_is_day_one() {
        assert_eq!(calendar().date_to_day_number(date(2026, 2, 2)), Some(1));
    }

    #[test]
    fn seventh_day_is_rest_day() {
        assert_eq!(calendar().date_to_day_number(date(2026, 2, 8)), None);
        assert!(calendar().is_rest_day(date(2026, 2, 8)));
        assert_eq!(calendar().day_status(date(2026, 2, 8)), DayStatus::RestDay);
    }

    #[test]
    fn day_after_rest_continues_at_seven() {
        assert_eq!(calendar().date_to_day_number(date(2026, 2, 7)), Some(6));
        assert_eq!(calendar().date_to_day_number(date(2026, 2, 9)), Some(7));
    }

    #[test]
    fn dates_before_epoch_have_no_day() {
        let eve = date(2026, 2, 1);
        assert_eq!(calendar().day_status(eve), DayStatus::BeforeStart);
        assert_eq!(calendar().date_to_day_number(eve), None);
        // Feb 1 2026 is a Sunday but precedes the schedule.
        assert!(!calendar().is_rest_day(eve));
        assert_eq!(calendar().week_index(eve), 0);
    }

    #[test]
    fn last_day_and_beyond() {
        // 288 days = 48 full cycles; day 288 is the Saturday of week 47.
        let last = calendar().last_reading_date().unwrap();
        assert_eq!(last, date(2026, 2, 2) + Days::new(47 * 7 + 5));
        assert_eq!(last.weekday(), Weekday::Sat);
        assert_eq!(calendar().date_to_day_number(last), Some(288));

        let sunday_after = last + Days::new(1);
        assert_eq!(calendar().day_status(sunday_after), DayStatus::RestDay);

        let monday_after = last + Days::new(2);
        assert_eq!(calendar().day_status(monday_after), DayStatus::AfterEnd);
        assert_eq!(calendar().date_to_day_number(monday_after), None);
    }

    #[test]
    fn inverse_mapping_skips_rest_days() {
        assert_eq!(calendar().day_number_to_date(1).unwrap(), date(2026, 2, 2));
        assert_eq!(calendar().day_number_to_date(6).unwrap(), date(2026, 2, 7));
        assert_eq!(calendar().day_number_to_date(7).unwrap(), date(2026, 2, 9));
        assert_eq!(calendar().day_number_to_date(13).unwrap(), date(2026, 2, 16));
    }

    #[test]
    fn inverse_mapping_rejects_out_of_range_days() {
        assert_eq!(
            calendar().day_number_to_date(0),
            Err(CalendarError::DayOutOfRange { day: 0, max: 288 })
        );
        assert_eq!(
            calendar().day_number_to_date(289),
            Err(CalendarError::DayOutOfRange { day: 289, max: 288 })
        );
    }

    #[test]
    fn week_helpers_agree() {
        assert_eq!(calendar().week_index(date(2026, 2, 8)), 0);
        assert_eq!(calendar().week_index(date(2026, 2, 9)), 1);
        assert_eq!(calendar().week_of_day(6).unwrap(), 0);
        assert_eq!(calendar().week_of_day(7).unwrap(), 1);
        assert_eq!(calendar().week_of_day(288).unwrap(), 47);
        assert_eq!(calendar().week_count(), 48);
        assert!(calendar().week_of_day(0).is_err());
    }

    #[test]
    fn dates_in_week_are_seven_consecutive_days() {
        let week = calendar().dates_in_week(1).unwrap();
        assert_eq!(week[0], date(2026, 2, 9));
        assert_eq!(week[6], date(2026, 2, 15));
        assert!(calendar().is_rest_day(week[6]));
        for pair in week.windows(2) {
            assert_eq!(pair[1], pair[0] + Days::new(1));
        }
    }

    #[test]
    fn dates_in_week_overflow_is_reported() {
        assert_eq!(
            calendar().dates_in_week(u32::MAX),
            Err(CalendarError::DateOverflow)
        );
    }

    #[test]
    fn empty_calendar_is_rejected() {
        assert_eq!(
            ScheduleCalendar::new(date(2026, 2, 2), 0),
            Err(CalendarError::EmptySchedule)
        );
    }

    #[test]
    fn custom_calendar_uses_its_own_bounds() {
        let short = ScheduleCalendar::new(date(2030, 1, 1), 3).unwrap();
        assert_eq!(short.date_to_day_number(date(2030, 1, 3)), Some(3));
        assert_eq!(short.day_status(date(2030, 1, 4)), DayStatus::AfterEnd);
        assert_eq!(short.week_count(), 1);
    }

    #[test]
    fn every_day_round_trips() {
        for day in 1..=TOTAL_READING_DAYS {
            let d = calendar().day_number_to_date(day).unwrap();
            assert_eq!(calendar().date_to_day_number(d), Some(day));
            assert!(!calendar().is_rest_day(d));
        }
    }

    proptest! {
        #[test]
        fn each_date_has_exactly_one_status(offset in -400i64..800) {
            let d = if offset < 0 {
                date(2026, 2, 2) - Days::new(offset.unsigned_abs())
            } else {
                date(2026, 2, 2) + Days::new(offset as u64)
            };
            let status = calendar().day_status(d);
            let has_day = calendar().date_to_day_number(d).is_some();
            let rest = calendar().is_rest_day(d);
            let before = d < calendar().epoch();
            let after = status == DayStatus::AfterEnd;

            let holding = [has_day, rest, before, after].iter().filter(|b| **b).count();
            prop_assert_eq!(holding, 1, "date {} status {:?}", d, status);
        }

        #[test]
        fn week_index_matches_dates_in_week(offset in 0u64..2_000) {
            let d = date(2026, 2, 2) + Days::new(offset);
            let week = calendar().week_index(d);
            prop_assert!(calendar().dates_in_week(week).unwrap().contains(&d));
        }
    }
}
