use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;

/// The last `weekday` strictly before a fixed (month, day).
///
/// Buß- und Bettag is the Wednesday before November 23.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WeekdayBeforeHoliday {
    month: u32,
    day: u32,
    weekday: Weekday
}

impl WeekdayBeforeHoliday {
    pub fn new(month: u32, day: u32, weekday: Weekday) -> Option<WeekdayBeforeHoliday> {
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| WeekdayBeforeHoliday { month, day, weekday })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for WeekdayBeforeHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let anchor = NaiveDate::from_ymd_opt(year, self.month, self.day)?;

        let days_back = (anchor.weekday().num_days_from_monday() as i32
                         - self.weekday.num_days_from_monday() as i32 + 7) % 7;
        // Same weekday as the anchor: go back a full week
        let days_back = if days_back == 0 { 7 } else { days_back };

        anchor.checked_sub_days(Days::new(days_back as u64))
    }
}
