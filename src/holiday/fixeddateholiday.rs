use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

/// Same calendar day every year, no weekend adjustment.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// `None` unless (month, day) exists in a leap year.
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| FixedDateHoliday { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(FixedDateHoliday::new(2, 30).is_none());
        assert!(FixedDateHoliday::new(13, 1).is_none());
        assert!(FixedDateHoliday::new(2, 29).is_some());
    }

    #[test]
    fn leap_day_only_exists_in_leap_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert!(leap_day.get_holiday(2024).is_some());
        assert!(leap_day.get_holiday(2025).is_none());
    }

    #[test]
    fn is_holiday_compares_full_date() {
        let christmas = FixedDateHoliday::new(12, 25).unwrap();
        assert!(christmas.is_holiday(&NaiveDate::from_ymd_opt(2031, 12, 25).unwrap()));
        assert!(!christmas.is_holiday(&NaiveDate::from_ymd_opt(2031, 12, 26).unwrap()));
    }
}
