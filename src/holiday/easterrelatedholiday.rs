use chrono::{Duration, NaiveDate};

use super::easter::easter_sunday;
use super::recurringholiday::RecurringHoliday;

/// Easter Sunday shifted by a signed number of days.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct EasterRelatedHoliday {
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days }
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        easter_sunday(year)
            .ok()
            .map(|easter_day| easter_day + Duration::days(self.shift_days as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn offsets_carry_across_months() {
        // Easter 2025: April 20
        assert_eq!(EasterRelatedHoliday::new(-2).get_holiday(2025), Some(date(2025, 4, 18)));
        assert_eq!(EasterRelatedHoliday::new(39).get_holiday(2025), Some(date(2025, 5, 29)));
        assert_eq!(EasterRelatedHoliday::new(60).get_holiday(2025), Some(date(2025, 6, 19)));
        // Easter 2008: March 23
        assert_eq!(EasterRelatedHoliday::new(-2).get_holiday(2008), Some(date(2008, 3, 21)));
        assert_eq!(EasterRelatedHoliday::new(39).get_holiday(2008), Some(date(2008, 5, 1)));
    }

    #[test]
    fn unsupported_year_yields_nothing() {
        assert_eq!(EasterRelatedHoliday::new(1).get_holiday(1500), None);
    }
}
