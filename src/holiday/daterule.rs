use chrono::NaiveDate;

use super::easterrelatedholiday::EasterRelatedHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::recurringholiday::RecurringHoliday;
use super::weekdaybeforeholiday::WeekdayBeforeHoliday;

/// How a holiday's date is derived from the year.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DateRule {
    Fixed(FixedDateHoliday),
    EasterRelated(EasterRelatedHoliday),
    WeekdayBefore(WeekdayBeforeHoliday)
}

impl DateRule {
    pub fn is_fixed(&self) -> bool {
        matches!(self, DateRule::Fixed(_))
    }

    pub fn easter_offset(&self) -> Option<i32> {
        match self {
            DateRule::EasterRelated(rule) => Some(rule.shift_days()),
            _ => None
        }
    }

    /// `(month, day)` for fixed-date rules.
    pub fn month_day(&self) -> Option<(u32, u32)> {
        match self {
            DateRule::Fixed(rule) => Some((rule.month(), rule.day())),
            _ => None
        }
    }
}

impl RecurringHoliday for DateRule {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        match self {
            DateRule::Fixed(rule) => rule.get_holiday(year),
            DateRule::EasterRelated(rule) => rule.get_holiday(year),
            DateRule::WeekdayBefore(rule) => rule.get_holiday(year)
        }
    }
}
