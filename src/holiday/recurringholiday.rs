use chrono::{Datelike, NaiveDate};

/// A rule producing at most one date per year.
pub trait RecurringHoliday {

    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()).is_some_and(|h| h == *d)
    }
}
