//! Easter Sunday against the `computus` crate and the liturgical date window.

use chrono::{Datelike, Weekday};
use proptest::prelude::*;

use feiertage::holiday::easter::{easter_sunday, easter_sunday_month_day};

#[test]
fn easter_falls_between_march_22_and_april_25() {
    for year in 1900..=2100 {
        let (month, day) = easter_sunday_month_day(year).unwrap();
        let in_window = (month == 3 && day >= 22) || (month == 4 && day <= 25);
        assert!(in_window, "{year}: Easter on {month}-{day}");
    }
}

proptest! {
    #[test]
    fn matches_computus(year in 1583i32..=4099) {
        let expected = computus::gregorian(year).unwrap();
        prop_assert_eq!(easter_sunday_month_day(year).unwrap(), (expected.month, expected.day));
    }

    #[test]
    fn is_always_a_sunday(year in 1583i32..=9999) {
        prop_assert_eq!(easter_sunday(year).unwrap().weekday(), Weekday::Sun);
    }
}
