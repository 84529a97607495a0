use chrono::NaiveDate;

use crate::holidayerror::{HolidayError, Result};

pub const MIN_YEAR: i32 = 1583;
pub const MAX_YEAR: i32 = 9999;

pub fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(HolidayError::YearOutOfRange(year))
    }
}

/// Gregorian Easter Sunday as `(month, day)`, anonymous Gregorian algorithm
/// (Meeus/Jones/Butcher).
pub fn easter_sunday_month_day(year: i32) -> Result<(u32, u32)> {
    check_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    Ok((month as u32, day as u32))
}

pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    let (month, day) = easter_sunday_month_day(year)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(HolidayError::YearOutOfRange(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_easter_dates() {
        assert_eq!(easter_sunday_month_day(1818).unwrap(), (3, 22));
        assert_eq!(easter_sunday_month_day(1943).unwrap(), (4, 25));
        assert_eq!(easter_sunday_month_day(2008).unwrap(), (3, 23));
        assert_eq!(easter_sunday_month_day(2019).unwrap(), (4, 21));
        assert_eq!(easter_sunday_month_day(2024).unwrap(), (3, 31));
        assert_eq!(easter_sunday_month_day(2025).unwrap(), (4, 20));
        assert_eq!(easter_sunday_month_day(2038).unwrap(), (4, 25));
    }

    #[test]
    fn range_limits() {
        assert!(easter_sunday(MIN_YEAR).is_ok());
        assert!(easter_sunday(MAX_YEAR).is_ok());
        assert!(matches!(easter_sunday(1582), Err(HolidayError::YearOutOfRange(1582))));
        assert!(matches!(easter_sunday(10_000), Err(HolidayError::YearOutOfRange(10_000))));
    }
}
