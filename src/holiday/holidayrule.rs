use chrono::NaiveDate;

use crate::region::regionset::RegionSet;

use super::daterule::DateRule;
use super::holidaytype::HolidayType;
use super::recurringholiday::RecurringHoliday;

/// Regions observing a holiday, optionally bounded to a span of years.
/// `first` and `last` are inclusive.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Applicability {
    regions: RegionSet,
    first: Option<i32>,
    last: Option<i32>
}

impl Applicability {
    pub fn regions(&self) -> RegionSet {
        self.regions
    }

    pub fn first(&self) -> Option<i32> {
        self.first
    }

    pub fn last(&self) -> Option<i32> {
        self.last
    }

    pub fn is_valid_in(&self, year: i32) -> bool {
        self.first.is_none_or(|first| year >= first) && self.last.is_none_or(|last| year <= last)
    }
}

/// A holiday resolved against one year.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct HolidayEntry {
    pub holiday_type: HolidayType,
    pub date: NaiveDate,
    pub regions: RegionSet
}

#[derive(Debug, Clone)]
pub struct HolidayRule {
    holiday_type: HolidayType,
    date_rule: DateRule,
    applicability: Vec<Applicability>
}

impl HolidayRule {
    pub fn new(holiday_type: HolidayType, date_rule: DateRule) -> HolidayRule {
        HolidayRule {
            holiday_type,
            date_rule,
            applicability: Vec::new()
        }
    }

    pub fn observed_in(self, regions: RegionSet) -> HolidayRule {
        self.observed_between(regions, None, None)
    }

    pub fn observed_between(mut self, regions: RegionSet, first: Option<i32>, last: Option<i32>) -> HolidayRule {
        self.applicability.push(Applicability { regions, first, last });
        self
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    pub fn date_rule(&self) -> &DateRule {
        &self.date_rule
    }

    pub fn applicability(&self) -> &[Applicability] {
        &self.applicability
    }

    /// Union of every applicability entry valid in `year`.
    pub fn regions_in(&self, year: i32) -> RegionSet {
        self.applicability
            .iter()
            .filter(|a| a.is_valid_in(year))
            .fold(RegionSet::empty(), |acc, a| acc | a.regions)
    }

    /// `None` when the holiday is not observed anywhere in `year`.
    pub fn resolve(&self, year: i32) -> Option<HolidayEntry> {
        let regions = self.regions_in(year);
        if regions.is_empty() {
            return None;
        }
        self.date_rule.get_holiday(year).map(|date| HolidayEntry {
            holiday_type: self.holiday_type,
            date,
            regions
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::fixeddateholiday::FixedDateHoliday;
    use crate::region::region::Region;

    fn frauentag() -> HolidayRule {
        HolidayRule::new(HolidayType::Weltfrauentag, DateRule::Fixed(FixedDateHoliday::new(3, 8).unwrap()))
            .observed_between(RegionSet::of(&[Region::BE]), Some(2019), None)
            .observed_between(RegionSet::of(&[Region::MV]), Some(2023), None)
    }

    #[test]
    fn regions_grow_over_the_years() {
        let rule = frauentag();
        assert!(rule.regions_in(2018).is_empty());
        assert_eq!(rule.regions_in(2019).to_vec(), vec![Region::BE]);
        assert_eq!(rule.regions_in(2024).to_vec(), vec![Region::BE, Region::MV]);
    }

    #[test]
    fn resolve_skips_years_without_observance() {
        let rule = frauentag();
        assert_eq!(rule.resolve(2010), None);
        let entry = rule.resolve(2020).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2020, 3, 8).unwrap());
        assert_eq!(entry.holiday_type, HolidayType::Weltfrauentag);
    }

    #[test]
    fn single_year_applicability() {
        let rule = HolidayRule::new(HolidayType::TagDerBefreiung, DateRule::Fixed(FixedDateHoliday::new(5, 8).unwrap()))
            .observed_between(RegionSet::of(&[Region::BE]), Some(2020), Some(2020));
        assert!(rule.resolve(2019).is_none());
        assert!(rule.resolve(2020).is_some());
        assert!(rule.resolve(2021).is_none());
    }
}
