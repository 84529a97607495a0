use std::sync::OnceLock;

use chrono::Weekday;

use crate::holidayerror::Result;
use crate::region::region::Region;
use crate::region::regionset::RegionSet;

use super::daterule::DateRule;
use super::easterrelatedholiday::EasterRelatedHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::holidaytype::HolidayType;
use super::holidayrule::HolidayRule;
use super::weekdaybeforeholiday::WeekdayBeforeHoliday;

/// Read-only table holding exactly one rule per `HolidayType`, stored in
/// catalog order.
#[derive(Debug)]
pub struct HolidayCatalog {
    rules: Vec<HolidayRule>
}

static STANDARD: OnceLock<HolidayCatalog> = OnceLock::new();

impl HolidayCatalog {
    /// The German catalog, built on first use.
    pub fn standard() -> &'static HolidayCatalog {
        STANDARD.get_or_init(|| HolidayCatalog {
            rules: HolidayType::ALL.iter().map(|&t| standard_rule(t)).collect()
        })
    }

    pub fn rule(&self, holiday_type: HolidayType) -> &HolidayRule {
        &self.rules[holiday_type.index()]
    }

    pub fn rule_by_code(&self, code: &str) -> Result<&HolidayRule> {
        let holiday_type: HolidayType = code.parse()?;
        Ok(self.rule(holiday_type))
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }
}

fn fixed(holiday_type: HolidayType, month: u32, day: u32) -> HolidayRule {
    match FixedDateHoliday::new(month, day) {
        Some(rule) => HolidayRule::new(holiday_type, DateRule::Fixed(rule)),
        None => unreachable!("{holiday_type}: {month}-{day} is not a calendar day")
    }
}

fn easter(holiday_type: HolidayType, shift_days: i32) -> HolidayRule {
    HolidayRule::new(holiday_type, DateRule::EasterRelated(EasterRelatedHoliday::new(shift_days)))
}

fn weekday_before(holiday_type: HolidayType, month: u32, day: u32, weekday: Weekday) -> HolidayRule {
    match WeekdayBeforeHoliday::new(month, day, weekday) {
        Some(rule) => HolidayRule::new(holiday_type, DateRule::WeekdayBefore(rule)),
        None => unreachable!("{holiday_type}: {month}-{day} is not a calendar day")
    }
}

fn regions(regions: &[Region]) -> RegionSet {
    RegionSet::of(regions)
}

fn standard_rule(holiday_type: HolidayType) -> HolidayRule {
    use Region::*;

    let nationwide = RegionSet::nationwide();

    match holiday_type {
        HolidayType::Neujahrstag => fixed(holiday_type, 1, 1).observed_in(nationwide),
        HolidayType::HeiligeDreiKoenige => fixed(holiday_type, 1, 6)
            .observed_in(regions(&[BW, BY, ST, Augsburg])),
        HolidayType::Weltfrauentag => fixed(holiday_type, 3, 8)
            .observed_between(regions(&[BE]), Some(2019), None)
            .observed_between(regions(&[MV]), Some(2023), None),
        HolidayType::Karfreitag => easter(holiday_type, -2).observed_in(nationwide),
        HolidayType::Ostersonntag => easter(holiday_type, 0).observed_in(regions(&[BB])),
        HolidayType::Ostermontag => easter(holiday_type, 1).observed_in(nationwide),
        HolidayType::TagDerArbeit => fixed(holiday_type, 5, 1).observed_in(nationwide),
        HolidayType::TagDerBefreiung => fixed(holiday_type, 5, 8)
            .observed_between(regions(&[BE]), Some(2020), Some(2020))
            .observed_between(regions(&[BE]), Some(2025), Some(2025)),
        HolidayType::ChristiHimmelfahrt => easter(holiday_type, 39).observed_in(nationwide),
        HolidayType::Pfingstsonntag => easter(holiday_type, 49).observed_in(regions(&[BB])),
        HolidayType::Pfingstmontag => easter(holiday_type, 50).observed_in(nationwide),
        HolidayType::Fronleichnam => easter(holiday_type, 60)
            .observed_in(regions(&[BW, BY, HE, NW, RP, SL, Augsburg])),
        HolidayType::AugsburgerFriedensfest => fixed(holiday_type, 8, 8)
            .observed_in(regions(&[Augsburg])),
        HolidayType::MariaHimmelfahrt => fixed(holiday_type, 8, 15)
            .observed_in(regions(&[BY, SL, Augsburg])),
        HolidayType::Weltkindertag => fixed(holiday_type, 9, 20)
            .observed_between(regions(&[TH]), Some(2019), None),
        HolidayType::DeutscheEinheit => fixed(holiday_type, 10, 3)
            .observed_between(nationwide, Some(1990), None),
        HolidayType::Reformationstag => fixed(holiday_type, 10, 31)
            .observed_in(regions(&[BB, MV, SN, ST, TH]))
            .observed_between(regions(&[HB, HH, NI, SH]), Some(2018), None)
            .observed_between(nationwide, Some(2017), Some(2017)),
        HolidayType::Allerheiligen => fixed(holiday_type, 11, 1)
            .observed_in(regions(&[BW, BY, NW, RP, SL, Augsburg])),
        HolidayType::BussUndBettag => weekday_before(holiday_type, 11, 23, Weekday::Wed)
            .observed_in(regions(&[SN])),
        HolidayType::ErsterWeihnachtsfeiertag => fixed(holiday_type, 12, 25).observed_in(nationwide),
        HolidayType::ZweiterWeihnachtsfeiertag => fixed(holiday_type, 12, 26).observed_in(nationwide)
    }
}
