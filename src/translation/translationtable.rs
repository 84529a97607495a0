use std::collections::HashMap;

use crate::holiday::holidaytype::HolidayType;

pub type TranslationTable = HashMap<HolidayType, String>;

pub const GERMAN: &str = "de";
pub const ENGLISH: &str = "en";

/// Built-in German name. Complete for every type, so it backs every lookup.
pub fn german_name(holiday_type: HolidayType) -> &'static str {
    match holiday_type {
        HolidayType::Neujahrstag => "Neujahrstag",
        HolidayType::HeiligeDreiKoenige => "Heilige Drei Könige",
        HolidayType::Weltfrauentag => "Internationaler Frauentag",
        HolidayType::Karfreitag => "Karfreitag",
        HolidayType::Ostersonntag => "Ostersonntag",
        HolidayType::Ostermontag => "Ostermontag",
        HolidayType::TagDerArbeit => "Tag der Arbeit",
        HolidayType::TagDerBefreiung => "Tag der Befreiung",
        HolidayType::ChristiHimmelfahrt => "Christi Himmelfahrt",
        HolidayType::Pfingstsonntag => "Pfingstsonntag",
        HolidayType::Pfingstmontag => "Pfingstmontag",
        HolidayType::Fronleichnam => "Fronleichnam",
        HolidayType::AugsburgerFriedensfest => "Augsburger Friedensfest",
        HolidayType::MariaHimmelfahrt => "Mariä Himmelfahrt",
        HolidayType::Weltkindertag => "Weltkindertag",
        HolidayType::DeutscheEinheit => "Tag der Deutschen Einheit",
        HolidayType::Reformationstag => "Reformationstag",
        HolidayType::Allerheiligen => "Allerheiligen",
        HolidayType::BussUndBettag => "Buß- und Bettag",
        HolidayType::ErsterWeihnachtsfeiertag => "1. Weihnachtstag",
        HolidayType::ZweiterWeihnachtsfeiertag => "2. Weihnachtstag"
    }
}

fn english_name(holiday_type: HolidayType) -> &'static str {
    match holiday_type {
        HolidayType::Neujahrstag => "New Year's Day",
        HolidayType::HeiligeDreiKoenige => "Epiphany",
        HolidayType::Weltfrauentag => "International Women's Day",
        HolidayType::Karfreitag => "Good Friday",
        HolidayType::Ostersonntag => "Easter Sunday",
        HolidayType::Ostermontag => "Easter Monday",
        HolidayType::TagDerArbeit => "Labour Day",
        HolidayType::TagDerBefreiung => "Liberation Day",
        HolidayType::ChristiHimmelfahrt => "Ascension Day",
        HolidayType::Pfingstsonntag => "Whit Sunday",
        HolidayType::Pfingstmontag => "Whit Monday",
        HolidayType::Fronleichnam => "Corpus Christi",
        HolidayType::AugsburgerFriedensfest => "Augsburg Peace Festival",
        HolidayType::MariaHimmelfahrt => "Assumption Day",
        HolidayType::Weltkindertag => "World Children's Day",
        HolidayType::DeutscheEinheit => "German Unity Day",
        HolidayType::Reformationstag => "Reformation Day",
        HolidayType::Allerheiligen => "All Saints' Day",
        HolidayType::BussUndBettag => "Day of Prayer and Repentance",
        HolidayType::ErsterWeihnachtsfeiertag => "Christmas Day",
        HolidayType::ZweiterWeihnachtsfeiertag => "Boxing Day"
    }
}

pub fn german_table() -> TranslationTable {
    table_from(german_name)
}

pub fn english_table() -> TranslationTable {
    table_from(english_name)
}

fn table_from(name: fn(HolidayType) -> &'static str) -> TranslationTable {
    HolidayType::ALL
        .iter()
        .map(|&t| (t, name(t).to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_tables_are_complete() {
        assert_eq!(german_table().len(), HolidayType::ALL.len());
        assert_eq!(english_table().len(), HolidayType::ALL.len());
        assert_eq!(english_table()[&HolidayType::ChristiHimmelfahrt], "Ascension Day");
    }
}
