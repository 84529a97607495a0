use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de;

use crate::holidayerror::HolidayError;

/// Every holiday known to the catalog, in calendar order of its usual date.
///
/// Declaration order is the catalog order and is used as tie-break when two
/// holidays fall on the same day.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum HolidayType {
    Neujahrstag,
    HeiligeDreiKoenige,
    Weltfrauentag,
    Karfreitag,
    Ostersonntag,
    Ostermontag,
    TagDerArbeit,
    TagDerBefreiung,
    ChristiHimmelfahrt,
    Pfingstsonntag,
    Pfingstmontag,
    Fronleichnam,
    AugsburgerFriedensfest,
    MariaHimmelfahrt,
    Weltkindertag,
    DeutscheEinheit,
    Reformationstag,
    Allerheiligen,
    BussUndBettag,
    ErsterWeihnachtsfeiertag,
    ZweiterWeihnachtsfeiertag
}

impl HolidayType {
    pub const ALL: [HolidayType; 21] = [
        HolidayType::Neujahrstag,
        HolidayType::HeiligeDreiKoenige,
        HolidayType::Weltfrauentag,
        HolidayType::Karfreitag,
        HolidayType::Ostersonntag,
        HolidayType::Ostermontag,
        HolidayType::TagDerArbeit,
        HolidayType::TagDerBefreiung,
        HolidayType::ChristiHimmelfahrt,
        HolidayType::Pfingstsonntag,
        HolidayType::Pfingstmontag,
        HolidayType::Fronleichnam,
        HolidayType::AugsburgerFriedensfest,
        HolidayType::MariaHimmelfahrt,
        HolidayType::Weltkindertag,
        HolidayType::DeutscheEinheit,
        HolidayType::Reformationstag,
        HolidayType::Allerheiligen,
        HolidayType::BussUndBettag,
        HolidayType::ErsterWeihnachtsfeiertag,
        HolidayType::ZweiterWeihnachtsfeiertag
    ];

    pub fn code(&self) -> &'static str {
        match self {
            HolidayType::Neujahrstag => "NEUJAHRSTAG",
            HolidayType::HeiligeDreiKoenige => "HEILIGEDREIKOENIGE",
            HolidayType::Weltfrauentag => "WELTFRAUENTAG",
            HolidayType::Karfreitag => "KARFREITAG",
            HolidayType::Ostersonntag => "OSTERSONNTAG",
            HolidayType::Ostermontag => "OSTERMONTAG",
            HolidayType::TagDerArbeit => "TAG_DER_ARBEIT",
            HolidayType::TagDerBefreiung => "TAG_DER_BEFREIUNG",
            HolidayType::ChristiHimmelfahrt => "CHRISTIHIMMELFAHRT",
            HolidayType::Pfingstsonntag => "PFINGSTSONNTAG",
            HolidayType::Pfingstmontag => "PFINGSTMONTAG",
            HolidayType::Fronleichnam => "FRONLEICHNAM",
            HolidayType::AugsburgerFriedensfest => "AUGSBURGER_FRIEDENSFEST",
            HolidayType::MariaHimmelfahrt => "MARIAHIMMELFAHRT",
            HolidayType::Weltkindertag => "WELTKINDERTAG",
            HolidayType::DeutscheEinheit => "DEUTSCHEEINHEIT",
            HolidayType::Reformationstag => "REFORMATIONSTAG",
            HolidayType::Allerheiligen => "ALLERHEILIGEN",
            HolidayType::BussUndBettag => "BUBETAG",
            HolidayType::ErsterWeihnachtsfeiertag => "ERSTERWEIHNACHTSFEIERTAG",
            HolidayType::ZweiterWeihnachtsfeiertag => "ZWEITERWEIHNACHTSFEIERTAG"
        }
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for HolidayType {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HolidayType::ALL
            .iter()
            .find(|t| t.code().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| HolidayError::UnknownHolidayType(s.to_owned()))
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for HolidayType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for HolidayType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}
