use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de;

use crate::holidayerror::HolidayError;

/// A region for holiday queries.
///
/// The 16 federal states, the federal level (`Bund`, nationwide holidays
/// only), the city of Augsburg and the `All` wildcard, which matches any
/// holiday observed anywhere.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Region {
    BW,
    BY,
    BE,
    BB,
    HB,
    HH,
    HE,
    MV,
    NI,
    NW,
    RP,
    SL,
    SN,
    ST,
    SH,
    TH,
    Bund,
    Augsburg,
    #[default]
    All
}

impl Region {
    pub const STATES: [Region; 16] = [
        Region::BW, Region::BY, Region::BE, Region::BB,
        Region::HB, Region::HH, Region::HE, Region::MV,
        Region::NI, Region::NW, Region::RP, Region::SL,
        Region::SN, Region::ST, Region::SH, Region::TH
    ];

    pub const ALL: [Region; 19] = [
        Region::BW, Region::BY, Region::BE, Region::BB,
        Region::HB, Region::HH, Region::HE, Region::MV,
        Region::NI, Region::NW, Region::RP, Region::SL,
        Region::SN, Region::ST, Region::SH, Region::TH,
        Region::Bund, Region::Augsburg, Region::All
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Region::BW => "BW",
            Region::BY => "BY",
            Region::BE => "BE",
            Region::BB => "BB",
            Region::HB => "HB",
            Region::HH => "HH",
            Region::HE => "HE",
            Region::MV => "MV",
            Region::NI => "NI",
            Region::NW => "NW",
            Region::RP => "RP",
            Region::SL => "SL",
            Region::SN => "SN",
            Region::ST => "ST",
            Region::SH => "SH",
            Region::TH => "TH",
            Region::Bund => "BUND",
            Region::Augsburg => "AUGSBURG",
            Region::All => "ALL"
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::BW => "Baden-Württemberg",
            Region::BY => "Bayern",
            Region::BE => "Berlin",
            Region::BB => "Brandenburg",
            Region::HB => "Bremen",
            Region::HH => "Hamburg",
            Region::HE => "Hessen",
            Region::MV => "Mecklenburg-Vorpommern",
            Region::NI => "Niedersachsen",
            Region::NW => "Nordrhein-Westfalen",
            Region::RP => "Rheinland-Pfalz",
            Region::SL => "Saarland",
            Region::SN => "Sachsen",
            Region::ST => "Sachsen-Anhalt",
            Region::SH => "Schleswig-Holstein",
            Region::TH => "Thüringen",
            Region::Bund => "Bundesweit",
            Region::Augsburg => "Augsburg",
            Region::All => "Alle Regionen"
        }
    }

    pub fn is_state(&self) -> bool {
        !matches!(self, Region::Bund | Region::Augsburg | Region::All)
    }

    /// Bit position inside a `RegionSet`. `All` is a query wildcard and has none.
    pub(crate) fn bit(&self) -> Option<u32> {
        match self {
            Region::All => None,
            other => Some(*other as u32)
        }
    }
}

impl FromStr for Region {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .find(|r| r.code().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| HolidayError::UnknownRegion(s.to_owned()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}
