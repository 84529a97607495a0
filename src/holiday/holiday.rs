use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;

use crate::region::regionset::RegionSet;
use crate::translation::translationregistry::TranslationRegistry;

use super::holidayrule::HolidayEntry;
use super::holidaytype::HolidayType;

/// A holiday on a concrete date, as returned by the query engine.
///
/// The name is looked up in the registry on every call, so switching the
/// active language after the value was created still takes effect.
#[derive(Clone)]
pub struct Holiday {
    entry: HolidayEntry,
    translations: Arc<TranslationRegistry>
}

impl Holiday {
    pub(crate) fn new(entry: HolidayEntry, translations: Arc<TranslationRegistry>) -> Holiday {
        Holiday { entry, translations }
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.entry.holiday_type
    }

    pub fn date(&self) -> NaiveDate {
        self.entry.date
    }

    pub fn regions(&self) -> RegionSet {
        self.entry.regions
    }

    pub fn is_nationwide(&self) -> bool {
        self.entry.regions.is_nationwide()
    }

    /// `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.entry.date.format("%Y-%m-%d").to_string()
    }

    pub fn equals(&self, date: NaiveDate) -> bool {
        self.entry.date == date
    }

    /// Name in the active language.
    pub fn name(&self) -> String {
        self.translate(None)
    }

    pub fn translate(&self, language: Option<&str>) -> String {
        self.translations.translate(self.entry.holiday_type, language)
    }
}

impl PartialEq for Holiday {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

impl Eq for Holiday {}

impl fmt::Debug for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holiday")
            .field("holiday_type", &self.entry.holiday_type)
            .field("date", &self.entry.date)
            .field("regions", &self.entry.regions)
            .finish()
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date_string(), self.name())
    }
}

impl Serialize for Holiday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Holiday", 4)?;
        state.serialize_field("name", &self.entry.holiday_type)?;
        state.serialize_field("translation", &self.name())?;
        state.serialize_field("date", &self.date_string())?;
        state.serialize_field("regions", &self.entry.regions)?;
        state.end()
    }
}
