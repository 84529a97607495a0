use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use log::{debug, trace};

use crate::configuration::Configuration;
use crate::holiday::easter::check_year;
use crate::holiday::holiday::Holiday;
use crate::holiday::holidaycatalog::HolidayCatalog;
use crate::holiday::holidayrule::HolidayEntry;
use crate::holiday::holidaytype::HolidayType;
use crate::holidayerror::Result;
use crate::region::region::Region;
use crate::translation::translationregistry::TranslationRegistry;
use crate::translation::translationtable::TranslationTable;

use super::yearcache::YearCache;

/// Answers holiday questions for a date or a year in a region.
///
/// Holds the static catalog, its own translation registry and a per-year
/// cache of resolved holidays. Every query validates the year first and
/// reports `YearOutOfRange` outside 1583..=9999.
pub struct HolidayEngine {
    catalog: &'static HolidayCatalog,
    translations: Arc<TranslationRegistry>,
    cache: YearCache
}

impl HolidayEngine {
    pub fn new() -> HolidayEngine {
        HolidayEngine::with_translations(Arc::new(TranslationRegistry::new()))
    }

    pub fn with_translations(translations: Arc<TranslationRegistry>) -> HolidayEngine {
        HolidayEngine {
            catalog: HolidayCatalog::standard(),
            translations,
            cache: YearCache::new()
        }
    }

    /// Registers the configured translations, then switches language, then
    /// precomputes the configured years.
    pub fn from_configuration(configuration: &Configuration) -> Result<HolidayEngine> {
        let engine = HolidayEngine::new();
        for translation in configuration.translations() {
            engine.add_translation(translation.name(), translation.table().clone());
        }
        if let Some(language) = configuration.language() {
            engine.set_language(language)?;
        }
        let precomputation = configuration.precomputation();
        if precomputation.apply() {
            engine.precompute(precomputation.start_year(), precomputation.end_year())?;
        }
        Ok(engine)
    }

    pub fn catalog(&self) -> &'static HolidayCatalog {
        self.catalog
    }

    pub fn translations(&self) -> &Arc<TranslationRegistry> {
        &self.translations
    }

    fn entries(&self, year: i32) -> Result<Arc<[HolidayEntry]>> {
        check_year(year)?;
        Ok(self.cache.get_or_compute(year, || {
            let mut entries: Vec<HolidayEntry> = self.catalog
                .rules()
                .iter()
                .filter_map(|rule| rule.resolve(year))
                .collect();
            // Stable: same-day holidays keep catalog order
            entries.sort_by_key(|entry| entry.date);
            entries
        }))
    }

    fn holiday(&self, entry: HolidayEntry) -> Holiday {
        Holiday::new(entry, Arc::clone(&self.translations))
    }

    pub fn is_holiday(&self, date: NaiveDate, region: Region) -> Result<bool> {
        let entries = self.entries(date.year())?;
        let found = entries
            .iter()
            .any(|entry| entry.date == date && entry.regions.matches(region));
        trace!("{} is{} a holiday in {}", date, if found { "" } else { " not" }, region);
        Ok(found)
    }

    /// Use `Region::All` to ignore the region.
    pub fn is_specific_holiday(&self, date: NaiveDate, holiday_type: HolidayType, region: Region) -> Result<bool> {
        check_year(date.year())?;
        let rule = self.catalog.rule(holiday_type);
        Ok(rule
            .resolve(date.year())
            .is_some_and(|entry| entry.date == date && entry.regions.matches(region)))
    }

    pub fn is_sun_or_holiday(&self, date: NaiveDate, region: Region) -> Result<bool> {
        if date.weekday() == Weekday::Sun {
            check_year(date.year())?;
            return Ok(true);
        }
        self.is_holiday(date, region)
    }

    /// When several holidays match (only possible for `Region::All` or when
    /// two nationwide holidays coincide, e.g. Ascension on May 1), nationwide
    /// holidays win, then catalog order.
    pub fn get_holiday_by_date(&self, date: NaiveDate, region: Region) -> Result<Option<Holiday>> {
        let entries = self.entries(date.year())?;
        Ok(pick_holiday(&entries, date, region).map(|entry| self.holiday(entry)))
    }

    /// Ordered by date; holidays on the same day keep catalog order.
    pub fn get_holidays_of_year(&self, year: i32, region: Region) -> Result<Vec<Holiday>> {
        let entries = self.entries(year)?;
        let holidays: Vec<Holiday> = entries
            .iter()
            .filter(|entry| entry.regions.matches(region))
            .map(|entry| self.holiday(*entry))
            .collect();
        debug!("{} holidays in {} for {}", holidays.len(), year, region);
        Ok(holidays)
    }

    /// Resolves and caches `start_year..=end_year` up front.
    pub fn precompute(&self, start_year: i32, end_year: i32) -> Result<()> {
        check_year(start_year)?;
        check_year(end_year)?;
        for year in start_year..=end_year {
            self.entries(year)?;
        }
        debug!("precomputed holidays for {}..={}", start_year, end_year);
        Ok(())
    }

    pub fn is_cached(&self, year: i32) -> bool {
        self.cache.contains(year)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn add_translation(&self, language: &str, table: TranslationTable) {
        self.translations.add_translation(language, table);
    }

    pub fn set_language(&self, language: &str) -> Result<()> {
        self.translations.set_language(language)
    }

    pub fn language(&self) -> String {
        self.translations.language()
    }

    pub fn translate(&self, holiday_type: HolidayType, language: Option<&str>) -> String {
        self.translations.translate(holiday_type, language)
    }
}

impl Default for HolidayEngine {
    fn default() -> Self {
        HolidayEngine::new()
    }
}

/// First entry on `date` observed in `region`, preferring a nationwide entry
/// over a regional one that comes earlier in `entries`.
fn pick_holiday(entries: &[HolidayEntry], date: NaiveDate, region: Region) -> Option<HolidayEntry> {
    let mut matching = entries
        .iter()
        .filter(|entry| entry.date == date && entry.regions.matches(region));
    let first = matching.next().copied();
    match first {
        Some(entry) if !entry.regions.is_nationwide() => {
            matching.find(|other| other.regions.is_nationwide()).copied().or(first)
        },
        other => other
    }
}
