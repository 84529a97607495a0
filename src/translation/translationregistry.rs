use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use serde::Deserialize;

use crate::holiday::holidaytype::HolidayType;
use crate::holidayerror::{HolidayError, Result};

use super::translationtable::{
    GERMAN,
    ENGLISH,
    TranslationTable,
    english_table,
    german_name,
    german_table
};

struct RegistryState {
    language: String,
    tables: HashMap<String, TranslationTable>
}

/// Holiday names per language plus the active language.
///
/// Reads and writes are serialised through one `RwLock`, so a reader
/// resolving a name never sees a half-applied `add_translation` or
/// `set_language`. Tables are only ever merged into, never removed.
///
/// Lookup falls back from the requested language to the built-in German
/// name, so `translate` cannot fail.
pub struct TranslationRegistry {
    state: RwLock<RegistryState>
}

/// One language entry of a JSON translation list: `{"name": "fr", "table": {...}}`.
#[derive(Deserialize)]
pub struct NamedTranslation {
    name: String,
    table: TranslationTable
}

impl NamedTranslation {
    pub fn new(name: String, table: TranslationTable) -> NamedTranslation {
        NamedTranslation { name, table }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}

impl TranslationRegistry {
    /// German active, German and English tables registered.
    pub fn new() -> TranslationRegistry {
        let mut tables = HashMap::new();
        tables.insert(GERMAN.to_owned(), german_table());
        tables.insert(ENGLISH.to_owned(), english_table());
        TranslationRegistry {
            state: RwLock::new(RegistryState {
                language: GERMAN.to_owned(),
                tables
            })
        }
    }

    // Poisoning is ignored: every write leaves the maps consistent.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Merges `table` into the entry for `language`, creating it if absent.
    pub fn add_translation(&self, language: &str, table: TranslationTable) {
        debug!("adding {} holiday names for language '{}'", table.len(), language);
        let mut state = self.write();
        state.tables
            .entry(language.to_owned())
            .or_default()
            .extend(table);
    }

    pub fn insert_named(&self, translation: NamedTranslation) {
        self.add_translation(&translation.name, translation.table);
    }

    pub fn insert_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<()> {
        for json_value in json_vec {
            let translation: NamedTranslation = serde_json::from_value(json_value.clone())?;
            self.insert_named(translation);
        }
        Ok(())
    }

    /// Fails with `UnknownLanguage` unless a table is registered for `language`.
    pub fn set_language(&self, language: &str) -> Result<()> {
        let mut state = self.write();
        if !state.tables.contains_key(language) {
            return Err(HolidayError::UnknownLanguage(language.to_owned()));
        }
        debug!("holiday language switched from '{}' to '{}'", state.language, language);
        state.language = language.to_owned();
        Ok(())
    }

    pub fn language(&self) -> String {
        self.read().language.clone()
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.read().tables.contains_key(language)
    }

    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.read().tables.keys().cloned().collect();
        languages.sort();
        languages
    }

    /// Name of `holiday_type` in `language`, or in the active language when
    /// `None`. Missing entries fall back to the German name.
    pub fn translate(&self, holiday_type: HolidayType, language: Option<&str>) -> String {
        let state = self.read();
        let language = language.unwrap_or(&state.language);
        match state.tables.get(language).and_then(|table| table.get(&holiday_type)) {
            Some(name) => name.clone(),
            None => {
                debug!("no '{}' name for {}, falling back to German", language, holiday_type);
                german_name(holiday_type).to_owned()
            }
        }
    }
}

impl Default for TranslationRegistry {
    fn default() -> Self {
        TranslationRegistry::new()
    }
}
