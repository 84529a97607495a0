use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::holidayerror::Result;
use crate::translation::translationregistry::NamedTranslation;

#[derive(Deserialize, Default, Clone, Copy)]
pub struct PrecomputationJsonProp {
    apply: bool,
    #[serde(default)]
    start_year: i32,
    #[serde(default)]
    end_year: i32
}

impl PrecomputationJsonProp {
    pub fn new(start_year: i32, end_year: i32) -> PrecomputationJsonProp {
        PrecomputationJsonProp { apply: true, start_year, end_year }
    }

    pub fn apply(&self) -> bool {
        self.apply
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }
}

/// Engine settings read from JSON, every field optional:
///
/// ```json
/// {
///     "language": "en",
///     "translations": [{"name": "fr", "table": {"NEUJAHRSTAG": "Jour de l'an"}}],
///     "precomputation": {"apply": true, "start_year": 2020, "end_year": 2030}
/// }
/// ```
#[derive(Deserialize, Default)]
pub struct Configuration {
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    translations: Vec<NamedTranslation>,
    #[serde(default)]
    precomputation: PrecomputationJsonProp
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(file_path: P) -> Result<Configuration> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn from_json_str(json: &str) -> Result<Configuration> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn translations(&self) -> &[NamedTranslation] {
        &self.translations
    }

    pub fn precomputation(&self) -> PrecomputationJsonProp {
        self.precomputation
    }

    pub fn with_language(mut self, language: &str) -> Configuration {
        self.language = Some(language.to_owned());
        self
    }

    pub fn with_translation(mut self, translation: NamedTranslation) -> Configuration {
        self.translations.push(translation);
        self
    }

    pub fn with_precomputation(mut self, start_year: i32, end_year: i32) -> Configuration {
        self.precomputation = PrecomputationJsonProp::new(start_year, end_year);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidayerror::HolidayError;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Configuration::from_json_str("{}").unwrap();
        assert!(config.language().is_none());
        assert!(config.translations().is_empty());
        assert!(!config.precomputation().apply());
    }

    #[test]
    fn reads_every_section() {
        let config = Configuration::from_json_str(r#"{
            "language": "fr",
            "translations": [{"name": "fr", "table": {"NEUJAHRSTAG": "Jour de l'an"}}],
            "precomputation": {"apply": true, "start_year": 2020, "end_year": 2030}
        }"#).unwrap();
        assert_eq!(config.language(), Some("fr"));
        assert_eq!(config.translations()[0].name(), "fr");
        assert_eq!(config.precomputation().start_year(), 2020);
        assert_eq!(config.precomputation().end_year(), 2030);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(Configuration::from_json_str("{"), Err(HolidayError::Json(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Configuration::from_path("/nonexistent/feiertage.json"),
            Err(HolidayError::Io(_))
        ));
    }
}
