use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::debug;

use crate::holiday::holidayrule::HolidayEntry;

/// Resolved holidays per year, shared between threads.
///
/// Two threads missing the same year may both compute it; resolution is
/// deterministic, so the second insert just replaces an equal value.
pub struct YearCache {
    years: RwLock<HashMap<i32, Arc<[HolidayEntry]>>>
}

impl YearCache {
    pub fn new() -> YearCache {
        YearCache {
            years: RwLock::new(HashMap::new())
        }
    }

    pub fn get_or_compute(
        &self,
        year: i32,
        compute: impl FnOnce() -> Vec<HolidayEntry>,
    ) -> Arc<[HolidayEntry]> {
        if let Some(entries) = self.years
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&year) {
            return Arc::clone(entries);
        }

        // Compute outside the lock, then insert
        let entries: Arc<[HolidayEntry]> = compute().into();
        debug!("cached {} holidays for {}", entries.len(), year);
        self.years
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(year, Arc::clone(&entries));
        entries
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(&year)
    }

    pub fn len(&self) -> usize {
        self.years
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.years
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Default for YearCache {
    fn default() -> Self {
        YearCache::new()
    }
}
