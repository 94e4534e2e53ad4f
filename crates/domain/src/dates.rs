// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar dates selected for an event.
//!
//! Dates are identified by calendar day only. The collection is kept sorted
//! ascending with no duplicates after every mutation, so callers never need
//! to re-sort before rendering or serializing.
//!
//! Dates cross the wire as ISO `YYYY-MM-DD` strings.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Formats a date as an ISO `YYYY-MM-DD` key.
#[must_use]
pub fn to_iso_date(date: Date) -> String {
    // Only fails for descriptions that need time or offset components
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid calendar date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// The ordered, deduplicated set of event dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EventDates {
    dates: Vec<Date>,
}

impl EventDates {
    /// Creates an empty date selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { dates: Vec::new() }
    }

    /// Inserts a date, keeping the selection sorted.
    ///
    /// Returns `false` if the calendar day was already selected.
    pub fn insert(&mut self, date: Date) -> bool {
        match self.dates.binary_search(&date) {
            Ok(_) => false,
            Err(position) => {
                self.dates.insert(position, date);
                true
            }
        }
    }

    /// Removes a date. Returns `false` if it was not selected.
    pub fn remove(&mut self, date: Date) -> bool {
        match self.dates.binary_search(&date) {
            Ok(position) => {
                self.dates.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Selects the date if absent, deselects it if present.
    ///
    /// Returns whether the date is selected afterwards.
    pub fn toggle(&mut self, date: Date) -> bool {
        if self.remove(date) {
            false
        } else {
            self.insert(date)
        }
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the selected dates in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[Date] {
        &self.dates
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Date>> {
        self.dates.iter().copied()
    }

    /// Returns the selected dates as ISO strings, ascending.
    #[must_use]
    pub fn to_iso_strings(&self) -> Vec<String> {
        self.iter().map(to_iso_date).collect()
    }
}

impl FromIterator<Date> for EventDates {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        let mut dates: Vec<Date> = iter.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }
}

impl<'a> IntoIterator for &'a EventDates {
    type Item = Date;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Date>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for EventDates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_iso_strings().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EventDates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Vec<String> = Vec::deserialize(deserializer)?;
        raw.iter()
            .map(|value| parse_iso_date(value))
            .collect::<Result<Self, DomainError>>()
            .map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for maps keyed by calendar date, written with ISO string keys.
pub mod iso_date_map {
    use super::{parse_iso_date, to_iso_date};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;
    use time::Date;

    /// Serializes a date-keyed map with ISO string keys.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S, V>(map: &BTreeMap<Date, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let keyed: BTreeMap<String, &V> = map
            .iter()
            .map(|(date, value)| (to_iso_date(*date), value))
            .collect();
        keyed.serialize(serializer)
    }

    /// Deserializes a map with ISO string keys into a date-keyed map.
    ///
    /// # Errors
    ///
    /// Fails if any key is not a valid ISO calendar date.
    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<BTreeMap<Date, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        let keyed: BTreeMap<String, V> = BTreeMap::deserialize(deserializer)?;
        keyed
            .into_iter()
            .map(|(key, value)| {
                parse_iso_date(&key)
                    .map(|date| (date, value))
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }
}
