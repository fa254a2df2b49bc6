use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::{DAYS_PER_WEEK, DayOfWeek};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(
        "schedule entry {position} has unknown day of week {value:?} (expected one of Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday)"
    )]
    UnknownDayOfWeek { position: usize, value: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleEntry<T = String> {
    pub day_of_week: DayOfWeek,
    pub data: T,
}

impl<T> ScheduleEntry<T> {
    pub fn new(day_of_week: DayOfWeek, data: T) -> Self {
        Self { day_of_week, data }
    }
}

/// Schedule entry as it appears in configuration, before the day name is checked.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RawScheduleEntry {
    pub day_of_week: String,
    pub data: String,
}

/// Ordered list of entries. Entries sharing a day are assigned to successive
/// week offsets in the order they appear here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule<T = String>(Vec<ScheduleEntry<T>>);

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Schedule<T> {
    pub fn new(entries: Vec<ScheduleEntry<T>>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[ScheduleEntry<T>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry<T>> {
        self.0.iter()
    }

    /// How many entries each day has, indexed Sunday=0..Saturday=6.
    pub fn occurrences(&self) -> [usize; DAYS_PER_WEEK] {
        let mut counts = [0; DAYS_PER_WEEK];
        for entry in &self.0 {
            counts[entry.day_of_week.index()] += 1;
        }

        counts
    }
}

impl Schedule<String> {
    /// Builds a schedule from configuration records, rejecting the first
    /// entry whose day name is not an exact match.
    pub fn from_raw<I>(entries: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = RawScheduleEntry>,
    {
        entries
            .into_iter()
            .enumerate()
            .map(|(position, raw)| {
                let day_of_week = DayOfWeek::from_str(&raw.day_of_week).map_err(|_| {
                    ScheduleError::UnknownDayOfWeek {
                        position,
                        value: raw.day_of_week.to_owned(),
                    }
                })?;

                Ok(ScheduleEntry::new(day_of_week, raw.data))
            })
            .collect()
    }
}

impl<T> FromIterator<ScheduleEntry<T>> for Schedule<T> {
    fn from_iter<I: IntoIterator<Item = ScheduleEntry<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Schedule<T> {
    type Item = ScheduleEntry<T>;
    type IntoIter = std::vec::IntoIter<ScheduleEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Schedule<T> {
    type Item = &'a ScheduleEntry<T>;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
