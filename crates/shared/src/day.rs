use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const DAYS_PER_WEEK: usize = 7;

/// Day label of a schedule entry.
///
/// Variant order is the column order of the chunk table: Sunday is column 0
/// and Saturday column 6, whatever week start the resolver is configured with.
/// Names parse case-sensitively (`"Monday"`, never `"monday"`).
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::VARIANTS.get(index).copied()
    }

    /// The following day, Saturday wrapping to Sunday.
    pub fn succ(self) -> Self {
        Self::VARIANTS[(self.index() + 1) % DAYS_PER_WEEK]
    }
}

impl From<time::Weekday> for DayOfWeek {
    fn from(weekday: time::Weekday) -> Self {
        Self::VARIANTS[weekday.number_days_from_sunday() as usize]
    }
}
