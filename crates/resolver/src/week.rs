use time::{Date, Duration, Weekday};

/// Which day opens a week when locating the Thursday a date belongs to.
///
/// Flipping this moves the cadence boundary between Saturday/Sunday and
/// Sunday/Monday, so it changes which schedule row a Sunday resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn from_monday_start(monday_start: bool) -> Self {
        if monday_start {
            WeekStart::Monday
        } else {
            WeekStart::Sunday
        }
    }

    /// Monday=1..Sunday=7 for a Monday start, Sunday=0..Saturday=6 otherwise.
    fn day_number(self, weekday: Weekday) -> i64 {
        match self {
            WeekStart::Monday => i64::from(weekday.number_from_monday()),
            WeekStart::Sunday => i64::from(weekday.number_days_from_sunday()),
        }
    }
}

/// Thursday-anchored week of year.
///
/// The date is moved to the Thursday of its own week and the result is the
/// week of that Thursday's year, week 1 being the one holding the year's
/// first Thursday. With [`WeekStart::Monday`] this is the ISO 8601 week
/// number. Works on calendar dates, so no offset can shift the result.
pub fn week_of_year(date: Date, week_start: WeekStart) -> u32 {
    let thursday = date.saturating_add(Duration::days(4 - week_start.day_number(date.weekday())));

    u32::from(thursday.ordinal() - 1) / 7 + 1
}
