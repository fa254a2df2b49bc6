use ipm_cadence_shared::{DayOfWeek, Schedule};
use time::{Date, OffsetDateTime};

use crate::{ChunkTable, Clock, WeekStart, week_of_year};

/// Where a date falls inside the repeating cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadencePosition {
    pub week_of_year: u32,
    /// `(week_of_year - 1) mod cadence_interval`
    pub cadence_index: usize,
    pub day_of_week: DayOfWeek,
}

impl CadencePosition {
    pub fn locate(date: Date, week_start: WeekStart, cadence_interval: usize) -> Self {
        let week_of_year = week_of_year(date, week_start);

        Self {
            week_of_year,
            cadence_index: (week_of_year as usize - 1) % cadence_interval.max(1),
            day_of_week: date.weekday().into(),
        }
    }
}

/// Today's and tomorrow's values. Either may be empty when the schedule has
/// nothing on that day; `position` is empty only for an empty schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<T = String> {
    pub current: Option<T>,
    pub next: Option<T>,
    pub position: Option<CadencePosition>,
}

impl<T> Resolution<T> {
    pub fn empty() -> Self {
        Self {
            current: None,
            next: None,
            position: None,
        }
    }
}

impl<T: Clone> ChunkTable<T> {
    /// Looks up the values for the calendar day of `now`, in `now`'s own offset.
    pub fn resolve(&self, now: OffsetDateTime, week_start: WeekStart) -> Resolution<T> {
        let position = CadencePosition::locate(now.date(), week_start, self.cadence_interval());

        Resolution {
            current: self
                .get(position.cadence_index, position.day_of_week)
                .cloned(),
            next: self
                .following(position.cadence_index, position.day_of_week)
                .cloned(),
            position: Some(position),
        }
    }
}

/// One-shot resolution; builds the chunk table on every call.
pub fn resolve<T: Clone>(
    schedule: &Schedule<T>,
    now: OffsetDateTime,
    week_start: WeekStart,
) -> Resolution<T> {
    if schedule.is_empty() {
        return Resolution::empty();
    }

    ChunkTable::build(schedule).resolve(now, week_start)
}

/// Owns a schedule snapshot together with its chunk table.
///
/// The table is rebuilt whenever the schedule is replaced, so repeated
/// lookups skip the rebuild without ever reading a stale table.
#[derive(Debug, Clone)]
pub struct Resolver<T = String> {
    schedule: Schedule<T>,
    table: ChunkTable<T>,
    week_start: WeekStart,
}

impl<T: Clone> Resolver<T> {
    pub fn new(schedule: Schedule<T>, week_start: WeekStart) -> Self {
        let table = ChunkTable::build(&schedule);

        Self {
            schedule,
            table,
            week_start,
        }
    }

    pub fn set_schedule(&mut self, schedule: Schedule<T>) {
        self.table = ChunkTable::build(&schedule);
        self.schedule = schedule;
    }

    #[tracing::instrument(skip(self), fields(entries = self.schedule.len()))]
    pub fn resolve_at(&self, now: OffsetDateTime) -> Resolution<T> {
        if self.schedule.is_empty() {
            tracing::debug!("schedule is empty, nothing to resolve");
            return Resolution::empty();
        }

        let resolution = self.table.resolve(now, self.week_start);

        if let Some(position) = &resolution.position {
            tracing::debug!(
                week_of_year = position.week_of_year,
                cadence_index = position.cadence_index,
                cadence_interval = self.table.cadence_interval(),
                day_of_week = %position.day_of_week,
                has_current = resolution.current.is_some(),
                has_next = resolution.next.is_some(),
                "resolved cadence position"
            );
        }

        resolution
    }

    pub fn resolve_with(&self, clock: &impl Clock) -> Resolution<T> {
        self.resolve_at(clock.now())
    }
}

impl<T> Resolver<T> {
    pub fn schedule(&self) -> &Schedule<T> {
        &self.schedule
    }

    pub fn table(&self) -> &ChunkTable<T> {
        &self.table
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }
}
