use std::fmt;

use ipm_cadence_shared::{DAYS_PER_WEEK, DayOfWeek, Schedule};

/// Number of weeks in the repeating cycle: the highest number of entries any
/// single day has. An empty schedule still has a one-week cadence.
pub fn infer_cadence_interval<T>(schedule: &Schedule<T>) -> usize {
    schedule
        .occurrences()
        .into_iter()
        .max()
        .unwrap_or_default()
        .max(1)
}

/// Week offset by day grid derived from a schedule.
///
/// The k-th entry of a given day lands in row k, column `day.index()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkTable<T = String> {
    rows: Vec<[Option<T>; DAYS_PER_WEEK]>,
}

impl<T: Clone> ChunkTable<T> {
    pub fn build(schedule: &Schedule<T>) -> Self {
        let cadence_interval = infer_cadence_interval(schedule);
        let mut rows: Vec<[Option<T>; DAYS_PER_WEEK]> = (0..cadence_interval)
            .map(|_| std::array::from_fn(|_| None))
            .collect();
        let mut occurrence = [0usize; DAYS_PER_WEEK];

        for entry in schedule {
            let day = entry.day_of_week.index();
            rows[occurrence[day]][day] = Some(entry.data.clone());
            occurrence[day] += 1;
        }

        tracing::trace!(
            entries = schedule.len(),
            cadence_interval,
            "built chunk table"
        );

        Self { rows }
    }
}

impl<T> ChunkTable<T> {
    /// Always at least 1.
    pub fn cadence_interval(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[[Option<T>; DAYS_PER_WEEK]] {
        &self.rows
    }

    pub fn get(&self, week_offset: usize, day: DayOfWeek) -> Option<&T> {
        self.rows.get(week_offset)?[day.index()].as_ref()
    }

    /// Cell that follows `(week_offset, day)` in cycle order: the next day of
    /// the same row, Sunday of the next row after a Saturday, and the first
    /// cell of the table after the last Saturday of the cycle.
    pub fn following(&self, week_offset: usize, day: DayOfWeek) -> Option<&T> {
        let day = day.index();

        if day + 1 < DAYS_PER_WEEK {
            self.rows.get(week_offset)?[day + 1].as_ref()
        } else if week_offset + 1 < self.cadence_interval() {
            self.rows[week_offset + 1][0].as_ref()
        } else {
            self.rows[0][0].as_ref()
        }
    }
}

/// Table and cadence interval in one go.
pub fn build_chunk_table<T: Clone>(schedule: &Schedule<T>) -> (ChunkTable<T>, usize) {
    let table = ChunkTable::build(schedule);
    let cadence_interval = table.cadence_interval();

    (table, cadence_interval)
}

impl<T: fmt::Display> fmt::Display for ChunkTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (week_offset, row) in self.rows.iter().enumerate() {
            if week_offset > 0 {
                writeln!(f)?;
            }

            write!(f, "week +{week_offset}: [")?;
            for (day, cell) in row.iter().enumerate() {
                if day > 0 {
                    write!(f, ", ")?;
                }
                match cell {
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, "_")?,
                }
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipm_cadence_shared::ScheduleEntry;

    fn schedule(entries: &[(DayOfWeek, &str)]) -> Schedule {
        entries
            .iter()
            .map(|(day, data)| ScheduleEntry::new(*day, data.to_string()))
            .collect()
    }

    fn abcd() -> Schedule {
        schedule(&[
            (DayOfWeek::Monday, "A"),
            (DayOfWeek::Wednesday, "B"),
            (DayOfWeek::Monday, "C"),
            (DayOfWeek::Friday, "D"),
        ])
    }

    #[test]
    fn test_cadence_interval_is_max_day_count() {
        assert_eq!(infer_cadence_interval(&abcd()), 2);
        assert_eq!(infer_cadence_interval(&Schedule::<String>::default()), 1);
        assert_eq!(
            infer_cadence_interval(&schedule(&[
                (DayOfWeek::Tuesday, "1"),
                (DayOfWeek::Friday, "2"),
                (DayOfWeek::Tuesday, "3"),
                (DayOfWeek::Friday, "4"),
                (DayOfWeek::Tuesday, "5"),
            ])),
            3
        );
    }

    #[test]
    fn test_build_places_repeats_in_later_rows() {
        let (table, cadence_interval) = build_chunk_table(&abcd());
        let a = Some("A".to_owned());
        let b = Some("B".to_owned());
        let c = Some("C".to_owned());
        let d = Some("D".to_owned());

        assert_eq!(cadence_interval, 2);
        assert_eq!(
            table.rows(),
            &[
                [None, a, None, b, None, d, None],
                [None, c, None, None, None, None, None],
            ]
        );
    }

    #[test]
    fn test_build_empty_schedule_has_one_empty_row() {
        let table = ChunkTable::build(&Schedule::<String>::default());

        assert_eq!(table.cadence_interval(), 1);
        assert!(table.rows()[0].iter().all(Option::is_none));
    }

    #[test]
    fn test_row_is_order_of_appearance_per_day() {
        // Interleaving with other days does not move a day's later entries.
        let table = ChunkTable::build(&schedule(&[
            (DayOfWeek::Sunday, "s0"),
            (DayOfWeek::Saturday, "x0"),
            (DayOfWeek::Saturday, "x1"),
            (DayOfWeek::Thursday, "t0"),
            (DayOfWeek::Saturday, "x2"),
            (DayOfWeek::Sunday, "s1"),
        ]));

        assert_eq!(table.cadence_interval(), 3);
        assert_eq!(table.get(0, DayOfWeek::Sunday).map(String::as_str), Some("s0"));
        assert_eq!(table.get(1, DayOfWeek::Sunday).map(String::as_str), Some("s1"));
        assert_eq!(table.get(2, DayOfWeek::Sunday), None);
        assert_eq!(table.get(0, DayOfWeek::Saturday).map(String::as_str), Some("x0"));
        assert_eq!(table.get(1, DayOfWeek::Saturday).map(String::as_str), Some("x1"));
        assert_eq!(table.get(2, DayOfWeek::Saturday).map(String::as_str), Some("x2"));
        assert_eq!(table.get(0, DayOfWeek::Thursday).map(String::as_str), Some("t0"));
        assert_eq!(table.get(3, DayOfWeek::Thursday), None);
    }

    #[test]
    fn test_following_wraps_rows_then_cycle() {
        let table = ChunkTable::build(&schedule(&[
            (DayOfWeek::Sunday, "s0"),
            (DayOfWeek::Saturday, "x0"),
            (DayOfWeek::Sunday, "s1"),
            (DayOfWeek::Saturday, "x1"),
            (DayOfWeek::Monday, "m0"),
        ]));

        assert_eq!(
            table.following(0, DayOfWeek::Sunday).map(String::as_str),
            Some("m0")
        );
        assert_eq!(table.following(1, DayOfWeek::Sunday), None);
        assert_eq!(
            table.following(0, DayOfWeek::Saturday).map(String::as_str),
            Some("s1")
        );
        assert_eq!(
            table.following(1, DayOfWeek::Saturday).map(String::as_str),
            Some("s0")
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(ChunkTable::build(&abcd()), ChunkTable::build(&abcd()));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ChunkTable::build(&abcd()).to_string(),
            "week +0: [_, A, _, B, _, D, _]\nweek +1: [_, C, _, _, _, _, _]"
        );
    }
}
