mod chunk;
mod clock;
mod error;
mod resolve;
mod week;

pub use chunk::*;
pub use clock::*;
pub use error::*;
pub use resolve::*;
pub use week::*;

pub use ipm_cadence_shared::{DAYS_PER_WEEK, DayOfWeek, Schedule, ScheduleEntry};
