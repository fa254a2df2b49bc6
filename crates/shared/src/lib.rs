mod day;
mod schedule;

pub use day::*;
pub use schedule::*;
