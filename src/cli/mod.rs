pub mod show;
pub mod watch;

use time::{Date, macros::format_description};

pub fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("invalid date {value:?}: {e}"))
}
