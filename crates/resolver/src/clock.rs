use time::{Duration, OffsetDateTime};
use time_tz::{ToTimezone, Tz, timezones};

use crate::ResolverError;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in a named time zone, or in the host's local offset.
#[derive(Clone, Default)]
pub struct SystemClock {
    timezone: Option<(String, &'static Tz)>,
}

impl SystemClock {
    pub fn local() -> Self {
        Self::default()
    }

    pub fn with_timezone(name: &str) -> Result<Self, ResolverError> {
        let tz = timezones::get_by_name(name)
            .ok_or_else(|| ResolverError::UnknownTimezone(name.to_owned()))?;

        Ok(Self {
            timezone: Some((name.to_owned(), tz)),
        })
    }

    pub fn from_config(timezone: Option<&str>) -> Result<Self, ResolverError> {
        match timezone {
            Some(name) => Self::with_timezone(name),
            None => Ok(Self::local()),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();

        if let Some((_, tz)) = &self.timezone {
            return now.to_timezone(*tz);
        }

        match OffsetDateTime::now_local() {
            Ok(local) => local,
            Err(err) => {
                tracing::warn!(err = %err, "local offset unavailable, falling back to UTC");
                now
            }
        }
    }
}

impl std::fmt::Debug for SystemClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let timezone = self
            .timezone
            .as_ref()
            .map(|(name, _)| name.as_str())
            .unwrap_or("local");
        f.debug_struct("SystemClock")
            .field("timezone", &timezone)
            .finish()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

/// Start of the next calendar day in `now`'s offset.
pub fn next_local_midnight(now: OffsetDateTime) -> OffsetDateTime {
    now.date()
        .saturating_add(Duration::days(1))
        .midnight()
        .assume_offset(now.offset())
}
