//! Midnight refresh of the panel.
//!
//! A single-shot timer is armed for the next local midnight; when it fires
//! the schedule is resolved again, the panel is published and the timer is
//! re-armed. The loop ends when the shutdown signal changes or when nobody
//! listens for updates anymore.

use std::time::Duration;

use ipm_cadence_resolver::{Clock, Resolution, Resolver, next_local_midnight};
use time::OffsetDateTime;
use tokio::sync::{mpsc, watch};

use crate::display::Panel;

/// Smallest wait between two refreshes, so a clock sitting exactly on
/// midnight cannot spin.
const MIN_WAIT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub resolved_at: OffsetDateTime,
    pub resolution: Resolution,
    pub panel: Panel,
}

pub struct Refresher<C> {
    resolver: Resolver,
    clock: C,
    placeholder: String,
}

impl<C: Clock> Refresher<C> {
    pub fn new(resolver: Resolver, clock: C, placeholder: impl Into<String>) -> Self {
        Self {
            resolver,
            clock,
            placeholder: placeholder.into(),
        }
    }

    pub fn update(&self) -> Update {
        let resolved_at = self.clock.now();
        let resolution = self.resolver.resolve_at(resolved_at);
        let panel = Panel::from_resolution(&resolution, &self.placeholder);

        Update {
            resolved_at,
            resolution,
            panel,
        }
    }

    /// Publishes an update right away, then once per local midnight.
    pub async fn run(
        self,
        updates: mpsc::UnboundedSender<Update>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            let update = self.update();
            let wait = until_next_midnight(update.resolved_at);

            if updates.send(update).is_err() {
                tracing::debug!("update receiver dropped, stopping refresher");
                break;
            }

            tracing::debug!(wait_secs = wait.as_secs(), "next refresh armed");

            tokio::select! {
                _ = tokio::time::sleep(wait) => {}
                _ = shutdown.changed() => {
                    tracing::info!("refresher shutting down");
                    break;
                }
            }
        }
    }
}

/// Time left until the next local midnight after `now`.
pub fn until_next_midnight(now: OffsetDateTime) -> Duration {
    Duration::try_from(next_local_midnight(now) - now)
        .unwrap_or(MIN_WAIT)
        .max(MIN_WAIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipm_cadence_resolver::{DayOfWeek, FixedClock, Schedule, ScheduleEntry, WeekStart};
    use time::macros::datetime;

    fn resolver() -> Resolver {
        Resolver::new(
            Schedule::new(vec![
                ScheduleEntry::new(DayOfWeek::Monday, "A".to_owned()),
                ScheduleEntry::new(DayOfWeek::Tuesday, "B".to_owned()),
            ]),
            WeekStart::Sunday,
        )
    }

    #[test]
    fn test_until_next_midnight() {
        assert_eq!(
            until_next_midnight(datetime!(2025-01-13 23:00 UTC)),
            Duration::from_secs(3600)
        );
        assert_eq!(
            until_next_midnight(datetime!(2025-01-13 00:00 +01:00)),
            Duration::from_secs(24 * 3600)
        );
        assert_eq!(
            until_next_midnight(datetime!(2025-01-13 23:59:59.5 UTC)),
            MIN_WAIT
        );
    }

    #[test]
    fn test_update_renders_panel() {
        let clock = FixedClock(datetime!(2025-01-13 10:00 UTC));
        let refresher = Refresher::new(resolver(), clock, "—");
        let update = refresher.update();

        assert_eq!(update.resolution.current.as_deref(), Some("A"));
        assert_eq!(update.panel.today.text, "A");
        assert_eq!(update.panel.tomorrow.text, "B");
        assert_eq!(update.resolved_at, datetime!(2025-01-13 10:00 UTC));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_publishes_until_shutdown() {
        let clock = FixedClock(datetime!(2025-01-14 22:00 UTC));
        let refresher = Refresher::new(resolver(), clock, "—");
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(refresher.run(tx, shutdown_rx));

        for _ in 0..3 {
            let update = rx.recv().await.unwrap();
            assert_eq!(update.panel.today.text, "B");
            assert!(update.panel.tomorrow.empty);
        }

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_when_receiver_dropped() {
        let clock = FixedClock(datetime!(2025-01-13 10:00 UTC));
        let refresher = Refresher::new(resolver(), clock, "—");
        let (tx, rx) = mpsc::unbounded_channel();
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        drop(rx);

        refresher.run(tx, shutdown_rx).await;
    }
}
