//! Clock-style durations for countdown and count-up displays.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Renders `HH : mm : ss`. Hours are not wrapped at 24.
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!(
        "{:02} : {:02} : {:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Time left until `deadline`, zero once it has passed.
pub fn remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (deadline - now).to_std().unwrap_or(Duration::ZERO)
}

/// Elapsed-time counter shown while a car is parked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountUp {
    started_at: Option<DateTime<Utc>>,
}

impl CountUp {
    /// A counter that has not started yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at: Some(started_at),
        }
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        self.started_at
            .and_then(|start| (now - start).to_std().ok())
            .unwrap_or(Duration::ZERO)
    }

    pub fn display(&self, now: DateTime<Utc>) -> String {
        format_clock(self.elapsed(now))
    }
}
