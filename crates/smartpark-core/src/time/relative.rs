//! "n units ago" strings for last-updated labels.

use super::Locale;
use chrono::{DateTime, Utc};
use std::fmt;

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = MS_PER_SECOND * 60.0;
const MS_PER_HOUR: f64 = MS_PER_MINUTE * 60.0;
const MS_PER_DAY: f64 = MS_PER_HOUR * 24.0;
const MS_PER_MONTH: f64 = MS_PER_DAY * 30.0;
const MS_PER_YEAR: f64 = MS_PER_DAY * 365.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeUnit {
    /// Translation key of the "... ago" suffix.
    pub fn key(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds_ago",
            TimeUnit::Minutes => "minutes_ago",
            TimeUnit::Hours => "hours_ago",
            TimeUnit::Days => "days_ago",
            TimeUnit::Months => "months_ago",
            TimeUnit::Years => "years_ago",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Vi, TimeUnit::Seconds) => "giây trước",
            (Locale::Vi, TimeUnit::Minutes) => "phút trước",
            (Locale::Vi, TimeUnit::Hours) => "giờ trước",
            (Locale::Vi, TimeUnit::Days) => "ngày trước",
            (Locale::Vi, TimeUnit::Months) => "tháng trước",
            (Locale::Vi, TimeUnit::Years) => "năm trước",
            (Locale::En, TimeUnit::Seconds) => "seconds ago",
            (Locale::En, TimeUnit::Minutes) => "minutes ago",
            (Locale::En, TimeUnit::Hours) => "hours ago",
            (Locale::En, TimeUnit::Days) => "days ago",
            (Locale::En, TimeUnit::Months) => "months ago",
            (Locale::En, TimeUnit::Years) => "years ago",
        }
    }
}

/// Elapsed time expressed in its largest fitting unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub amount: i64,
    pub unit: TimeUnit,
}

impl RelativeTime {
    pub fn format(&self, locale: Locale) -> String {
        format!("{} {}", self.amount, self.unit.label(locale))
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit.key())
    }
}

/// How long ago `last_updated` was, seen from `current`.
///
/// Months count as 30 days and years as 365 days. Timestamps in the future
/// read as "0 seconds ago".
pub fn time_difference(current: DateTime<Utc>, last_updated: DateTime<Utc>) -> RelativeTime {
    let elapsed = (current - last_updated).num_milliseconds().max(0) as f64;

    let (divisor, unit) = if elapsed < MS_PER_MINUTE {
        (MS_PER_SECOND, TimeUnit::Seconds)
    } else if elapsed < MS_PER_HOUR {
        (MS_PER_MINUTE, TimeUnit::Minutes)
    } else if elapsed < MS_PER_DAY {
        (MS_PER_HOUR, TimeUnit::Hours)
    } else if elapsed < MS_PER_MONTH {
        (MS_PER_DAY, TimeUnit::Days)
    } else if elapsed < MS_PER_YEAR {
        (MS_PER_MONTH, TimeUnit::Months)
    } else {
        (MS_PER_YEAR, TimeUnit::Years)
    };

    RelativeTime {
        amount: (elapsed / divisor).round() as i64,
        unit,
    }
}
