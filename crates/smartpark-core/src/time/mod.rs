//! Date and time formatting used by the booking screens.
//!
//! # Module Structure
//!
//! - `relative`: "n units ago" (`time_difference`)
//! - `calendar`: list section labels, format conversion, timestamp fields
//! - `clock`: `HH : mm : ss` countdown and count-up displays

mod calendar;
mod clock;
mod relative;

use serde::{Deserialize, Serialize};

pub use calendar::{DateLabel, DateTimeField, calc_time, date_format_label, parse_datetime_fields};
pub use clock::{CountUp, format_clock, remaining};
pub use relative::{RelativeTime, TimeUnit, time_difference};

/// Display language for user-facing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Vi,
    En,
}
