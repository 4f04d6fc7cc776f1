//! Response shapes returned by the booking API.

use crate::scan::Identifier;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A booking API response as the client sees it.
///
/// `data` is kept as raw JSON because the scan screens forward it untouched
/// to the next screen as `scanDataResponse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// HTTP status code, `0` when the request never got an answer.
    pub status: u16,
    #[serde(default)]
    pub data: Value,
    /// Booking eligibility flag, only returned by the scan-to-book endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_book: Option<bool>,
}

impl ApiResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self {
            status,
            data,
            can_book: None,
        }
    }

    /// The shape used when a call failed before any response arrived.
    pub fn transport_failure() -> Self {
        Self::new(0, Value::Null)
    }

    pub fn with_can_book(mut self, can_book: bool) -> Self {
        self.can_book = Some(can_book);
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether `data` carries something, using JavaScript truthiness.
    ///
    /// The active-session endpoint answers an empty body when there is no
    /// session; an empty object still counts as a session record.
    pub fn has_data(&self) -> bool {
        match &self.data {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn can_book(&self) -> bool {
        self.can_book.unwrap_or(false)
    }

    /// `data.status` of a scan confirmation.
    pub fn scan_status(&self) -> Option<ScanStatus> {
        self.data
            .get("status")
            .and_then(Value::as_str)
            .map(ScanStatus::from)
    }

    /// `data.booking.id` of a scan confirmation.
    pub fn booking_id(&self) -> Option<Identifier> {
        self.data
            .get("booking")
            .and_then(|booking| booking.get("id"))
            .and_then(|id| serde_json::from_value(id.clone()).ok())
    }
}

/// Outcome reported by the scan endpoints in `data.status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    /// The existing booking was checked in.
    BookingActivated,
    /// The user is standing at a different parking than the one booked.
    ParkingNearest,
    Other(String),
}

impl From<&str> for ScanStatus {
    fn from(value: &str) -> Self {
        match value {
            "booking_activated" => ScanStatus::BookingActivated,
            "parking_nearest" => ScanStatus::ParkingNearest,
            other => ScanStatus::Other(other.to_string()),
        }
    }
}
