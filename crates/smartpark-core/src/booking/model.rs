//! Booking domain model.

use crate::time::format_clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// Lifecycle status of a booking as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    OnGoing,
    Completed,
    Cancelled,
    /// Any status this client does not act on.
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::OnGoing => "On going",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Other(s) => s,
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(value: &str) -> Self {
        match value {
            "On going" => BookingStatus::OnGoing,
            "Completed" => BookingStatus::Completed,
            "Cancelled" => BookingStatus::Cancelled,
            other => BookingStatus::Other(other.to_string()),
        }
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Other(String::new())
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BookingStatus::from(raw.as_str()))
    }
}

/// The main call to action shown at the bottom of the booking details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    /// The booking was flagged for overstaying and the fine is unpaid.
    PayFine,
    /// Paid but not checked in yet: the user has to scan the spot QR.
    ScanQr,
    /// Checked in and running.
    Extend,
    /// Finished or cancelled: offer to book the same place again.
    Rebook,
}

/// A booking as returned by the booking detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetail {
    pub id: i64,
    #[serde(default)]
    pub billing_id: Option<i64>,
    #[serde(default)]
    pub status: BookingStatus,

    #[serde(default)]
    pub parking_id: Option<i64>,
    #[serde(default)]
    pub parking_area: String,
    #[serde(default)]
    pub parking_address: String,
    #[serde(default)]
    pub parking_lat: Option<f64>,
    #[serde(default)]
    pub parking_lng: Option<f64>,
    #[serde(default)]
    pub spot_name: String,
    #[serde(default)]
    pub plate_number: String,

    #[serde(default)]
    pub book_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub arrive_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub leave_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pay_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pay_before: Option<DateTime<Utc>>,
    #[serde(default)]
    pub confirmed_arrival_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub extend_at: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub num_of_hour_parking: u32,

    // Amounts are decimal strings ("15000.00"); the client only displays them.
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub service_fee: String,
    #[serde(default)]
    pub discount: String,
    #[serde(default)]
    pub extend_fee: String,
    #[serde(default)]
    pub grand_total: String,

    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_method_code: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_violated: bool,

    /// Set while the parking time is running down; the screen polls while true.
    #[serde(default)]
    pub start_countdown: bool,
    /// Seconds left on the booking.
    #[serde(default)]
    pub time_remaining: i64,
}

impl BookingDetail {
    pub fn has_arrived(&self) -> bool {
        self.confirmed_arrival_at.is_some()
    }

    pub fn primary_action(&self) -> Option<BookingAction> {
        if self.is_violated && !self.is_paid {
            return Some(BookingAction::PayFine);
        }
        match self.status {
            BookingStatus::OnGoing if self.is_paid && !self.has_arrived() => {
                Some(BookingAction::ScanQr)
            }
            BookingStatus::OnGoing => Some(BookingAction::Extend),
            BookingStatus::Completed | BookingStatus::Cancelled => Some(BookingAction::Rebook),
            BookingStatus::Other(_) => None,
        }
    }

    /// A booking can be cancelled until the driver has checked in.
    pub fn can_cancel(&self) -> bool {
        self.status == BookingStatus::OnGoing && !self.has_arrived()
    }

    pub fn needs_refresh(&self) -> bool {
        self.start_countdown
    }

    pub fn remaining_clock(&self) -> String {
        format_clock(Duration::from_secs(self.time_remaining.max(0) as u64))
    }
}

/// Where an active session stands, as shown in the dashboard list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    AwaitingPayment,
    AwaitingArrival,
    Parked,
}

/// Parking summary embedded in an active session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionParking {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// A booking that is currently running for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSession {
    pub id: i64,
    #[serde(default)]
    pub billing_id: Option<i64>,
    #[serde(default)]
    pub parking: Option<SessionParking>,
    #[serde(default)]
    pub spot: Option<i64>,
    #[serde(default)]
    pub spot_name: String,
    #[serde(default)]
    pub arrive_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub leave_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub confirmed_arrival_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub grand_total: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub start_countdown: bool,
    #[serde(default)]
    pub time_remaining: i64,
}

impl ActiveSession {
    pub fn stage(&self) -> SessionStage {
        match (self.is_paid, self.confirmed_arrival_at.is_some()) {
            (false, _) => SessionStage::AwaitingPayment,
            (true, false) => SessionStage::AwaitingArrival,
            (true, true) => SessionStage::Parked,
        }
    }

    pub fn remaining_clock(&self) -> String {
        format_clock(Duration::from_secs(self.time_remaining.max(0) as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(overrides: serde_json::Value) -> BookingDetail {
        let mut base = json!({
            "id": 1,
            "billing_id": 1368,
            "status": "On going",
            "parking_id": 3,
            "parking_area": "Thảo cầm viên parking street",
            "spot_name": "4444444444",
            "arrive_at": "2021-01-20T05:00:00.629Z",
            "leave_at": "2021-01-20T05:00:00.629Z",
            "confirmed_arrival_at": "2021-02-02T10:23:11Z",
            "extend_at": ["2021-01-20T05:29:00.629Z"],
            "grand_total": "30000.00",
            "is_paid": true,
            "start_countdown": true,
            "time_remaining": 4492
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn test_deserialize_detail() {
        let booking = detail(json!({}));
        assert_eq!(booking.status, BookingStatus::OnGoing);
        assert_eq!(booking.extend_at.len(), 1);
        assert!(booking.has_arrived());
        assert_eq!(booking.remaining_clock(), "01 : 14 : 52");
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let booking = detail(json!({"status": "----"}));
        assert_eq!(booking.status, BookingStatus::Other("----".to_string()));
        assert_eq!(booking.primary_action(), None);
    }

    #[test]
    fn test_waiting_for_arrival_asks_for_scan() {
        let booking = detail(json!({"confirmed_arrival_at": null}));
        assert_eq!(booking.primary_action(), Some(BookingAction::ScanQr));
        assert!(booking.can_cancel());
    }

    #[test]
    fn test_violated_unpaid_asks_for_fine() {
        let booking = detail(json!({"is_violated": true, "is_paid": false}));
        assert_eq!(booking.primary_action(), Some(BookingAction::PayFine));
    }

    #[test]
    fn test_arrived_booking_can_extend() {
        let booking = detail(json!({}));
        assert_eq!(booking.primary_action(), Some(BookingAction::Extend));
        assert!(!booking.can_cancel());
    }

    #[test]
    fn test_finished_bookings_offer_rebook() {
        assert_eq!(
            detail(json!({"status": "Completed"})).primary_action(),
            Some(BookingAction::Rebook)
        );
        assert_eq!(
            detail(json!({"status": "Cancelled"})).primary_action(),
            Some(BookingAction::Rebook)
        );
    }

    #[test]
    fn test_refresh_follows_countdown() {
        assert!(detail(json!({})).needs_refresh());
        assert!(!detail(json!({"start_countdown": false})).needs_refresh());
    }

    #[test]
    fn test_active_session_stages() {
        let mut session: ActiveSession = serde_json::from_value(json!({
            "id": 1020,
            "billing_id": 1127,
            "parking": {"id": 9, "name": "Trường Đại học Giao thông Vận tải TP.HCM"},
            "spot": 11,
            "spot_name": "A1",
            "confirmed_arrival_at": null,
            "grand_total": "1200.00",
            "is_paid": false,
            "time_remaining": 3600
        }))
        .unwrap();
        assert_eq!(session.stage(), SessionStage::AwaitingPayment);
        assert_eq!(session.remaining_clock(), "01 : 00 : 00");

        session.is_paid = true;
        assert_eq!(session.stage(), SessionStage::AwaitingArrival);

        session.confirmed_arrival_at = Some("2021-01-26T07:00:00.025Z".parse().unwrap());
        assert_eq!(session.stage(), SessionStage::Parked);
    }
}
