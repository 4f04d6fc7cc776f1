//! Booking API trait.
//!
//! Defines the interface for the remote booking endpoints.

use super::request::{ExtendRequest, PayFineRequest, ScanToConfirmRequest};
use super::response::ApiResponse;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// An abstract client for the booking backend.
///
/// This trait decouples the scan and booking use cases from the HTTP stack,
/// so they can be driven by a `reqwest` client in the app and by in-memory
/// fakes in tests.
///
/// # Implementation Notes
///
/// - A non-2xx answer is still `Ok(ApiResponse)` with its status code; callers
///   decide what a failed status means for them.
/// - `Err(_)` is reserved for transport failures (connection, timeout,
///   unreadable body).
/// - Implementations must not retry.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Looks up the user's running session (GET, no body).
    async fn active_session(&self) -> Result<ApiResponse>;

    /// Checks the user into their existing booking at the scanned spot.
    async fn scan_to_confirm(&self, body: &ScanToConfirmRequest) -> Result<ApiResponse>;

    /// Asks whether a new booking can start at the scanned spot.
    ///
    /// The response carries `can_book`.
    async fn scan_to_book(&self, body: &Value) -> Result<ApiResponse>;

    /// Fetches one booking.
    async fn booking_detail(&self, booking_id: i64) -> Result<ApiResponse>;

    /// Cancels a booking that has not been checked in.
    async fn cancel_booking(&self, booking_id: i64) -> Result<ApiResponse>;

    /// Pays the fine of a violated booking.
    async fn pay_fine(&self, booking_id: i64, body: &PayFineRequest) -> Result<ApiResponse>;

    /// Extends a running booking.
    async fn extend_booking(&self, booking_id: i64, body: &ExtendRequest) -> Result<ApiResponse>;
}
