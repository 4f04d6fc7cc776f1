#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use smartpark_core::booking::{
    ApiResponse, BookingApi, ExtendRequest, PayFineRequest, ScanToConfirmRequest,
};
use smartpark_core::error::{Result, SmartParkError};
use std::sync::Mutex;

/// A call received by the mock, with its body.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ActiveSession,
    ScanToConfirm(Value),
    ScanToBook(Value),
    BookingDetail(i64),
    CancelBooking(i64),
    PayFine(i64, Value),
    ExtendBooking(i64, Value),
}

/// In-memory `BookingApi` answering with canned responses and recording calls.
pub struct MockBookingApi {
    active_session: Result<ApiResponse>,
    scan_to_confirm: Result<ApiResponse>,
    scan_to_book: Result<ApiResponse>,
    booking_detail: Result<ApiResponse>,
    action: Result<ApiResponse>,
    calls: Mutex<Vec<Call>>,
}

impl MockBookingApi {
    pub fn new() -> Self {
        let ok = || Ok(ApiResponse::new(200, Value::Null));
        Self {
            active_session: ok(),
            scan_to_confirm: ok(),
            scan_to_book: ok(),
            booking_detail: ok(),
            action: ok(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_active_session(mut self, response: ApiResponse) -> Self {
        self.active_session = Ok(response);
        self
    }

    pub fn with_active_session_error(mut self) -> Self {
        self.active_session = Err(SmartParkError::transport("active_session", "timed out"));
        self
    }

    pub fn with_scan_to_confirm(mut self, response: ApiResponse) -> Self {
        self.scan_to_confirm = Ok(response);
        self
    }

    pub fn with_scan_to_confirm_error(mut self) -> Self {
        self.scan_to_confirm = Err(SmartParkError::transport("scan_to_confirm", "timed out"));
        self
    }

    pub fn with_scan_to_book(mut self, response: ApiResponse) -> Self {
        self.scan_to_book = Ok(response);
        self
    }

    pub fn with_booking_detail(mut self, response: ApiResponse) -> Self {
        self.booking_detail = Ok(response);
        self
    }

    pub fn with_action(mut self, response: ApiResponse) -> Self {
        self.action = Ok(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BookingApi for MockBookingApi {
    async fn active_session(&self) -> Result<ApiResponse> {
        self.record(Call::ActiveSession);
        self.active_session.clone()
    }

    async fn scan_to_confirm(&self, body: &ScanToConfirmRequest) -> Result<ApiResponse> {
        self.record(Call::ScanToConfirm(serde_json::to_value(body)?));
        self.scan_to_confirm.clone()
    }

    async fn scan_to_book(&self, body: &Value) -> Result<ApiResponse> {
        self.record(Call::ScanToBook(body.clone()));
        self.scan_to_book.clone()
    }

    async fn booking_detail(&self, booking_id: i64) -> Result<ApiResponse> {
        self.record(Call::BookingDetail(booking_id));
        self.booking_detail.clone()
    }

    async fn cancel_booking(&self, booking_id: i64) -> Result<ApiResponse> {
        self.record(Call::CancelBooking(booking_id));
        self.action.clone()
    }

    async fn pay_fine(&self, booking_id: i64, body: &PayFineRequest) -> Result<ApiResponse> {
        self.record(Call::PayFine(booking_id, serde_json::to_value(body)?));
        self.action.clone()
    }

    async fn extend_booking(&self, booking_id: i64, body: &ExtendRequest) -> Result<ApiResponse> {
        self.record(Call::ExtendBooking(booking_id, serde_json::to_value(body)?));
        self.action.clone()
    }
}
