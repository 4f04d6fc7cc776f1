//! Booking domain module.
//!
//! # Module Structure
//!
//! - `model`: bookings and active sessions (`BookingDetail`, `ActiveSession`)
//! - `request`: request bodies (`ScanToConfirmRequest`, `ScanToBookBody`, ...)
//! - `response`: response envelope (`ApiResponse`, `ScanStatus`)
//! - `repository`: the `BookingApi` trait implemented by the HTTP client
//!
//! # Usage
//!
//! ```ignore
//! use smartpark_core::booking::{BookingApi, ApiResponse, BookingDetail};
//! ```

mod model;
pub mod repository;
mod request;
mod response;

// Re-export public API
pub use model::{
    ActiveSession, BookingAction, BookingDetail, BookingStatus, SessionParking, SessionStage,
};
pub use repository::BookingApi;
pub use request::{ExtendRequest, PayFineRequest, ScanToBookBody, ScanToConfirmRequest};
pub use response::{ApiResponse, ScanStatus};
