//! Application layer for SmartPark.
//!
//! This crate provides use case implementations that coordinate the domain
//! model with the booking API.

pub mod app;
pub mod booking_details_usecase;
pub mod scan_usecase;

pub use app::SmartParkApp;
pub use booking_details_usecase::BookingDetailsUseCase;
pub use scan_usecase::ScanResolution;
