//! Domain layer of the SmartPark client.
//!
//! Models, traits and pure helpers shared by the infrastructure and
//! application crates. Nothing in here performs I/O.

pub mod booking;
pub mod config;
pub mod error;
pub mod navigation;
pub mod scan;
pub mod time;

// Re-export common error type
pub use error::SmartParkError;
