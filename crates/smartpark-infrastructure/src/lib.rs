//! Infrastructure layer for SmartPark: HTTP client, configuration file and
//! logging setup.

pub mod config_service;
pub mod http_booking_api;
pub mod logging;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::http_booking_api::HttpBookingApi;
pub use crate::logging::init_tracing;
pub use crate::paths::SmartParkPaths;
