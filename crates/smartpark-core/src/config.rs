//! Client configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every section has
//! defaults so an empty file is a valid configuration.

use crate::booking::ScanToBookBody;
use crate::navigation::RouteRegistry;
use crate::time::Locale;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.smartpark.vn";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Root of `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// `tracing` filter directive, e.g. `info` or `smartpark_application=debug`.
    pub log_level: String,
    pub locale: Locale,
    /// Poll interval of a booking whose countdown is running.
    pub refresh_interval_secs: u64,
    pub scan_to_book_body: ScanToBookBody,
    pub endpoints: Endpoints,
    pub routes: RouteRegistry,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: "info".to_string(),
            locale: Locale::default(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            scan_to_book_body: ScanToBookBody::default(),
            endpoints: Endpoints::default(),
            routes: RouteRegistry::default(),
        }
    }
}

/// Booking endpoint paths relative to `base_url`. `{id}` is replaced by the booking id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub active_session: String,
    pub scan_to_confirm: String,
    pub scan_to_book: String,
    pub booking_detail: String,
    pub cancel: String,
    pub pay_fine: String,
    pub extend: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            active_session: "/smart_parking/bookings/active_session/".to_string(),
            scan_to_confirm: "/smart_parking/bookings/scan_to_confirm/".to_string(),
            scan_to_book: "/smart_parking/bookings/scan_to_book/".to_string(),
            booking_detail: "/smart_parking/bookings/{id}/".to_string(),
            cancel: "/smart_parking/bookings/{id}/cancel/".to_string(),
            pay_fine: "/smart_parking/bookings/{id}/pay_fine/".to_string(),
            extend: "/smart_parking/bookings/{id}/extend/".to_string(),
        }
    }
}

impl Endpoints {
    /// Fills the `{id}` placeholder of a per-booking path.
    pub fn with_id(path: &str, id: i64) -> String {
        path.replace("{id}", &id.to_string())
    }
}
