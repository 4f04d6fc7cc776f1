//! Application bootstrap.
//!
//! Wires configuration, logging, the HTTP client and the use cases together.

use crate::booking_details_usecase::BookingDetailsUseCase;
use crate::scan_usecase::ScanResolution;
use chrono::{DateTime, NaiveDate, Utc};
use smartpark_core::booking::BookingApi;
use smartpark_core::config::ClientConfig;
use smartpark_core::error::Result;
use smartpark_core::time::{date_format_label, time_difference};
use smartpark_infrastructure::{ConfigService, HttpBookingApi, init_tracing};
use std::sync::Arc;

pub struct SmartParkApp {
    pub config: ClientConfig,
    pub scan: ScanResolution,
    pub booking_details: BookingDetailsUseCase,
}

impl SmartParkApp {
    /// Loads the configuration, installs logging and builds an HTTP-backed app.
    pub fn bootstrap(config_service: &ConfigService, token: Option<String>) -> Result<Self> {
        let config = config_service.get_config()?;
        init_tracing(&config.log_level);

        let mut api = HttpBookingApi::from_config(&config);
        if let Some(token) = token {
            api = api.with_token(token);
        }
        tracing::info!("SmartPark client ready ({})", config.base_url);
        Ok(Self::with_api(config, Arc::new(api)))
    }

    /// Builds the use cases on top of any `BookingApi`.
    pub fn with_api(config: ClientConfig, api: Arc<dyn BookingApi>) -> Self {
        Self {
            scan: ScanResolution::from_config(api.clone(), &config),
            booking_details: BookingDetailsUseCase::from_config(api, &config),
            config,
        }
    }

    /// "n units ago" label in the configured locale.
    pub fn time_ago(&self, current: DateTime<Utc>, last_updated: DateTime<Utc>) -> String {
        time_difference(current, last_updated).format(self.config.locale)
    }

    /// Booking list section header for `date`, in the configured locale.
    pub fn section_label(&self, date: NaiveDate, today: NaiveDate) -> String {
        date_format_label(date, today).format(self.config.locale)
    }
}
