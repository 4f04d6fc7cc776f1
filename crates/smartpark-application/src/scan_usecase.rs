//! Scan-to-park use case.
//!
//! Turns one QR scan into one navigation instruction:
//!
//! 1. parse the payload (invalid: go back, no calls)
//! 2. look up the active session (failure: go back)
//! 3. with a session, check in through scan-to-confirm and return to the
//!    screen the scan started from
//! 4. without one, ask scan-to-book whether the spot can be booked
//!
//! Each call is made at most once per scan. `ScanResolution` holds no mutable
//! state; identical inputs and identical API answers give identical results.

use smartpark_core::booking::{ApiResponse, BookingApi, ScanToBookBody, ScanToConfirmRequest};
use smartpark_core::config::ClientConfig;
use smartpark_core::error::{Result, SmartParkError};
use smartpark_core::navigation::{
    NavigationHistory, NavigationInstruction, OriginScreen, RouteRegistry,
};
use smartpark_core::scan::ScanPayload;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Resolves QR scans into navigation instructions.
pub struct ScanResolution {
    api: Arc<dyn BookingApi>,
    routes: RouteRegistry,
    book_body: ScanToBookBody,
}

impl ScanResolution {
    pub fn new(api: Arc<dyn BookingApi>, routes: RouteRegistry, book_body: ScanToBookBody) -> Self {
        Self {
            api,
            routes,
            book_body,
        }
    }

    pub fn from_config(api: Arc<dyn BookingApi>, config: &ClientConfig) -> Self {
        Self::new(api, config.routes.clone(), config.scan_to_book_body)
    }

    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    /// Resolves a scan, taking the origin screen from the navigation history.
    pub async fn resolve(&self, raw: &str, history: &NavigationHistory) -> NavigationInstruction {
        let origin = history.origin(&self.routes);
        self.resolve_from(raw, origin).await
    }

    /// Resolves a scan started from `origin`.
    pub async fn resolve_from(&self, raw: &str, origin: OriginScreen) -> NavigationInstruction {
        let span = tracing::info_span!("scan", scan_id = %Uuid::new_v4(), ?origin);
        self.resolve_inner(raw, origin).instrument(span).await
    }

    async fn resolve_inner(&self, raw: &str, origin: OriginScreen) -> NavigationInstruction {
        let payload = match ScanPayload::parse(raw) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(target: "scan", "Rejected scan: {}", e);
                return NavigationInstruction::GoBack;
            }
        };

        let has_session = match self.has_active_session().await {
            Ok(has_session) => has_session,
            Err(e) => {
                tracing::warn!(target: "scan", "{}", e);
                return NavigationInstruction::GoBack;
            }
        };

        let instruction = if has_session {
            self.check_in(&payload, origin).await
        } else {
            self.try_book(&payload).await
        };

        tracing::info!(target: "scan", target_screen = ?instruction.target(), "Scan resolved");
        instruction
    }

    async fn has_active_session(&self) -> Result<bool> {
        let response = self
            .api
            .active_session()
            .await
            .map_err(|e| SmartParkError::active_session_failed(e.to_string()))?;

        if !response.is_success() {
            return Err(SmartParkError::active_session_failed(format!(
                "status {}",
                response.status
            )));
        }
        Ok(response.has_data())
    }

    async fn check_in(&self, payload: &ScanPayload, origin: OriginScreen) -> NavigationInstruction {
        let body = ScanToConfirmRequest::from(payload);
        let response = self.api.scan_to_confirm(&body).await.unwrap_or_else(|e| {
            tracing::warn!(target: "scan", "Scan to confirm failed: {}", e);
            ApiResponse::transport_failure()
        });
        tracing::debug!(
            target: "scan",
            status = response.status,
            scan_status = ?response.scan_status(),
            "Scan to confirm answered"
        );
        confirmation_target(origin, response)
    }

    async fn try_book(&self, payload: &ScanPayload) -> NavigationInstruction {
        let body = self.book_body.build(payload);
        let response = self.api.scan_to_book(&body).await.unwrap_or_else(|e| {
            tracing::warn!(target: "scan", "Scan to book failed: {}", e);
            ApiResponse::transport_failure()
        });
        tracing::debug!(
            target: "scan",
            status = response.status,
            can_book = response.can_book(),
            "Scan to book answered"
        );
        booking_target(payload, response)
    }
}

/// Where a check-in sends the user. The response status is not consulted.
pub fn confirmation_target(origin: OriginScreen, response: ApiResponse) -> NavigationInstruction {
    match origin {
        OriginScreen::BookingDetails => NavigationInstruction::BookingDetails {
            id: response.booking_id(),
            scan_data_response: response.data,
        },
        OriginScreen::MyBookingList => NavigationInstruction::MyBookingList {
            scan_data_response: response.data,
        },
        OriginScreen::MapDashboardDrawer | OriginScreen::Unknown => {
            NavigationInstruction::MapDashboard {
                scan_data_response: response.data,
            }
        }
    }
}

/// Where a booking-eligibility answer sends the user.
pub fn booking_target(payload: &ScanPayload, response: ApiResponse) -> NavigationInstruction {
    if response.can_book() {
        NavigationInstruction::ParkingAreaDetail {
            id: payload.parking.clone(),
            spot_id: payload.id.clone(),
        }
    } else {
        NavigationInstruction::MapDashboard {
            scan_data_response: response.data,
        }
    }
}
