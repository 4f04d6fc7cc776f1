//! Booking details use case.
//!
//! Loads a booking, keeps it fresh while its countdown runs, and performs the
//! actions offered on the details screen (cancel, pay a fine, extend).

use serde_json::Value;
use smartpark_core::booking::{
    ApiResponse, BookingApi, BookingDetail, ExtendRequest, PayFineRequest,
};
use smartpark_core::config::ClientConfig;
use smartpark_core::error::{Result, SmartParkError};
use smartpark_core::navigation::{NavigationHistory, NavigationInstruction, RouteRegistry, Screen};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub struct BookingDetailsUseCase {
    api: Arc<dyn BookingApi>,
    routes: RouteRegistry,
    refresh_interval: Duration,
}

impl BookingDetailsUseCase {
    pub fn new(
        api: Arc<dyn BookingApi>,
        routes: RouteRegistry,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            api,
            routes,
            refresh_interval,
        }
    }

    pub fn from_config(api: Arc<dyn BookingApi>, config: &ClientConfig) -> Self {
        Self::new(
            api,
            config.routes.clone(),
            Duration::from_secs(config.refresh_interval_secs),
        )
    }

    /// Fetches a booking.
    ///
    /// # Errors
    ///
    /// - `Transport` when the backend could not be reached
    /// - `Api` on a non-2xx status
    /// - `Serialization` when the body is not a booking
    pub async fn load(&self, booking_id: i64) -> Result<BookingDetail> {
        let response = self.api.booking_detail(booking_id).await?;
        let response = ensure_success("booking_detail", response)?;
        Ok(serde_json::from_value(response.data)?)
    }

    /// Delay before the next reload, `None` once the countdown has stopped.
    pub fn refresh_interval(&self, detail: &BookingDetail) -> Option<Duration> {
        detail.needs_refresh().then_some(self.refresh_interval)
    }

    /// Streams fresh copies of a booking into `updates` until its countdown
    /// stops or the receiver goes away.
    pub async fn watch(&self, booking_id: i64, updates: mpsc::Sender<BookingDetail>) -> Result<()> {
        loop {
            let detail = self.load(booking_id).await?;
            let next = self.refresh_interval(&detail);

            if updates.send(detail).await.is_err() {
                tracing::debug!(target: "booking", booking_id, "Watcher dropped, stop refreshing");
                return Ok(());
            }

            match next {
                Some(delay) => tokio::time::sleep(delay).await,
                None => return Ok(()),
            }
        }
    }

    pub async fn cancel(&self, booking_id: i64) -> Result<()> {
        let response = self.api.cancel_booking(booking_id).await?;
        ensure_success("cancel", response)?;
        tracing::info!(target: "booking", booking_id, "Booking cancelled");
        Ok(())
    }

    /// Pays the fine of a violated booking with a saved card.
    pub async fn pay_fine(&self, booking_id: i64, card_id: &str) -> Result<Value> {
        let response = self
            .api
            .pay_fine(booking_id, &PayFineRequest::card(card_id))
            .await?;
        Ok(ensure_success("pay_fine", response)?.data)
    }

    pub async fn extend(&self, booking_id: i64, hours: u32) -> Result<Value> {
        if hours == 0 {
            return Err(SmartParkError::internal("extension must be at least one hour"));
        }
        let response = self
            .api
            .extend_booking(booking_id, &ExtendRequest { hours })
            .await?;
        Ok(ensure_success("extend", response)?.data)
    }

    /// Back button: a booking just made leaves the whole booking flow and
    /// returns to the dashboard, anything else pops one screen.
    pub fn back_target(&self, history: &NavigationHistory) -> NavigationInstruction {
        if history.contains(&self.routes, Screen::BookingSuccess) {
            NavigationInstruction::MapDashboard {
                scan_data_response: Value::Null,
            }
        } else {
            NavigationInstruction::GoBack
        }
    }

    /// Opens the card picker, which returns to the details screen with `route_data`.
    pub fn select_payment_method(&self, route_data: Value) -> NavigationInstruction {
        NavigationInstruction::SelectPaymentMethod {
            route_name: Screen::BookingDetails,
            route_data,
        }
    }
}

fn ensure_success(endpoint: &str, response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(SmartParkError::api(endpoint, response.status))
    }
}
