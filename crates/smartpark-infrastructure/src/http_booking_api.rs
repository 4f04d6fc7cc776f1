//! HttpBookingApi - `reqwest` implementation of the booking API.
//!
//! Talks JSON to the SmartPark backend. Every call is sent exactly once; a
//! non-2xx answer is returned as a regular `ApiResponse` and only failures to
//! get an answer at all surface as `SmartParkError::Transport`.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use smartpark_core::booking::{
    ApiResponse, BookingApi, ExtendRequest, PayFineRequest, ScanToConfirmRequest,
};
use smartpark_core::config::{ClientConfig, Endpoints};
use smartpark_core::error::{Result, SmartParkError};
use std::time::Duration;

/// Booking API client backed by `reqwest`.
#[derive(Clone)]
pub struct HttpBookingApi {
    client: Client,
    base_url: String,
    endpoints: Endpoints,
    timeout: Duration,
    token: Option<String>,
}

impl HttpBookingApi {
    pub fn new(base_url: impl Into<String>, endpoints: Endpoints, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            endpoints,
            timeout,
            token: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.endpoints.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Sets the bearer token issued to the signed-in user.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, self.url(path))
            .timeout(self.timeout);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        request
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request
            .send()
            .await
            .map_err(|e| SmartParkError::transport(path, e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SmartParkError::transport(path, format!("Failed to read body: {}", e)))?;

        let data = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => value,
                Err(e) if status.is_success() => {
                    return Err(SmartParkError::transport(
                        path,
                        format!("Failed to parse response: {}", e),
                    ));
                }
                // Error pages are often HTML; keep the status and drop the body
                Err(_) => Value::Null,
            }
        };

        let can_book = data
            .get("can_book")
            .or_else(|| data.get("canBook"))
            .and_then(Value::as_bool);

        tracing::debug!(target: "booking", path, status = status.as_u16(), "booking API answered");

        Ok(ApiResponse {
            status: status.as_u16(),
            data,
            can_book,
        })
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn active_session(&self) -> Result<ApiResponse> {
        let path = &self.endpoints.active_session;
        self.send(path, self.request(Method::GET, path)).await
    }

    async fn scan_to_confirm(&self, body: &ScanToConfirmRequest) -> Result<ApiResponse> {
        let path = &self.endpoints.scan_to_confirm;
        self.send(path, self.request(Method::POST, path).json(body))
            .await
    }

    async fn scan_to_book(&self, body: &Value) -> Result<ApiResponse> {
        let path = &self.endpoints.scan_to_book;
        self.send(path, self.request(Method::POST, path).json(body))
            .await
    }

    async fn booking_detail(&self, booking_id: i64) -> Result<ApiResponse> {
        let path = Endpoints::with_id(&self.endpoints.booking_detail, booking_id);
        self.send(&path, self.request(Method::GET, &path)).await
    }

    async fn cancel_booking(&self, booking_id: i64) -> Result<ApiResponse> {
        let path = Endpoints::with_id(&self.endpoints.cancel, booking_id);
        self.send(&path, self.request(Method::POST, &path)).await
    }

    async fn pay_fine(&self, booking_id: i64, body: &PayFineRequest) -> Result<ApiResponse> {
        let path = Endpoints::with_id(&self.endpoints.pay_fine, booking_id);
        self.send(&path, self.request(Method::POST, &path).json(body))
            .await
    }

    async fn extend_booking(&self, booking_id: i64, body: &ExtendRequest) -> Result<ApiResponse> {
        let path = Endpoints::with_id(&self.endpoints.extend, booking_id);
        self.send(&path, self.request(Method::POST, &path).json(body))
            .await
    }
}
