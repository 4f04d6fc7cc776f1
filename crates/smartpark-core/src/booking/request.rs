//! Request bodies sent to the booking API.

use crate::scan::{Identifier, ScanPayload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Body of the scan-to-confirm call (check-in into an existing booking).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanToConfirmRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_id: Option<Identifier>,
}

impl From<&ScanPayload> for ScanToConfirmRequest {
    fn from(payload: &ScanPayload) -> Self {
        Self {
            spot_id: payload.id.clone(),
        }
    }
}

/// Shape of the scan-to-book body.
///
/// The endpoint has shipped with different expectations, so the shape is
/// chosen through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanToBookBody {
    /// `{}`
    Empty,
    /// `{"spot_id": ...}`
    #[default]
    SpotId,
    /// `{"parking_id": ..., "spot_id": ...}`
    ParkingAndSpot,
}

impl ScanToBookBody {
    pub fn build(self, payload: &ScanPayload) -> Value {
        let mut body = Map::new();
        let mut insert = |key: &str, id: &Option<Identifier>| {
            if let Some(id) = id {
                body.insert(key.into(), json!(id));
            }
        };
        match self {
            ScanToBookBody::Empty => {}
            ScanToBookBody::SpotId => insert("spot_id", &payload.id),
            ScanToBookBody::ParkingAndSpot => {
                insert("parking_id", &payload.parking);
                insert("spot_id", &payload.id);
            }
        }
        Value::Object(body)
    }
}

/// Body of the pay-fine call for a violated booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayFineRequest {
    pub payment_method: String,
    pub payment_card_id: String,
}

impl PayFineRequest {
    /// Fines are always charged to a saved card.
    pub fn card(card_id: impl Into<String>) -> Self {
        Self {
            payment_method: "stripe".to_string(),
            payment_card_id: card_id.into(),
        }
    }
}

/// Body of the extend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendRequest {
    pub hours: u32,
}
