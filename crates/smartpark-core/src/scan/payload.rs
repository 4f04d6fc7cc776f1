//! Scanned QR payload.

use crate::error::{Result, SmartParkError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier as the backend emits it: QR codes carry either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

/// The content of a parking-spot QR code.
///
/// Produced once at the boundary by [`ScanPayload::parse`]; at least one of the
/// two fields is always present on a successfully parsed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPayload {
    /// Parking area the spot belongs to.
    #[serde(default)]
    pub parking: Option<Identifier>,
    /// Spot identifier.
    #[serde(default)]
    pub id: Option<Identifier>,
}

impl ScanPayload {
    /// Parses raw scanner text.
    ///
    /// # Errors
    ///
    /// Returns `SmartParkError::InvalidPayload` when the text is not a JSON
    /// object, when a field has an unsupported type, or when both `parking`
    /// and `id` are missing or `null`.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| SmartParkError::invalid_payload(format!("not JSON: {}", e)))?;

        if !value.is_object() {
            return Err(SmartParkError::invalid_payload("payload is not a JSON object"));
        }

        let payload: ScanPayload = serde_json::from_value(value)
            .map_err(|e| SmartParkError::invalid_payload(e.to_string()))?;

        if payload.parking.is_none() && payload.id.is_none() {
            return Err(SmartParkError::invalid_payload(
                "both parking and id are missing",
            ));
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_fields() {
        let payload = ScanPayload::parse(r#"{"parking": 1, "id": 2}"#).unwrap();
        assert_eq!(payload.parking, Some(Identifier::Number(1)));
        assert_eq!(payload.id, Some(Identifier::Number(2)));
    }

    #[test]
    fn test_parse_string_fields() {
        let payload = ScanPayload::parse(r#"{"parking": "p-9", "id": "A1"}"#).unwrap();
        assert_eq!(payload.parking, Some(Identifier::from("p-9")));
        assert_eq!(payload.id.unwrap().to_string(), "A1");
    }

    #[test]
    fn test_parse_only_spot() {
        let payload = ScanPayload::parse(r#"{"id": 7}"#).unwrap();
        assert!(payload.parking.is_none());
        assert_eq!(payload.id, Some(Identifier::Number(7)));
    }

    #[test]
    fn test_not_json_is_invalid() {
        let err = ScanPayload::parse("abc").unwrap_err();
        assert!(err.is_invalid_payload());
    }

    #[test]
    fn test_empty_object_is_invalid() {
        // Both fields unset arrive as an empty object
        assert!(ScanPayload::parse("{}").unwrap_err().is_invalid_payload());
        assert!(
            ScanPayload::parse(r#"{"parking": null, "id": null}"#)
                .unwrap_err()
                .is_invalid_payload()
        );
    }

    #[test]
    fn test_non_object_json_is_invalid() {
        assert!(ScanPayload::parse("42").unwrap_err().is_invalid_payload());
        assert!(ScanPayload::parse("[1, 2]").unwrap_err().is_invalid_payload());
    }

    #[test]
    fn test_unsupported_field_type_is_invalid() {
        let err = ScanPayload::parse(r#"{"parking": {"x": 1}, "id": 2}"#).unwrap_err();
        assert!(err.is_invalid_payload());
    }
}
