//! Scan domain module.
//!
//! Holds the boundary type for QR codes read by the camera. Parsing happens
//! once, here; the rest of the client works with the typed payload.

mod payload;

pub use payload::{Identifier, ScanPayload};
