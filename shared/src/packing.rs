//! Packing workflow request/response types
//!
//! Used by scanner clients (mobile PWA, handheld browsers) talking to the
//! `/jobs/{id}/scanboard`, `/jobs/{id}/scan` and `/jobs/{id}/finish` routes.

use serde::{Deserialize, Serialize};

use crate::models::BoardItem;

/// Scan request: either a direct device id or a scanned barcode payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    #[serde(default, alias = "deviceID", alias = "device_id")]
    pub device_id: Option<String>,
    #[serde(default, alias = "barcode_payload")]
    pub barcode_payload: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub success: bool,
    /// Resolved device id
    pub device_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinishPackRequest {
    #[serde(default)]
    pub force: bool,
}

/// Result of a finish attempt
///
/// `success = false` with a non-empty `missing_items` is the confirmation
/// step; the client re-submits with `force = true` to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishPackResponse {
    pub success: bool,
    #[serde(default)]
    pub missing_items: Vec<String>,
    pub message: String,
}

/// Packing board for one job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanBoard {
    pub job_id: i64,
    pub description: Option<String>,
    pub devices: Vec<BoardItem>,
}
