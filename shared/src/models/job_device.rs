//! Job ↔ Device assignment Model

use serde::{Deserialize, Serialize};

/// Packing status of one device within one job
///
/// `Pending` on assignment, `Packed` once scanned or force-completed.
/// There is no transition back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum PackStatus {
    Pending,
    Packed,
}

impl PackStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PackStatus::Pending => "pending",
            PackStatus::Packed => "packed",
        }
    }
}

impl std::fmt::Display for PackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assign payload for the direct endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDevice {
    #[serde(alias = "deviceID", alias = "device_id")]
    pub device_id: String,
}

/// One line of the packing board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct BoardItem {
    pub device_id: String,
    pub product_name: String,
    pub pack_status: PackStatus,
    pub image_url: Option<String>,
}

impl BoardItem {
    /// Label used in missing-item lists: `"<productName> (<deviceID>)"`
    pub fn missing_label(&self) -> String {
        format!("{} ({})", self.product_name, self.device_id)
    }
}
