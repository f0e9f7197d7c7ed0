//! Device and Case Models

use serde::{Deserialize, Serialize};

/// Physical, individually identified unit of equipment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Device {
    pub id: String,
    pub product_id: Option<i64>,
    pub serial_number: Option<String>,
    /// Free text, e.g. "available", "rented", "defect"
    pub status: String,
}

/// Transport case holding several devices
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Case {
    pub id: i64,
    pub name: String,
    pub status: String,
}

/// Status update payload (device or case)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}
