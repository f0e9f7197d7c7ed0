//! Device Event Model (append-only audit trail)

use serde::{Deserialize, Serialize};

/// Event types written by the packing workflow and the assignment service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceEventType {
    Scanned,
    PackCompleted,
    Assigned,
}

impl DeviceEventType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeviceEventType::Scanned => "scanned",
            DeviceEventType::PackCompleted => "pack_completed",
            DeviceEventType::Assigned => "assigned",
        }
    }
}

/// Stored event row
///
/// `event_type` stays free text so rows written by other tools remain readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DeviceEvent {
    pub id: i64,
    pub job_id: i64,
    /// Empty for job-level events
    pub device_id: String,
    pub event_type: String,
    pub actor: Option<String>,
    pub created_at: i64,
}

/// New event to append
#[derive(Debug, Clone)]
pub struct NewDeviceEvent {
    pub job_id: i64,
    pub device_id: String,
    pub event_type: DeviceEventType,
    pub actor: Option<String>,
}

impl NewDeviceEvent {
    pub fn device(
        job_id: i64,
        device_id: impl Into<String>,
        event_type: DeviceEventType,
        actor: Option<String>,
    ) -> Self {
        Self {
            job_id,
            device_id: device_id.into(),
            event_type,
            actor,
        }
    }

    /// Job-level event (empty device id)
    pub fn job(job_id: i64, event_type: DeviceEventType, actor: Option<String>) -> Self {
        Self::device(job_id, String::new(), event_type, actor)
    }
}
