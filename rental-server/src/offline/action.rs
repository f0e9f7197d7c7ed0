//! Offline action decoding
//!
//! The wire envelope carries the action as a string and the payload as raw
//! JSON. Each action is decoded once into a [`ReplayAction`]; anything that
//! is not a known action type becomes [`ReplayAction::Deferred`].

use serde::Deserialize;
use shared::models::JobCreate;
use shared::sync::OfflineSyncAction;

use crate::services::EntityTarget;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    CreateJob,
    AssignDevice,
    UpdateStatus,
    Unrecognized,
}

impl ActionKind {
    pub fn parse(action: &str) -> Self {
        match action.trim() {
            "create_job" => ActionKind::CreateJob,
            "assign_device" => ActionKind::AssignDevice,
            "update_status" => ActionKind::UpdateStatus,
            _ => ActionKind::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Device,
    Case,
}

impl EntityType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "device" => Some(EntityType::Device),
            "case" => Some(EntityType::Case),
            _ => None,
        }
    }
}

/// Integer id that clients may send as a number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Int(i64),
    Text(String),
}

impl IdValue {
    fn to_i64(&self, field: &str) -> AppResult<i64> {
        match self {
            IdValue::Int(n) => Ok(*n),
            IdValue::Text(s) => s.trim().parse().map_err(|_| {
                AppError::with_message(
                    ErrorCode::InvalidFormat,
                    format!("{field} must be an integer, got {s:?}"),
                )
            }),
        }
    }

    fn into_text(self) -> String {
        match self {
            IdValue::Int(n) => n.to_string(),
            IdValue::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateJobPayload {
    #[serde(default, alias = "customerID", alias = "customerId")]
    pub customer_id: Option<IdValue>,
    #[serde(default, alias = "statusID", alias = "statusId")]
    pub status_id: Option<IdValue>,
    #[serde(default, alias = "jobCategoryID", alias = "jobCategoryId")]
    pub job_category_id: Option<IdValue>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
}

impl CreateJobPayload {
    /// Required-field checks are left to the store. Dates that do not
    /// parse as `YYYY-MM-DD` are dropped.
    fn into_job_create(self) -> AppResult<JobCreate> {
        let id = |v: Option<IdValue>, field: &str| v.map(|v| v.to_i64(field)).transpose();
        Ok(JobCreate {
            customer_id: id(self.customer_id, "customer_id")?,
            status_id: id(self.status_id, "status_id")?,
            job_category_id: id(self.job_category_id, "job_category_id")?,
            description: self.description,
            start_date: self.start_date.as_deref().and_then(shared::util::parse_date),
            end_date: self.end_date.as_deref().and_then(shared::util::parse_date),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AssignDevicePayload {
    #[serde(alias = "jobID", alias = "jobId")]
    pub job_id: IdValue,
    #[serde(alias = "deviceID", alias = "deviceId")]
    pub device_id: IdValue,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusPayload {
    #[serde(alias = "entityType")]
    pub entity_type: String,
    #[serde(alias = "entityID", alias = "entityId")]
    pub entity_id: IdValue,
    pub status: String,
}

/// A decoded offline action ready to apply
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayAction {
    CreateJob(JobCreate),
    AssignDevice { job_id: i64, device_id: String },
    UpdateStatus { target: EntityTarget, status: String },
    /// Unknown action type, stored for manual review
    Deferred,
}

impl ReplayAction {
    pub fn parse(action: &OfflineSyncAction) -> AppResult<Self> {
        match ActionKind::parse(&action.action) {
            ActionKind::CreateJob => {
                let payload: CreateJobPayload = decode(action)?;
                Ok(ReplayAction::CreateJob(payload.into_job_create()?))
            }
            ActionKind::AssignDevice => {
                let payload: AssignDevicePayload = decode(action)?;
                Ok(ReplayAction::AssignDevice {
                    job_id: payload.job_id.to_i64("job_id")?,
                    device_id: payload.device_id.into_text(),
                })
            }
            ActionKind::UpdateStatus => {
                let payload: UpdateStatusPayload = decode(action)?;
                let target = match EntityType::parse(&payload.entity_type) {
                    Some(EntityType::Device) => EntityTarget::Device(payload.entity_id.into_text()),
                    Some(EntityType::Case) => {
                        EntityTarget::Case(payload.entity_id.to_i64("entity_id")?)
                    }
                    None => {
                        return Err(AppError::with_message(
                            ErrorCode::EntityTypeUnknown,
                            format!("Unknown entity type: {}", payload.entity_type),
                        ));
                    }
                };
                Ok(ReplayAction::UpdateStatus {
                    target,
                    status: payload.status,
                })
            }
            ActionKind::Unrecognized => Ok(ReplayAction::Deferred),
        }
    }
}

fn decode<T: for<'de> Deserialize<'de>>(action: &OfflineSyncAction) -> AppResult<T> {
    T::deserialize(&action.entity).map_err(|e| {
        AppError::with_message(
            ErrorCode::SyncPayloadInvalid,
            format!("Invalid {} payload: {e}", action.action),
        )
    })
}
