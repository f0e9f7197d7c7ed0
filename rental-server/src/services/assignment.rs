//! Job and inventory mutations
//!
//! Shared by the direct HTTP handlers and the offline replayer so both
//! paths validate and fail the same way.

use shared::models::{DeviceEventType, Job, JobCreate, NewDeviceEvent};
use sqlx::SqlitePool;

use crate::auth::RequestContext;
use crate::db::repository::{RepoError, case, device, job, job_device};
use crate::services::event_log;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Target of a status update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityTarget {
    Device(String),
    Case(i64),
}

pub async fn create_job(pool: &SqlitePool, data: JobCreate) -> AppResult<Job> {
    let created = job::create(pool, data).await.map_err(|e| match e {
        RepoError::Validation(msg) => AppError::with_message(ErrorCode::JobInvalid, msg),
        other => other.into(),
    })?;
    tracing::info!(job_id = created.id, customer_id = created.customer_id, "Job created");
    Ok(created)
}

/// Assign a device to a job. Returns whether a new assignment was created;
/// assigning an already-assigned device is a successful no-op.
pub async fn assign_device(
    pool: &SqlitePool,
    ctx: &RequestContext,
    job_id: i64,
    device_id: &str,
) -> AppResult<bool> {
    let device_id = device_id.trim();
    if device_id.is_empty() {
        return Err(AppError::validation("device_id must not be empty"));
    }
    if !job::exists(pool, job_id).await? {
        return Err(AppError::job_not_found(job_id));
    }
    if !device::exists(pool, device_id).await? {
        return Err(AppError::device_not_found(device_id));
    }

    let created = job_device::assign(pool, job_id, device_id).await?;
    if created {
        tracing::info!(job_id, device_id, "Device assigned to job");
        event_log::record(
            pool,
            NewDeviceEvent::device(job_id, device_id, DeviceEventType::Assigned, ctx.actor()),
        )
        .await;
    } else {
        tracing::debug!(job_id, device_id, "Device already assigned");
    }
    Ok(created)
}

// TODO: restrict updates to entities within the acting user's scope once the
// session layer forwards it; any caller can currently change any device or case.
pub async fn update_entity_status(
    pool: &SqlitePool,
    target: &EntityTarget,
    status: &str,
) -> AppResult<()> {
    let status = status.trim();
    if status.is_empty() {
        return Err(AppError::validation("status must not be empty"));
    }

    match target {
        EntityTarget::Device(id) => {
            if !device::update_status(pool, id, status).await? {
                return Err(AppError::device_not_found(id));
            }
        }
        EntityTarget::Case(id) => {
            if !case::update_status(pool, *id, status).await? {
                return Err(AppError::case_not_found(*id));
            }
        }
    }
    tracing::info!(entity = ?target, status, "Entity status updated");
    Ok(())
}
