//! Device Event Repository (append-only)

use super::RepoResult;
use shared::models::{DeviceEvent, NewDeviceEvent};
use sqlx::SqlitePool;

pub async fn append(pool: &SqlitePool, event: &NewDeviceEvent, created_at: i64) -> RepoResult<i64> {
    let id = sqlx::query(
        "INSERT INTO device_event (job_id, device_id, event_type, actor, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(event.job_id)
    .bind(&event.device_id)
    .bind(event.event_type.as_str())
    .bind(&event.actor)
    .bind(created_at)
    .execute(pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

/// Events of a job, oldest first
pub async fn find_by_job(pool: &SqlitePool, job_id: i64) -> RepoResult<Vec<DeviceEvent>> {
    let rows = sqlx::query_as::<_, DeviceEvent>(
        "SELECT id, job_id, device_id, event_type, actor, created_at FROM device_event WHERE job_id = ? ORDER BY created_at, id",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
