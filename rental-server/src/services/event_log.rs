//! Best-effort device event recording
//!
//! Event rows are audit data only. A failed append is logged and dropped;
//! it never fails the state transition that produced it.

use shared::models::NewDeviceEvent;
use sqlx::SqlitePool;

use crate::db::repository::device_event;

pub async fn record(pool: &SqlitePool, event: NewDeviceEvent) {
    let now = shared::util::now_millis();
    if let Err(e) = device_event::append(pool, &event, now).await {
        tracing::warn!(
            job_id = event.job_id,
            device_id = %event.device_id,
            event_type = event.event_type.as_str(),
            "Failed to append device event: {e}"
        );
    }
}
