//! Deferred Offline Action Repository

use super::RepoResult;
use shared::sync::{DeferredAction, REVIEW_STATUS_PENDING};
use sqlx::SqlitePool;

/// Row to persist for manual review
#[derive(Debug, Clone)]
pub struct NewDeferredAction<'a> {
    pub queue_id: String,
    pub action: &'a str,
    pub entity: String,
    pub user_id: Option<&'a str>,
    pub client_timestamp: Option<String>,
    pub server_timestamp: i64,
    pub synced_at: i64,
}

pub async fn insert_deferred(pool: &SqlitePool, row: &NewDeferredAction<'_>) -> RepoResult<i64> {
    let id = sqlx::query(
        "INSERT INTO offline_sync_action (queue_id, action, entity, user_id, client_timestamp, server_timestamp, synced_at, review_status) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&row.queue_id)
    .bind(row.action)
    .bind(&row.entity)
    .bind(row.user_id)
    .bind(&row.client_timestamp)
    .bind(row.server_timestamp)
    .bind(row.synced_at)
    .bind(REVIEW_STATUS_PENDING)
    .execute(pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

pub async fn find_pending_review(pool: &SqlitePool) -> RepoResult<Vec<DeferredAction>> {
    let rows = sqlx::query_as::<_, DeferredAction>(
        "SELECT id, queue_id, action, entity, user_id, client_timestamp, server_timestamp, synced_at, review_status FROM offline_sync_action WHERE review_status = ? ORDER BY id",
    )
    .bind(REVIEW_STATUS_PENDING)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
