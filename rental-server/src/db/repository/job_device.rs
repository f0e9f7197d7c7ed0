//! Job ↔ Device assignment Repository
//!
//! Holds the packing state of every assigned device. Rows are only ever
//! created (idempotently) and moved from `pending` to `packed`.

use super::RepoResult;
use shared::models::{BoardItem, PackStatus};
use sqlx::SqlitePool;

/// Board rows ordered by product name then device id
const BOARD_SELECT: &str = "SELECT jd.device_id, COALESCE(p.name, '') AS product_name, jd.pack_status, p.image_url FROM job_device jd LEFT JOIN device d ON d.id = jd.device_id LEFT JOIN product p ON p.id = d.product_id";

pub async fn find_board_items(pool: &SqlitePool, job_id: i64) -> RepoResult<Vec<BoardItem>> {
    let sql = format!("{BOARD_SELECT} WHERE jd.job_id = ? ORDER BY product_name, jd.device_id");
    let rows = sqlx::query_as::<_, BoardItem>(&sql)
        .bind(job_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Same ordering as [`find_board_items`], `pending` rows only
pub async fn find_pending(pool: &SqlitePool, job_id: i64) -> RepoResult<Vec<BoardItem>> {
    let sql = format!(
        "{BOARD_SELECT} WHERE jd.job_id = ? AND jd.pack_status = ? ORDER BY product_name, jd.device_id"
    );
    let rows = sqlx::query_as::<_, BoardItem>(&sql)
        .bind(job_id)
        .bind(PackStatus::Pending)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn is_assigned(pool: &SqlitePool, job_id: i64, device_id: &str) -> RepoResult<bool> {
    let found: Option<i64> =
        sqlx::query_scalar("SELECT 1 FROM job_device WHERE job_id = ? AND device_id = ?")
            .bind(job_id)
            .bind(device_id)
            .fetch_optional(pool)
            .await?;
    Ok(found.is_some())
}

/// Create the assignment if absent. Returns whether a row was inserted.
pub async fn assign(pool: &SqlitePool, job_id: i64, device_id: &str) -> RepoResult<bool> {
    let result = sqlx::query(
        "INSERT OR IGNORE INTO job_device (job_id, device_id, pack_status, pack_ts) VALUES (?, ?, ?, NULL)",
    )
    .bind(job_id)
    .bind(device_id)
    .bind(PackStatus::Pending)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Update a single row. Returns `false` when the device is not assigned.
pub async fn set_pack_status(
    pool: &SqlitePool,
    job_id: i64,
    device_id: &str,
    status: PackStatus,
    ts: i64,
) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE job_device SET pack_status = ?, pack_ts = ? WHERE job_id = ? AND device_id = ?",
    )
    .bind(status)
    .bind(ts)
    .bind(job_id)
    .bind(device_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Mark every pending row of the job as packed. Returns the number of rows moved.
pub async fn pack_all_pending(pool: &SqlitePool, job_id: i64, ts: i64) -> RepoResult<u64> {
    let result = sqlx::query(
        "UPDATE job_device SET pack_status = ?, pack_ts = ? WHERE job_id = ? AND pack_status = ?",
    )
    .bind(PackStatus::Packed)
    .bind(ts)
    .bind(job_id)
    .bind(PackStatus::Pending)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
