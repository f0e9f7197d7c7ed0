//! Device Repository

use super::RepoResult;
use shared::models::Device;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Device>> {
    let device = sqlx::query_as::<_, Device>(
        "SELECT id, product_id, serial_number, status FROM device WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(device)
}

pub async fn exists(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM device WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Returns `false` when no device has this id
pub async fn update_status(pool: &SqlitePool, id: &str, status: &str) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE device SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
