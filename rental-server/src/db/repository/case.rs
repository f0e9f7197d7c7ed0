//! Transport Case Repository

use super::RepoResult;
use shared::models::Case;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Case>> {
    let case = sqlx::query_as::<_, Case>("SELECT id, name, status FROM device_case WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(case)
}

/// Returns `false` when no case has this id
pub async fn update_status(pool: &SqlitePool, id: i64, status: &str) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE device_case SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
