//! Job Repository

use super::{RepoError, RepoResult};
use shared::models::{Job, JobCreate};
use sqlx::SqlitePool;

const JOB_SELECT: &str = "SELECT id, customer_id, status_id, job_category_id, description, start_date, end_date, created_at FROM job";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Job>> {
    let sql = format!("{JOB_SELECT} WHERE id = ?");
    let job = sqlx::query_as::<_, Job>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(job)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM job WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Insert a job; customer, status and category must be present and positive
pub async fn create(pool: &SqlitePool, data: JobCreate) -> RepoResult<Job> {
    let missing = data.missing_fields();
    if !missing.is_empty() {
        return Err(RepoError::Validation(format!(
            "Missing required job fields: {}",
            missing.join(", ")
        )));
    }

    let now = shared::util::now_millis();
    let id = sqlx::query(
        "INSERT INTO job (customer_id, status_id, job_category_id, description, start_date, end_date, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(data.customer_id)
    .bind(data.status_id)
    .bind(data.job_category_id)
    .bind(&data.description)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(now)
    .execute(pool)
    .await?
    .last_insert_rowid();

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create job".into()))
}
