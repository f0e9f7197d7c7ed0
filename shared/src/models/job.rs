//! Job Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Job entity (一次租赁业务)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Job {
    pub id: i64,
    pub customer_id: i64,
    pub status_id: i64,
    pub job_category_id: i64,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: i64,
}

/// Create job payload
///
/// Customer, status and category are required; they are optional here so the
/// store can report which one is missing instead of a generic parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobCreate {
    pub customer_id: Option<i64>,
    pub status_id: Option<i64>,
    pub job_category_id: Option<i64>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl JobCreate {
    /// Names of required fields that are absent or not positive
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.customer_id.is_some_and(|v| v > 0) {
            missing.push("customer_id");
        }
        if !self.status_id.is_some_and(|v| v > 0) {
            missing.push("status_id");
        }
        if !self.job_category_id.is_some_and(|v| v > 0) {
            missing.push("job_category_id");
        }
        missing
    }
}
