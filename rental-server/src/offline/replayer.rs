//! Offline batch replay

use serde_json::Value;
use shared::sync::{OfflineSyncAction, QueueId, SyncActionResult};
use sqlx::SqlitePool;

use super::action::ReplayAction;
use crate::auth::RequestContext;
use crate::db::repository::offline_action::{self, NewDeferredAction};
use crate::services::assignment;
use crate::utils::AppResult;

/// An action with the server-side stamps attached
///
/// The user id comes from the request context, never from the client.
#[derive(Debug)]
pub struct StampedAction<'a> {
    pub action: &'a OfflineSyncAction,
    pub user_id: Option<&'a str>,
    /// Server clock when this action was picked up
    pub timestamp: i64,
    /// Server clock when the batch was received
    pub synced_at: i64,
}

/// Replays one client batch against the store
///
/// Actions run strictly in submission order with no enclosing transaction:
/// each applied action stays committed even if a later one fails, and a
/// failure only affects its own result.
#[derive(Debug, Clone)]
pub struct OfflineReplayer {
    pool: SqlitePool,
}

impl OfflineReplayer {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// One result per input element, in input order
    ///
    /// Elements arrive as raw JSON. One that is not an object gets an error
    /// result echoing a `null` id; everything else is replayed.
    pub async fn replay_batch(
        &self,
        ctx: &RequestContext,
        raw: Vec<Value>,
    ) -> Vec<SyncActionResult> {
        let synced_at = shared::util::now_millis();
        let total = raw.len();
        let mut results = Vec::with_capacity(total);

        for value in raw {
            let action = match OfflineSyncAction::from_value(value) {
                Ok(action) => action,
                Err(message) => {
                    tracing::warn!("Offline action rejected: {message}");
                    results.push(SyncActionResult::error(QueueId::Other(Value::Null), message));
                    continue;
                }
            };
            let stamped = StampedAction {
                action: &action,
                user_id: ctx.user_id.as_deref(),
                timestamp: shared::util::now_millis(),
                synced_at,
            };

            match self.replay_one(ctx, &stamped).await {
                Ok(()) => results.push(SyncActionResult::success(action.id.clone())),
                Err(e) => {
                    tracing::warn!(
                        queue_id = %action.id,
                        action = %action.action,
                        code = %e.code,
                        "Offline action failed: {}",
                        e.message
                    );
                    results.push(SyncActionResult::error(action.id.clone(), e.message));
                }
            }
        }

        let succeeded = results.iter().filter(|r| r.is_success()).count();
        tracing::info!(
            user_id = ?ctx.user_id,
            total,
            succeeded,
            failed = total - succeeded,
            "Offline sync batch replayed"
        );

        results
    }

    async fn replay_one(&self, ctx: &RequestContext, stamped: &StampedAction<'_>) -> AppResult<()> {
        match ReplayAction::parse(stamped.action)? {
            ReplayAction::CreateJob(data) => {
                assignment::create_job(&self.pool, data).await?;
            }
            ReplayAction::AssignDevice { job_id, device_id } => {
                assignment::assign_device(&self.pool, ctx, job_id, &device_id).await?;
            }
            ReplayAction::UpdateStatus { target, status } => {
                assignment::update_entity_status(&self.pool, &target, &status).await?;
            }
            ReplayAction::Deferred => self.defer(stamped).await?,
        }
        Ok(())
    }

    async fn defer(&self, stamped: &StampedAction<'_>) -> AppResult<()> {
        let action = stamped.action;
        let row = NewDeferredAction {
            queue_id: action.id.to_string(),
            action: &action.action,
            entity: action.entity.to_string(),
            user_id: stamped.user_id,
            client_timestamp: action.timestamp.as_ref().map(client_timestamp_text),
            server_timestamp: stamped.timestamp,
            synced_at: stamped.synced_at,
        };
        let id = offline_action::insert_deferred(&self.pool, &row).await?;
        tracing::info!(
            queue_id = %action.id,
            action = %action.action,
            review_id = id,
            "Unrecognized offline action deferred for review"
        );
        Ok(())
    }
}

/// Store string timestamps without JSON quotes, anything else as JSON text
fn client_timestamp_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
