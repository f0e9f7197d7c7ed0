//! PWA sync handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::sync::{DeferredAction, OfflineSyncBatch, OfflineSyncResponse};

use crate::auth::RequestContext;
use crate::core::ServerState;
use crate::db::repository::offline_action;
use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /pwa/sync - 回放离线操作
///
/// Only the envelope (an object with an `actions` array) can fail the
/// request; anything wrong inside an element is reported in `results`.
pub async fn sync(
    State(state): State<ServerState>,
    ctx: RequestContext,
    payload: Result<Json<OfflineSyncBatch>, JsonRejection>,
) -> AppResult<Json<OfflineSyncResponse>> {
    let Json(batch) = payload.map_err(|e| {
        tracing::warn!(user_id = ?ctx.user_id, "Rejected sync envelope: {e}");
        AppError::with_message(
            ErrorCode::SyncEnvelopeInvalid,
            format!("Invalid sync envelope: {}", e.body_text()),
        )
    })?;

    let max = state.config.max_sync_batch_actions;
    if batch.actions.len() > max {
        return Err(AppError::with_message(
            ErrorCode::SyncBatchTooLarge,
            format!("Batch too large: {} actions (max {max})", batch.actions.len()),
        ));
    }

    let results = state.replayer().replay_batch(&ctx, batch.actions).await;
    Ok(Json(OfflineSyncResponse { results }))
}

/// GET /pwa/sync/deferred - 待审核的离线操作
pub async fn deferred(State(state): State<ServerState>) -> AppResult<Json<Vec<DeferredAction>>> {
    let rows = offline_action::find_pending_review(state.pool()).await?;
    Ok(Json(rows))
}
