//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Case, Device, StatusUpdate};

use crate::core::ServerState;
use crate::db::repository::{case, device};
use crate::services::{EntityTarget, assignment};
use crate::utils::{AppError, AppResult};

/// PUT /api/devices/{device_id}/status
pub async fn update_device_status(
    State(state): State<ServerState>,
    Path(device_id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Device>> {
    let target = EntityTarget::Device(device_id.clone());
    assignment::update_entity_status(state.pool(), &target, &payload.status).await?;

    let updated = device::find_by_id(state.pool(), &device_id)
        .await?
        .ok_or_else(|| AppError::device_not_found(&device_id))?;
    Ok(Json(updated))
}

/// PUT /api/cases/{case_id}/status
pub async fn update_case_status(
    State(state): State<ServerState>,
    Path(case_id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Case>> {
    assignment::update_entity_status(state.pool(), &EntityTarget::Case(case_id), &payload.status)
        .await?;

    let updated = case::find_by_id(state.pool(), case_id)
        .await?
        .ok_or_else(|| AppError::case_not_found(case_id))?;
    Ok(Json(updated))
}
