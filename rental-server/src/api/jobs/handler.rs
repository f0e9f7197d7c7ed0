//! Job API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::{AssignDevice, DeviceEvent, Job, JobCreate};
use shared::packing::{FinishPackRequest, FinishPackResponse, ScanBoard, ScanRequest, ScanResponse};

use crate::auth::RequestContext;
use crate::core::ServerState;
use crate::db::repository::{device_event, job};
use crate::services::assignment;
use crate::utils::{AppError, AppResult};

/// POST /api/jobs - 创建任务
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<JobCreate>,
) -> AppResult<Json<Job>> {
    let created = assignment::create_job(state.pool(), payload).await?;
    Ok(Json(created))
}

/// GET /jobs/{job_id}/scanboard - 装箱看板
pub async fn scan_board(
    State(state): State<ServerState>,
    Path(job_id): Path<i64>,
) -> AppResult<Json<ScanBoard>> {
    let board = state.packing().scan_board(job_id).await?;
    Ok(Json(board))
}

/// POST /jobs/{job_id}/scan - 扫描设备
pub async fn scan(
    State(state): State<ServerState>,
    ctx: RequestContext,
    Path(job_id): Path<i64>,
    Json(payload): Json<ScanRequest>,
) -> AppResult<Json<ScanResponse>> {
    let resp = state.packing().scan_device(&ctx, job_id, &payload).await?;
    Ok(Json(resp))
}

/// POST /jobs/{job_id}/finish - 完成装箱
///
/// An empty body is a preview (`force = false`).
pub async fn finish(
    State(state): State<ServerState>,
    ctx: RequestContext,
    Path(job_id): Path<i64>,
    payload: Option<Json<FinishPackRequest>>,
) -> AppResult<Json<FinishPackResponse>> {
    let force = payload.is_some_and(|Json(req)| req.force);
    let resp = state.packing().finish_pack(&ctx, job_id, force).await?;
    Ok(Json(resp))
}

#[derive(Debug, Serialize)]
pub struct AssignResponse {
    /// false when the device was already assigned
    pub created: bool,
}

/// POST /jobs/{job_id}/devices - 分配设备
pub async fn assign_device(
    State(state): State<ServerState>,
    ctx: RequestContext,
    Path(job_id): Path<i64>,
    Json(payload): Json<AssignDevice>,
) -> AppResult<Json<AssignResponse>> {
    let created =
        assignment::assign_device(state.pool(), &ctx, job_id, &payload.device_id).await?;
    Ok(Json(AssignResponse { created }))
}

/// GET /jobs/{job_id}/events - 设备事件日志
pub async fn events(
    State(state): State<ServerState>,
    Path(job_id): Path<i64>,
) -> AppResult<Json<Vec<DeviceEvent>>> {
    if !job::exists(state.pool(), job_id).await? {
        return Err(AppError::job_not_found(job_id));
    }
    let events = device_event::find_by_job(state.pool(), job_id).await?;
    Ok(Json(events))
}
