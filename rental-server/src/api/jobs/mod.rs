//! Job API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/jobs | POST | 创建任务 |
//! | /jobs/{job_id}/scanboard | GET | 装箱看板 |
//! | /jobs/{job_id}/scan | POST | 扫描设备 |
//! | /jobs/{job_id}/finish | POST | 完成装箱 (force 跳过确认) |
//! | /jobs/{job_id}/devices | POST | 分配设备 (幂等) |
//! | /jobs/{job_id}/events | GET | 设备事件日志 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/jobs", post(handler::create))
        .route("/jobs/{job_id}/scanboard", get(handler::scan_board))
        .route("/jobs/{job_id}/scan", post(handler::scan))
        .route("/jobs/{job_id}/finish", post(handler::finish))
        .route("/jobs/{job_id}/devices", post(handler::assign_device))
        .route("/jobs/{job_id}/events", get(handler::events))
}
