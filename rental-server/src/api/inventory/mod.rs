//! Inventory API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/devices/{device_id}/status | PUT | 更新设备状态 |
//! | /api/cases/{case_id}/status | PUT | 更新箱子状态 |

mod handler;

use axum::{Router, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/devices/{device_id}/status", put(handler::update_device_status))
        .route("/api/cases/{case_id}/status", put(handler::update_case_status))
}
