//! PWA 离线同步模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /pwa/sync | POST | 提交离线操作批次 |
//! | /pwa/sync/deferred | GET | 待人工审核的未知操作 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/pwa/sync", post(handler::sync))
        .route("/pwa/sync/deferred", get(handler::deferred))
}
