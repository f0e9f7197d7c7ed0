//! 工具模块
//!
//! - [`AppError`] / [`AppResult`] - 统一错误类型 (from shared::error)
//! - 日志初始化

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
