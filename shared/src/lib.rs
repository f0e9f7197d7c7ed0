//! Shared types for the rental backend
//!
//! Wire and domain types used by the server and by API clients:
//! the unified error system, entity models, packing request/response
//! shapes and the offline sync protocol.

pub mod error;
pub mod models;
pub mod packing;
pub mod sync;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
