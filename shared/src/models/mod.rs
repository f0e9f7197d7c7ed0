//! Data models
//!
//! Shared between rental-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Job, product and case IDs are `i64`; device IDs are strings
//! (asset tags printed on the equipment).

pub mod device;
pub mod device_event;
pub mod job;
pub mod job_device;

// Re-exports
pub use device::*;
pub use device_event::*;
pub use job::*;
pub use job_device::*;
