//! Offline-first sync
//!
//! PWA clients queue `create_job`, `assign_device` and `update_status`
//! actions while disconnected and submit them as one batch when back
//! online. Resubmitting a batch is safe: assignment is idempotent and
//! status updates are plain overwrites.

pub mod action;
mod replayer;

pub use action::{ActionKind, ReplayAction};
pub use replayer::{OfflineReplayer, StampedAction};
