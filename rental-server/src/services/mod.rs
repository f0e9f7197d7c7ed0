//! Domain services shared by the HTTP handlers and the offline replayer

pub mod assignment;
pub mod event_log;

pub use assignment::EntityTarget;
