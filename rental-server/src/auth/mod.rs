//! Request context
//!
//! Credentials are validated by the upstream session layer, which forwards
//! the acting user's id in a header (`ACTOR_HEADER`, default `x-user-id`).
//! This module only reads it.

mod extractor;

/// Acting identity of the current request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// `None` for anonymous requests (e.g. kiosk scanners)
    pub user_id: Option<String>,
}

impl RequestContext {
    pub fn new(user_id: Option<String>) -> Self {
        Self { user_id }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn actor(&self) -> Option<String> {
        self.user_id.clone()
    }
}
