//! Offline sync batch protocol types
//!
//! Used by PWA clients to submit actions queued while offline, and by
//! rental-server to replay them. The envelope only requires an `actions`
//! array; each element is decoded on its own with
//! [`OfflineSyncAction::from_value`] so one bad action never makes the whole
//! batch unparseable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default upper bound on actions per batch
pub const MAX_SYNC_BATCH_ACTIONS: usize = 500;

/// A batch of queued actions from one client, elements still raw JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineSyncBatch {
    pub actions: Vec<Value>,
}

/// Client-assigned queue id, echoed back in the result
///
/// IndexedDB queues hand out numbers, other clients use strings. Anything
/// else (floats, objects, a missing id as `null`) is echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueueId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl From<Value> for QueueId {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(n) => QueueId::Number(n),
                None => QueueId::Other(Value::Number(n)),
            },
            Value::String(s) => QueueId::Text(s),
            other => QueueId::Other(other),
        }
    }
}

impl std::fmt::Display for QueueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueId::Number(n) => write!(f, "{n}"),
            QueueId::Text(s) => f.write_str(s),
            QueueId::Other(v) => write!(f, "{v}"),
        }
    }
}

/// One action recorded while offline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineSyncAction {
    /// Queue id for result correlation
    pub id: QueueId,
    /// "create_job", "assign_device", "update_status", or anything else
    pub action: String,
    /// Action-specific payload
    #[serde(default)]
    pub entity: Value,
    /// Client clock at capture time, kept verbatim (ms number or ISO string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
}

impl OfflineSyncAction {
    /// Decode one batch element without rejecting odd field types
    ///
    /// Only a non-object element fails. A non-string `action` is kept as its
    /// JSON text, so it lands with the unrecognized actions. A missing `id`
    /// is echoed as `null`.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => return Err(format!("Sync action must be a JSON object, got {other}")),
        };

        let id = fields.remove("id").map_or(QueueId::Other(Value::Null), QueueId::from);
        let action = match fields.remove("action") {
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let entity = fields.remove("entity").unwrap_or(Value::Null);
        let timestamp = fields.remove("timestamp").filter(|v| !v.is_null());

        Ok(Self {
            id,
            action,
            entity,
            timestamp,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncActionStatus {
    Success,
    Error,
}

/// Outcome of one replayed action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncActionResult {
    pub id: QueueId,
    pub status: SyncActionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SyncActionResult {
    pub fn success(id: QueueId) -> Self {
        Self {
            id,
            status: SyncActionStatus::Success,
            error: None,
        }
    }

    pub fn error(id: QueueId, error: impl Into<String>) -> Self {
        Self {
            id,
            status: SyncActionStatus::Error,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SyncActionStatus::Success
    }
}

/// Response to a batch: exactly one result per submitted action, in order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineSyncResponse {
    pub results: Vec<SyncActionResult>,
}

/// Review status given to deferred actions
pub const REVIEW_STATUS_PENDING: &str = "pending_review";

/// Offline action stored verbatim for manual review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DeferredAction {
    pub id: i64,
    pub queue_id: String,
    pub action: String,
    /// Raw JSON text as submitted
    pub entity: String,
    pub user_id: Option<String>,
    pub client_timestamp: Option<String>,
    pub server_timestamp: i64,
    pub synced_at: i64,
    pub review_status: String,
}
