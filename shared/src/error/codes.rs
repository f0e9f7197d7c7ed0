//! Unified error codes for the rental backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Job errors
//! - 2xxx: Inventory errors (devices, cases)
//! - 3xxx: Packing errors
//! - 4xxx: Offline sync errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Job ====================
    /// Job not found
    JobNotFound = 1001,
    /// Job payload is missing customer, status or category
    JobInvalid = 1002,

    // ==================== 2xxx: Inventory ====================
    /// Device not found
    DeviceNotFound = 2001,
    /// Case not found
    CaseNotFound = 2002,
    /// Unknown entity type for a status update
    EntityTypeUnknown = 2003,

    // ==================== 3xxx: Packing ====================
    /// Device exists but is not assigned to the job
    DeviceNotAssigned = 3001,
    /// No device identifier in a scan request
    ScanIdentifierMissing = 3002,

    // ==================== 4xxx: Offline sync ====================
    /// Batch envelope could not be parsed
    SyncEnvelopeInvalid = 4001,
    /// Batch exceeds the configured action limit
    SyncBatchTooLarge = 4002,
    /// Action payload does not match its action type
    SyncPayloadInvalid = 4003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",

            // Job
            ErrorCode::JobNotFound => "Job not found",
            ErrorCode::JobInvalid => "Job requires customer, status and category",

            // Inventory
            ErrorCode::DeviceNotFound => "Device not found",
            ErrorCode::CaseNotFound => "Case not found",
            ErrorCode::EntityTypeUnknown => "Unknown entity type",

            // Packing
            ErrorCode::DeviceNotAssigned => "Device is not assigned to this job",
            ErrorCode::ScanIdentifierMissing => "Device ID or barcode payload is required",

            // Offline sync
            ErrorCode::SyncEnvelopeInvalid => "Invalid sync batch",
            ErrorCode::SyncBatchTooLarge => "Sync batch is too large",
            ErrorCode::SyncPayloadInvalid => "Invalid action payload",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            // Job
            1001 => Ok(ErrorCode::JobNotFound),
            1002 => Ok(ErrorCode::JobInvalid),

            // Inventory
            2001 => Ok(ErrorCode::DeviceNotFound),
            2002 => Ok(ErrorCode::CaseNotFound),
            2003 => Ok(ErrorCode::EntityTypeUnknown),

            // Packing
            3001 => Ok(ErrorCode::DeviceNotAssigned),
            3002 => Ok(ErrorCode::ScanIdentifierMissing),

            // Offline sync
            4001 => Ok(ErrorCode::SyncEnvelopeInvalid),
            4002 => Ok(ErrorCode::SyncBatchTooLarge),
            4003 => Ok(ErrorCode::SyncPayloadInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
