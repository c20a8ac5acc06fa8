//! # Solar Panel Data Errors
//!
//! Shared failure vocabulary for the store, the service and the extractor.
//!
//! Each variant carries a recommended HTTP status so the transport layer can
//! report it without inspecting error content. The rendered message
//! (`Display`) is what may be shown to a caller; `diagnostic()` carries the
//! internal detail and is meant for logs only.

use std::fmt;

use thiserror::Error;

/// Result type for solar panel data operations
pub type SolarPanelDataResult<T> = Result<T, SolarPanelDataError>;

/// Store operation that produced a lookup failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Get,
    Update,
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOperation::Get => "get",
            StoreOperation::Update => "update",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification tag the boundary switches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    MalformedEventData,
    EmptySolarData,
    Internal,
}

/// Solar panel data errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolarPanelDataError {
    /// No record under the given id.
    ///
    /// The message is intentionally blank so it is safe to reflect outward.
    #[error("")]
    NotFound { id: String, operation: StoreOperation },

    #[error("malformed solar panel data, check parameter {parameter_id}")]
    MalformedEventData { parameter_id: String },

    #[error("solar data is empty on request")]
    EmptySolarData,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SolarPanelDataError {
    pub fn not_found(id: impl Into<String>, operation: StoreOperation) -> Self {
        SolarPanelDataError::NotFound {
            id: id.into(),
            operation,
        }
    }

    pub fn malformed_event_data(parameter_id: impl Into<String>) -> Self {
        SolarPanelDataError::MalformedEventData {
            parameter_id: parameter_id.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SolarPanelDataError::NotFound { .. } => ErrorKind::NotFound,
            SolarPanelDataError::MalformedEventData { .. } => ErrorKind::MalformedEventData,
            SolarPanelDataError::EmptySolarData => ErrorKind::EmptySolarData,
            SolarPanelDataError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            SolarPanelDataError::NotFound {
                operation: StoreOperation::Get,
                ..
            } => 204,
            SolarPanelDataError::NotFound {
                operation: StoreOperation::Update,
                ..
            } => 404,
            SolarPanelDataError::MalformedEventData { .. } => 500,
            SolarPanelDataError::EmptySolarData => 400,
            SolarPanelDataError::Internal(_) => 500,
        }
    }

    /// Message that may be returned to a caller.
    ///
    /// Internal failures never expose their detail, whichever operation raised them.
    pub fn public_message(&self) -> String {
        match self {
            SolarPanelDataError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Full context for logging
    pub fn diagnostic(&self) -> String {
        match self {
            SolarPanelDataError::NotFound { id, .. } => format!("uuid {} not found", id),
            SolarPanelDataError::MalformedEventData { parameter_id } => {
                format!("parameterId {} contains events with no values", parameter_id)
            }
            SolarPanelDataError::EmptySolarData => self.to_string(),
            SolarPanelDataError::Internal(detail) => detail.clone(),
        }
    }
}
