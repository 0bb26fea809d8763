use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngressErrorKind {
    MissingInput,
    MissingTranscript,
    UnsupportedFileType,
    FileTooLarge,
    TooManyFiles,
    MalformedRequest,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressError {
    pub kind: IngressErrorKind,
    pub message: String,
}

impl IngressError {
    pub fn new(kind: IngressErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            IngressErrorKind::MissingInput
            | IngressErrorKind::MissingTranscript
            | IngressErrorKind::UnsupportedFileType
            | IngressErrorKind::TooManyFiles
            | IngressErrorKind::MalformedRequest => StatusCode::BAD_REQUEST,
            IngressErrorKind::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            IngressErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for IngressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for IngressError {}

impl IntoResponse for IngressError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(target: "ingress", error = %self.message, "request_failed");
        } else {
            tracing::debug!(target: "ingress", kind = ?self.kind, error = %self.message, "request_rejected");
        }
        // Internal details stay in the log.
        let message = if status.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.message
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub fn missing_input() -> IngressError {
    IngressError::new(IngressErrorKind::MissingInput, "Message or images required")
}

pub fn missing_transcript() -> IngressError {
    IngressError::new(IngressErrorKind::MissingTranscript, "Voice transcript required")
}

pub fn unsupported_file_type(content_type: &str) -> IngressError {
    IngressError::new(
        IngressErrorKind::UnsupportedFileType,
        format!("Only image files are allowed (got '{content_type}')"),
    )
}

pub fn file_too_large(max_file_bytes: usize) -> IngressError {
    IngressError::new(
        IngressErrorKind::FileTooLarge,
        format!("Each image must be at most {max_file_bytes} bytes"),
    )
}

pub fn too_many_files(max_files: usize) -> IngressError {
    IngressError::new(
        IngressErrorKind::TooManyFiles,
        format!("At most {max_files} images can be uploaded per request"),
    )
}

pub fn malformed_request(message: impl Into<String>) -> IngressError {
    IngressError::new(IngressErrorKind::MalformedRequest, message)
}

pub fn internal_error(message: impl Into<String>) -> IngressError {
    IngressError::new(IngressErrorKind::Internal, message)
}
