// src/common/error.rs

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

/// Broad classes of failure. Callers decide how to react by kind, not by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input. The caller should correct it and retry.
    Validation,
    /// A business rule rejected the operation. Retrying the same request will fail again.
    Conflict,
    /// A referenced entity does not exist.
    NotFound,
    /// The store failed. The transaction was rolled back.
    Store,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0}")]
    InvalidInput(String),

    #[error("invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    // --- Conflicts ---
    #[error("a guest with passport {0} is already checked in")]
    GuestAlreadyCheckedIn(String),

    #[error("room {0} is not available")]
    RoomNotAvailable(i32),

    #[error("stay {0} is already checked out")]
    StayAlreadyClosed(i32),

    #[error("stay {0} has no room assigned")]
    StayWithoutRoom(i32),

    #[error("this schedule entry (employee, floor, day) already exists")]
    DuplicateScheduleEntry,

    #[error("room type '{0}' already exists")]
    RoomTypeAlreadyExists(String),

    #[error("room number '{0}' is already in use")]
    RoomNumberTaken(String),

    #[error("room {0} is occupied or has stay history")]
    RoomInUse(i32),

    // --- Not found ---
    #[error("room {0} not found")]
    RoomNotFound(i32),

    #[error("room type {0} not found")]
    RoomTypeNotFound(i32),

    #[error("stay {0} not found")]
    StayNotFound(i32),

    #[error("no active stay {0}")]
    NoActiveStay(i32),

    #[error("employee {0} not found")]
    EmployeeNotFound(i32),

    #[error("schedule entry {0} not found")]
    ScheduleEntryNotFound(i32),

    // --- Store ---
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ValidationError(_) | AppError::InvalidInput(_) | AppError::InvalidBody(_) => {
                ErrorKind::Validation
            }

            AppError::GuestAlreadyCheckedIn(_)
            | AppError::RoomNotAvailable(_)
            | AppError::StayAlreadyClosed(_)
            | AppError::StayWithoutRoom(_)
            | AppError::DuplicateScheduleEntry
            | AppError::RoomTypeAlreadyExists(_)
            | AppError::RoomNumberTaken(_)
            | AppError::RoomInUse(_) => ErrorKind::Conflict,

            AppError::RoomNotFound(_)
            | AppError::RoomTypeNotFound(_)
            | AppError::StayNotFound(_)
            | AppError::NoActiveStay(_)
            | AppError::EmployeeNotFound(_)
            | AppError::ScheduleEntryNotFound(_) => ErrorKind::NotFound,

            AppError::DatabaseError(_) | AppError::InternalServerError(_) => ErrorKind::Store,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            // Every failing field with its messages.
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                (status, body).into_response()
            }

            // Unparseable JSON, wrong field types or a missing content type.
            AppError::InvalidBody(rejection) => {
                let body = Json(json!({
                    "error": "The request body is invalid.",
                    "details": { "body": [rejection.body_text()] },
                }));
                (status, body).into_response()
            }

            // Store details stay in the log.
            ref e if e.kind() == ErrorKind::Store => {
                tracing::error!("internal server error: {}", e);
                let body = Json(json!({ "error": "An unexpected error occurred." }));
                (status, body).into_response()
            }

            e => {
                let body = Json(json!({ "error": e.to_string() }));
                (status, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn classifies_business_rule_violations_as_conflicts() {
        assert_eq!(AppError::RoomNotAvailable(3).kind(), ErrorKind::Conflict);
        assert_eq!(
            AppError::GuestAlreadyCheckedIn("X1".into()).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(AppError::DuplicateScheduleEntry.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn maps_kinds_to_status_codes() {
        assert_eq!(AppError::StayNotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::InvalidInput("city is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DatabaseError(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn validation_response_lists_failing_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("city", ValidationError::new("blank").with_message("required".into()));

        let response = AppError::ValidationError(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["details"]["city"][0], "required");
    }

    #[tokio::test]
    async fn store_errors_hide_details() {
        let response = AppError::DatabaseError(sqlx::Error::PoolTimedOut).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "An unexpected error occurred.");
    }
}
