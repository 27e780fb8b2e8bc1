// src/common/db_utils.rs

use crate::common::error::AppError;

/// True when the store rejected a write because of a UNIQUE constraint or index.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

/// True when the store rejected a write because a referenced row is missing.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_foreign_key_violation())
        .unwrap_or(false)
}

/// Translates constraint violations into domain errors, passing anything else through
/// as a store failure.
pub(crate) fn map_constraint_error(
    err: sqlx::Error,
    on_unique: impl FnOnce() -> AppError,
    on_foreign_key: impl FnOnce() -> AppError,
) -> AppError {
    if is_unique_violation(&err) {
        on_unique()
    } else if is_foreign_key_violation(&err) {
        on_foreign_key()
    } else {
        AppError::DatabaseError(err)
    }
}
