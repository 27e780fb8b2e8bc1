// src/models/validation.rs

use rust_decimal::Decimal;
use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("required".into()));
    }
    Ok(())
}

/// Exclusive upper bound of a `NUMERIC(10, 2)` rate column.
const MAX_NIGHTLY_RATE: i64 = 100_000_000;

/// Rates are stored with two decimals, so the bound applies to the rounded value.
pub fn nightly_rate_in_range(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("negative_rate")
            .with_message("nightly rate must not be negative".into()));
    }
    if value.round_dp(2) >= Decimal::from(MAX_NIGHTLY_RATE) {
        return Err(ValidationError::new("rate_too_large")
            .with_message("nightly rate must be below 100000000".into()));
    }
    Ok(())
}

/// Trims an optional field, collapsing an empty value to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
