// src/models/stays.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::validation::{normalize_optional, not_blank},
};

/// A row of the guest ledger. `check_out_date == None` means the stay is open.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestStay {
    #[schema(example = 41)]
    pub id: i32,
    #[schema(example = "AB1234567")]
    pub passport_number: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "Jane")]
    pub first_name: String,
    pub middle_name: Option<String>,
    #[schema(example = "Porto")]
    pub city: String,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub check_in_date: NaiveDate,
    #[schema(value_type = Option<String>, format = Date)]
    pub check_out_date: Option<NaiveDate>,
    pub room_id: Option<i32>,
}

impl GuestStay {
    pub fn is_open(&self) -> bool {
        self.check_out_date.is_none()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A stay together with the number of the room it was assigned.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StayListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub stay: GuestStay,
    pub room_number: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInPayload {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "AB1234567")]
    pub passport_number: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Doe")]
    pub last_name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Jane")]
    pub first_name: String,

    pub middle_name: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Porto")]
    pub city: String,

    #[validate(required(message = "required"))]
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub check_in_date: Option<NaiveDate>,

    #[validate(required(message = "required"))]
    #[schema(example = 12)]
    pub room_id: Option<i32>,
}

/// Validated check-in request, trimmed and ready for the ledger.
#[derive(Debug, Clone)]
pub struct NewStay {
    pub passport_number: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub city: String,
    pub check_in_date: NaiveDate,
    pub room_id: i32,
}

impl TryFrom<CheckInPayload> for NewStay {
    type Error = AppError;

    fn try_from(payload: CheckInPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        let check_in_date = payload
            .check_in_date
            .ok_or_else(|| AppError::InvalidInput("check-in date is required".to_string()))?;
        let room_id = payload
            .room_id
            .ok_or_else(|| AppError::InvalidInput("room is required".to_string()))?;

        Ok(NewStay {
            passport_number: payload.passport_number.trim().to_string(),
            last_name: payload.last_name.trim().to_string(),
            first_name: payload.first_name.trim().to_string(),
            middle_name: normalize_optional(payload.middle_name),
            city: payload.city.trim().to_string(),
            check_in_date,
            room_id,
        })
    }
}

/// Billed amounts for one stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StayCharge {
    #[schema(example = 3)]
    pub nights: i64,
    #[schema(value_type = f64, example = 100.0)]
    pub nightly_rate: Decimal,
    #[schema(value_type = f64, example = 300.0)]
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub stay_id: i32,
    pub guest_name: String,
    pub passport_number: String,
    pub room_number: String,
    pub room_type: String,
    #[schema(value_type = String, format = Date)]
    pub check_in_date: NaiveDate,
    /// Actual check-out date, or today's date for a provisional invoice.
    #[schema(value_type = String, format = Date)]
    pub check_out_date: NaiveDate,
    #[serde(flatten)]
    pub charge: StayCharge,
    /// True when the stay is still open.
    pub provisional: bool,
    #[schema(value_type = String, format = Date)]
    pub issued_on: NaiveDate,
}
