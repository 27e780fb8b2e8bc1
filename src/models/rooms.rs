// src/models/rooms.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::validation::{nightly_rate_in_range, not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Double")]
    pub name: String,
    #[schema(value_type = f64, example = 120.0)]
    pub nightly_rate: Decimal,
}

/// A room joined with its type. The rate is always the type's current rate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[schema(example = 12)]
    pub id: i32,
    #[schema(example = "204")]
    pub room_number: String,
    #[schema(example = 2)]
    pub floor: i32,
    pub type_id: i32,
    #[schema(example = "Double")]
    pub type_name: String,
    #[schema(value_type = f64, example = 120.0)]
    pub nightly_rate: Decimal,
    pub is_occupied: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomTypePayload {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Suite")]
    pub name: String,

    #[validate(custom(function = "nightly_rate_in_range"))]
    #[schema(value_type = f64, example = 250.0)]
    pub nightly_rate: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatePayload {
    #[validate(custom(function = "nightly_rate_in_range"))]
    #[schema(value_type = f64, example = 99.5)]
    pub nightly_rate: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomPayload {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "305")]
    pub room_number: String,

    #[validate(range(min = 0, message = "floor must not be negative"))]
    #[schema(example = 3)]
    pub floor: i32,

    pub type_id: i32,
}

/// Minimal room reference for pick lists.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomRef {
    pub id: i32,
    pub room_number: String,
}
