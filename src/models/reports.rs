// src/models/reports.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::{
    rooms::{Room, RoomRef},
    schedule::DayOfWeek,
    staff::Employee,
    stays::StayListing,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySummary {
    #[schema(example = "Double")]
    pub room_type: String,
    #[schema(example = 3)]
    pub available: i64,
    #[schema(example = 8)]
    pub total: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomOccupants {
    pub room_id: i32,
    pub room_number: String,
    pub occupants: Vec<StayListing>,
}

/// Open stay with the floor it sits on, used to find the cleaner.
#[derive(Debug, Clone, FromRow)]
pub struct ActiveStayLocation {
    pub first_name: String,
    pub last_name: String,
    pub room_number: String,
    pub floor: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanerLookup {
    pub stay_id: i32,
    pub guest_name: String,
    pub room_number: String,
    pub floor: i32,
    pub day_of_week: DayOfWeek,
    pub cleaners: Vec<Employee>,
}

/// Closed stay with the current rate of its room's type.
#[derive(Debug, Clone, FromRow)]
pub struct ClosedStayRate {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nightly_rate: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelReport {
    pub rooms: Vec<Room>,
    pub closed_stays: usize,
    #[schema(value_type = f64, example = 1250.0)]
    pub total_income: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    pub rooms: Vec<RoomRef>,
    pub current_guests: Vec<StayListing>,
    pub days: Vec<DayOfWeek>,
    pub cities: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct OccupantsQuery {
    pub room_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct CleanerQuery {
    pub stay_id: i32,
    pub day: DayOfWeek,
}
