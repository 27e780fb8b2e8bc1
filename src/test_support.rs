// Fixtures shared by the store-backed tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;

use crate::{
    config::AppState,
    models::{
        rooms::{CreateRoomPayload, CreateRoomTypePayload, Room},
        staff::HireEmployeePayload,
        stays::CheckInPayload,
    },
    services::{
        booking_service::BookingService, report_service::ReportService, room_service::RoomService,
        schedule_service::ScheduleService, staff_service::StaffService,
    },
};

pub struct Services {
    pub rooms: RoomService,
    pub booking: BookingService,
    pub staff: StaffService,
    pub schedule: ScheduleService,
    pub reports: ReportService,
}

/// The services exactly as the application wires them.
pub fn services() -> Services {
    let state = AppState::with_pool(lazy_pool());
    Services {
        rooms: state.room_service,
        booking: state.booking_service,
        staff: state.staff_service,
        schedule: state.schedule_service,
        reports: state.report_service,
    }
}

/// A pool that never connects unless a query is actually run.
pub fn lazy_pool() -> PgPool {
    sqlx::postgres::PgPoolOptions::new().connect_lazy_with(
        sqlx::postgres::PgConnectOptions::new()
            .host("localhost")
            .database("frontdesk_test"),
    )
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates a room type and one room of that type.
pub async fn seed_room(pool: &PgPool, type_name: &str, rate: &str, floor: i32, number: &str) -> Room {
    let s = services();
    let room_type = s
        .rooms
        .create_room_type(
            pool,
            CreateRoomTypePayload {
                name: type_name.to_string(),
                nightly_rate: Decimal::from_str(rate).unwrap(),
            },
        )
        .await
        .unwrap();

    s.rooms
        .create_room(pool, room_payload(number, floor, room_type.id))
        .await
        .unwrap()
}

pub fn room_payload(number: &str, floor: i32, type_id: i32) -> CreateRoomPayload {
    CreateRoomPayload {
        room_number: number.to_string(),
        floor,
        type_id,
    }
}

pub fn check_in_payload(passport: &str, room_id: i32, check_in: NaiveDate) -> CheckInPayload {
    CheckInPayload {
        passport_number: passport.to_string(),
        last_name: "Doe".to_string(),
        first_name: format!("Guest {passport}"),
        middle_name: None,
        city: "Porto".to_string(),
        check_in_date: Some(check_in),
        room_id: Some(room_id),
    }
}

pub fn hire_payload(last_name: &str, first_name: &str) -> HireEmployeePayload {
    HireEmployeePayload {
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        middle_name: None,
    }
}

/// Every room is flagged occupied exactly when an open stay references it.
pub async fn occupancy_matches_open_stays(pool: &PgPool) -> bool {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT NOT EXISTS (
            SELECT 1 FROM rooms r
            WHERE r.is_occupied <> EXISTS (
                SELECT 1 FROM guest_stays s
                WHERE s.room_id = r.id AND s.check_out_date IS NULL
            )
        )
        "#,
    )
    .fetch_one(pool)
    .await
    .unwrap()
}
