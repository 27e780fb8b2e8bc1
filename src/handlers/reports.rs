// src/handlers/reports.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        reports::{
            CityQuery, CleanerLookup, CleanerQuery, HotelReport, OccupancySummary, OccupantsQuery,
            ReportOptions, RoomOccupants,
        },
        stays::StayListing,
    },
};

// GET /api/reports/occupancy
#[utoipa::path(
    get,
    path = "/api/reports/occupancy",
    tag = "Reports",
    responses((status = 200, description = "Available vs. total rooms per type", body = Vec<OccupancySummary>))
)]
pub async fn occupancy_summary(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.report_service.occupancy_summary(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/reports/options
#[utoipa::path(
    get,
    path = "/api/reports/options",
    tag = "Reports",
    responses((status = 200, description = "Rooms, current guests, weekdays and cities", body = ReportOptions))
)]
pub async fn report_options(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let options = app_state.report_service.report_options(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(options)))
}

// GET /api/reports/occupants?room_id=
#[utoipa::path(
    get,
    path = "/api/reports/occupants",
    tag = "Reports",
    params(("room_id" = i32, Query, description = "Room id")),
    responses(
        (status = 200, description = "Current occupants of the room", body = RoomOccupants),
        (status = 404, description = "Unknown room")
    )
)]
pub async fn occupants_by_room(
    State(app_state): State<AppState>,
    Query(query): Query<OccupantsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let occupants = app_state
        .report_service
        .occupants_by_room(&app_state.db_pool, query.room_id)
        .await?;

    Ok((StatusCode::OK, Json(occupants)))
}

// GET /api/reports/guests-by-city?city=
#[utoipa::path(
    get,
    path = "/api/reports/guests-by-city",
    tag = "Reports",
    params(("city" = String, Query, description = "Guest's home city")),
    responses(
        (status = 200, description = "Current guests from the city", body = Vec<StayListing>),
        (status = 400, description = "City missing")
    )
)]
pub async fn guests_by_city(
    State(app_state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let guests = app_state
        .report_service
        .guests_by_city(&app_state.db_pool, &query.city)
        .await?;

    Ok((StatusCode::OK, Json(guests)))
}

// GET /api/reports/cleaners?stay_id=&day=
#[utoipa::path(
    get,
    path = "/api/reports/cleaners",
    tag = "Reports",
    params(
        ("stay_id" = i32, Query, description = "Open stay id"),
        ("day" = String, Query, description = "Weekday, e.g. Monday")
    ),
    responses(
        (status = 200, description = "Cleaners of the guest's floor on that day", body = CleanerLookup),
        (status = 404, description = "No active stay")
    )
)]
pub async fn cleaners_for_stay(
    State(app_state): State<AppState>,
    Query(query): Query<CleanerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = app_state
        .report_service
        .cleaners_for_stay(&app_state.db_pool, query.stay_id, query.day)
        .await?;

    Ok((StatusCode::OK, Json(lookup)))
}

// GET /api/reports/hotel
#[utoipa::path(
    get,
    path = "/api/reports/hotel",
    tag = "Reports",
    responses((status = 200, description = "Room status and total income", body = HotelReport))
)]
pub async fn hotel_report(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let report = app_state.report_service.hotel_report(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(report)))
}
