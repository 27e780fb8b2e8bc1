// src/handlers/stays.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;

use crate::{
    common::{error::AppError, extract::AppJson},
    config::AppState,
    models::stays::{CheckInPayload, GuestStay, Invoice, StayListing},
};

// POST /api/stays/check-in
#[utoipa::path(
    post,
    path = "/api/stays/check-in",
    tag = "Stays",
    request_body = CheckInPayload,
    responses(
        (status = 201, description = "Guest checked in", body = GuestStay),
        (status = 400, description = "Missing or blank fields"),
        (status = 409, description = "Guest already checked in or room not available")
    )
)]
pub async fn check_in(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CheckInPayload>,
) -> Result<impl IntoResponse, AppError> {
    let stay = app_state
        .booking_service
        .check_in(&app_state.db_pool, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(stay)))
}

// POST /api/stays/{id}/check-out
#[utoipa::path(
    post,
    path = "/api/stays/{id}/check-out",
    tag = "Stays",
    params(("id" = i32, Path, description = "Stay id")),
    responses(
        (status = 200, description = "Guest checked out; final invoice", body = Invoice),
        (status = 404, description = "Unknown stay"),
        (status = 409, description = "Stay already closed")
    )
)]
pub async fn check_out(
    State(app_state): State<AppState>,
    Path(stay_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let today = Local::now().date_naive();
    let invoice = app_state
        .booking_service
        .check_out(&app_state.db_pool, stay_id, today)
        .await?;

    Ok((StatusCode::OK, Json(invoice)))
}

// GET /api/stays/{id}/invoice
#[utoipa::path(
    get,
    path = "/api/stays/{id}/invoice",
    tag = "Stays",
    params(("id" = i32, Path, description = "Stay id")),
    responses(
        (status = 200, description = "Invoice; provisional while the stay is open", body = Invoice),
        (status = 404, description = "Unknown stay")
    )
)]
pub async fn get_invoice(
    State(app_state): State<AppState>,
    Path(stay_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let today = Local::now().date_naive();
    let invoice = app_state
        .booking_service
        .invoice(&app_state.db_pool, stay_id, today)
        .await?;

    Ok((StatusCode::OK, Json(invoice)))
}

// GET /api/stays
#[utoipa::path(
    get,
    path = "/api/stays",
    tag = "Stays",
    responses((status = 200, description = "Guests currently checked in", body = Vec<StayListing>))
)]
pub async fn list_current_guests(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stays = app_state.booking_service.list_current_guests(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(stays)))
}

// GET /api/stays/all
#[utoipa::path(
    get,
    path = "/api/stays/all",
    tag = "Stays",
    responses((status = 200, description = "Every stay, newest first", body = Vec<StayListing>))
)]
pub async fn list_all_stays(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stays = app_state.booking_service.list_all_stays(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(stays)))
}

// GET /api/stays/{id}
#[utoipa::path(
    get,
    path = "/api/stays/{id}",
    tag = "Stays",
    params(("id" = i32, Path, description = "Stay id")),
    responses(
        (status = 200, description = "The stay", body = StayListing),
        (status = 404, description = "Unknown stay")
    )
)]
pub async fn get_stay(
    State(app_state): State<AppState>,
    Path(stay_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let stay = app_state.booking_service.get_stay(&app_state.db_pool, stay_id).await?;
    Ok((StatusCode::OK, Json(stay)))
}
