// src/handlers/schedule.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{error::AppError, extract::AppJson},
    config::AppState,
    models::schedule::{AddScheduleEntryPayload, ScheduleEntry, ScheduleListing},
};

// GET /api/schedule
#[utoipa::path(
    get,
    path = "/api/schedule",
    tag = "Schedule",
    responses((status = 200, description = "Cleaning schedule by day, floor and employee", body = Vec<ScheduleListing>))
)]
pub async fn list_schedule(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let schedule = app_state.schedule_service.list_schedule(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(schedule)))
}

// POST /api/schedule
#[utoipa::path(
    post,
    path = "/api/schedule",
    tag = "Schedule",
    request_body = AddScheduleEntryPayload,
    responses(
        (status = 201, description = "Entry added", body = ScheduleEntry),
        (status = 404, description = "Unknown employee"),
        (status = 409, description = "Entry already exists")
    )
)]
pub async fn add_schedule_entry(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<AddScheduleEntryPayload>,
) -> Result<impl IntoResponse, AppError> {
    let entry = app_state.schedule_service.add_entry(&app_state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

// DELETE /api/schedule/{id}
#[utoipa::path(
    delete,
    path = "/api/schedule/{id}",
    tag = "Schedule",
    params(("id" = i32, Path, description = "Schedule entry id")),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 404, description = "Unknown entry")
    )
)]
pub async fn delete_schedule_entry(
    State(app_state): State<AppState>,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.schedule_service.remove_entry(&app_state.db_pool, entry_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
