// src/handlers/rooms.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{error::AppError, extract::AppJson},
    config::AppState,
    models::rooms::{CreateRoomPayload, CreateRoomTypePayload, Room, RoomType, UpdateRatePayload},
};

// =============================================================================
//  ROOM TYPES
// =============================================================================

// POST /api/room-types
#[utoipa::path(
    post,
    path = "/api/room-types",
    tag = "Rooms",
    request_body = CreateRoomTypePayload,
    responses(
        (status = 201, description = "Room type created", body = RoomType),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Name already in use")
    )
)]
pub async fn create_room_type(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateRoomTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    let room_type = app_state
        .room_service
        .create_room_type(&app_state.db_pool, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(room_type)))
}

// GET /api/room-types
#[utoipa::path(
    get,
    path = "/api/room-types",
    tag = "Rooms",
    responses((status = 200, description = "All room types", body = Vec<RoomType>))
)]
pub async fn list_room_types(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let types = app_state.room_service.list_room_types(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(types)))
}

// PUT /api/room-types/{id}/rate
#[utoipa::path(
    put,
    path = "/api/room-types/{id}/rate",
    tag = "Rooms",
    request_body = UpdateRatePayload,
    params(("id" = i32, Path, description = "Room type id")),
    responses(
        (status = 200, description = "Rate updated", body = RoomType),
        (status = 404, description = "Unknown room type")
    )
)]
pub async fn update_room_type_rate(
    State(app_state): State<AppState>,
    Path(type_id): Path<i32>,
    AppJson(payload): AppJson<UpdateRatePayload>,
) -> Result<impl IntoResponse, AppError> {
    let room_type = app_state
        .room_service
        .update_rate(&app_state.db_pool, type_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(room_type)))
}

// =============================================================================
//  ROOMS
// =============================================================================

// POST /api/rooms
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = "Rooms",
    request_body = CreateRoomPayload,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 404, description = "Unknown room type"),
        (status = 409, description = "Room number already in use")
    )
)]
pub async fn create_room(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateRoomPayload>,
) -> Result<impl IntoResponse, AppError> {
    let room = app_state.room_service.create_room(&app_state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

// GET /api/rooms
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "Rooms",
    responses((status = 200, description = "All rooms by floor and number", body = Vec<Room>))
)]
pub async fn list_rooms(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = app_state.room_service.list_rooms(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(rooms)))
}

// GET /api/rooms/available
#[utoipa::path(
    get,
    path = "/api/rooms/available",
    tag = "Rooms",
    responses((status = 200, description = "Vacant rooms", body = Vec<Room>))
)]
pub async fn list_available_rooms(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = app_state.room_service.list_available_rooms(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(rooms)))
}

// GET /api/rooms/floors
#[utoipa::path(
    get,
    path = "/api/rooms/floors",
    tag = "Rooms",
    responses((status = 200, description = "Floors that have rooms", body = Vec<i32>))
)]
pub async fn list_floors(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let floors = app_state.room_service.list_floors(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(floors)))
}

// GET /api/rooms/{id}
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, description = "The room", body = Room),
        (status = 404, description = "Unknown room")
    )
)]
pub async fn get_room(
    State(app_state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = app_state.room_service.get_room(&app_state.db_pool, room_id).await?;
    Ok((StatusCode::OK, Json(room)))
}

// DELETE /api/rooms/{id}
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, description = "Room deleted", body = Room),
        (status = 404, description = "Unknown room"),
        (status = 409, description = "Room occupied or referenced by stays")
    )
)]
pub async fn delete_room(
    State(app_state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = app_state.room_service.delete_room(&app_state.db_pool, room_id).await?;
    Ok((StatusCode::OK, Json(room)))
}
