// src/handlers/staff.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{error::AppError, extract::AppJson},
    config::AppState,
    models::{
        schedule::ScheduleEntry,
        staff::{Employee, HireEmployeePayload},
    },
};

// POST /api/employees
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Staff",
    request_body = HireEmployeePayload,
    responses(
        (status = 201, description = "Employee hired", body = Employee),
        (status = 400, description = "First and last name are required")
    )
)]
pub async fn hire_employee(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<HireEmployeePayload>,
) -> Result<impl IntoResponse, AppError> {
    let employee = app_state.staff_service.hire(&app_state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

// GET /api/employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Staff",
    responses((status = 200, description = "Employee roster", body = Vec<Employee>))
)]
pub async fn list_employees(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let employees = app_state.staff_service.list_employees(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(employees)))
}

// GET /api/employees/{id}
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Staff",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 404, description = "Unknown employee")
    )
)]
pub async fn get_employee(
    State(app_state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let employee = app_state.staff_service.get_employee(&app_state.db_pool, employee_id).await?;
    Ok((StatusCode::OK, Json(employee)))
}

// DELETE /api/employees/{id}
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Staff",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee dismissed with their schedule entries", body = Employee),
        (status = 404, description = "Unknown employee")
    )
)]
pub async fn dismiss_employee(
    State(app_state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let employee = app_state.staff_service.dismiss(&app_state.db_pool, employee_id).await?;
    Ok((StatusCode::OK, Json(employee)))
}

// GET /api/employees/{id}/schedule
#[utoipa::path(
    get,
    path = "/api/employees/{id}/schedule",
    tag = "Staff",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "The employee's cleaning assignments", body = Vec<ScheduleEntry>),
        (status = 404, description = "Unknown employee")
    )
)]
pub async fn employee_schedule(
    State(app_state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    // 404 for unknown ids instead of an empty list.
    app_state.staff_service.get_employee(&app_state.db_pool, employee_id).await?;

    let entries = app_state
        .schedule_service
        .entries_for_employee(&app_state.db_pool, employee_id)
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}
