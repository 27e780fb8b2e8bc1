// src/routes.rs

use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn router(app_state: AppState) -> Router {
    let room_routes = Router::new()
        .route("/", post(handlers::rooms::create_room).get(handlers::rooms::list_rooms))
        .route("/available", get(handlers::rooms::list_available_rooms))
        .route("/floors", get(handlers::rooms::list_floors))
        .route("/{id}", get(handlers::rooms::get_room).delete(handlers::rooms::delete_room));

    let room_type_routes = Router::new()
        .route(
            "/",
            post(handlers::rooms::create_room_type).get(handlers::rooms::list_room_types),
        )
        .route("/{id}/rate", put(handlers::rooms::update_room_type_rate));

    let stay_routes = Router::new()
        .route("/", get(handlers::stays::list_current_guests))
        .route("/all", get(handlers::stays::list_all_stays))
        .route("/check-in", post(handlers::stays::check_in))
        .route("/{id}", get(handlers::stays::get_stay))
        .route("/{id}/check-out", post(handlers::stays::check_out))
        .route("/{id}/invoice", get(handlers::stays::get_invoice));

    let employee_routes = Router::new()
        .route(
            "/",
            post(handlers::staff::hire_employee).get(handlers::staff::list_employees),
        )
        .route(
            "/{id}",
            get(handlers::staff::get_employee).delete(handlers::staff::dismiss_employee),
        )
        .route("/{id}/schedule", get(handlers::staff::employee_schedule));

    let schedule_routes = Router::new()
        .route(
            "/",
            post(handlers::schedule::add_schedule_entry).get(handlers::schedule::list_schedule),
        )
        .route("/{id}", axum::routing::delete(handlers::schedule::delete_schedule_entry));

    let report_routes = Router::new()
        .route("/occupancy", get(handlers::reports::occupancy_summary))
        .route("/options", get(handlers::reports::report_options))
        .route("/occupants", get(handlers::reports::occupants_by_room))
        .route("/guests-by-city", get(handlers::reports::guests_by_city))
        .route("/cleaners", get(handlers::reports::cleaners_for_stay))
        .route("/hotel", get(handlers::reports::hotel_report));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .nest("/api/rooms", room_routes)
        .nest("/api/room-types", room_type_routes)
        .nest("/api/stays", stay_routes)
        .nest("/api/employees", employee_routes)
        .nest("/api/schedule", schedule_routes)
        .nest("/api/reports", report_routes)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lazy_pool;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::with_pool(lazy_pool()))
    }

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_check_answers() {
        let response = app()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn check_in_with_blank_fields_is_rejected_before_the_store() {
        let (status, body) = send(
            Method::POST,
            "/api/stays/check-in",
            Some(json!({ "passportNumber": "P1", "firstName": "  ", "roomId": 3 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        // Both names, the city and the check-in date.
        assert_eq!(body["details"].as_object().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn hiring_requires_both_names() {
        let (status, body) = send(Method::POST, "/api/employees", Some(json!({ "firstName": "Ana" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"].as_object().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn schedule_entry_requires_every_field() {
        let (status, body) = send(Method::POST, "/api/schedule", Some(json!({ "employeeId": 5 }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        // Floor and day are missing.
        assert_eq!(body["details"].as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn negative_rate_is_rejected() {
        let (status, _) = send(
            Method::POST,
            "/api/room-types",
            Some(json!({ "name": "Suite", "nightlyRate": -10.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rate_beyond_column_precision_is_rejected() {
        let (status, body) = send(
            Method::POST,
            "/api/room-types",
            Some(json!({ "name": "Penthouse", "nightlyRate": 1000000000 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"].as_object().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_check_in_date_is_a_validation_error() {
        let (status, body) = send(
            Method::POST,
            "/api/stays/check-in",
            Some(json!({
                "passportNumber": "P1", "lastName": "Doe", "firstName": "Jane",
                "city": "Porto", "checkInDate": "2024-13-45", "roomId": 3
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"]["body"][0].as_str().unwrap().contains("checkInDate"));
    }

    #[tokio::test]
    async fn wrongly_typed_or_missing_fields_are_validation_errors() {
        let (status, body) = send(
            Method::POST,
            "/api/stays/check-in",
            Some(json!({ "passportNumber": "P1", "roomId": "twelve" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"]["body"].is_array());

        let (status, _) = send(Method::POST, "/api/rooms", Some(json!({ "roomNumber": "101" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn body_without_json_content_type_is_rejected() {
        let request = Request::post("/api/employees")
            .body(Body::from(r#"{"lastName": "Silva", "firstName": "Ana"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn blank_city_is_rejected() {
        let (status, body) = send(Method::GET, "/api/reports/guests-by-city?city=%20", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "city is required");
    }

    #[tokio::test]
    async fn unknown_weekday_is_rejected() {
        let (status, _) = send(Method::GET, "/api/reports/cleaners?stay_id=1&day=Funday", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn openapi_document_lists_the_booking_operations() {
        let (status, body) = send(Method::GET, "/api/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        let paths = body["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/stays/check-in"));
        assert!(paths.contains_key("/api/stays/{id}/check-out"));
        assert!(paths.contains_key("/api/reports/hotel"));
    }
}
