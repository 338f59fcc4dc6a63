//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use impactbridge_api::error::AppError;
use impactbridge_core::crisis_case::validate_case;
use impactbridge_core::error::CoreError;
use impactbridge_core::form::RawForm;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "CrisisCase",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "CrisisCase with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: validation errors carry the joined message and the list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_messages() {
    let err = validate_case(&RawForm::new()).unwrap_err();
    assert_matches!(&err, CoreError::Validation(errors) if errors.len() == 5);

    let (status, json) = error_to_response(AppError::Core(err)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"].as_array().unwrap().len(), 5);
    assert_eq!(json["errors"][0], "Situation title is required");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Situation title is required; Situation assessment is required"));
}

// ---------------------------------------------------------------------------
// Test: unknown stored variants and bad requests map to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_variant_returns_400() {
    let err = AppError::Core(CoreError::UnknownVariant {
        kind: "availability",
        value: "Sometimes".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Unknown availability 'Sometimes'");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("The 'skill' query parameter is required".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "The 'skill' query parameter is required");
}

// ---------------------------------------------------------------------------
// Test: database errors are sanitized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::Protocol("disk image is malformed".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred. Please try again.");
    assert!(!json.to_string().contains("malformed"));
}
