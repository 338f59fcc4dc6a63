//! Integration tests for the volunteer endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, location, post_form, test_pool};

async fn register(app: &axum::Router, name: &str, skills: &str, availability: &str) -> serde_json::Value {
    let response = post_form(
        app.clone(),
        "/volunteers/register",
        &[("name", name), ("skills", skills), ("availability", availability)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Test: registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_redirects_with_notice() {
    let app = build_test_app(test_pool().await);

    let response = post_form(
        app.clone(),
        "/volunteers/register",
        &[
            ("name", "Dr. Sarah Chen"),
            ("skills", "Emergency Medicine, Trauma Care"),
            ("availability", "Full-time"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/volunteers");

    let json = body_json(response).await;
    assert_eq!(
        json["notice"]["message"],
        "Personnel registered and ready for deployment"
    );
    assert_eq!(json["data"]["availability"], "Full-time");

    let id = json["data"]["id"].as_i64().unwrap();
    let json = body_json(get(app, &format!("/volunteers/{id}")).await).await;
    assert_eq!(json["data"]["name"], "Dr. Sarah Chen");
}

#[tokio::test]
async fn unknown_availability_is_rejected() {
    let app = build_test_app(test_pool().await);

    let response = post_form(
        app.clone(),
        "/volunteers/register",
        &[
            ("name", "James Wilson"),
            ("skills", "Logistics"),
            ("availability", "Sometimes"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/volunteers/register");
    let json = body_json(response).await;
    assert_eq!(json["notice"]["level"], "error");
    assert_eq!(
        json["data"]["errors"],
        serde_json::json!(["Deployment capacity must be one of: Full-time, Part-time, Weekends, On-call"])
    );

    let json = body_json(get(app, "/volunteers").await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn empty_registration_reports_every_field() {
    let app = build_test_app(test_pool().await);

    let response = post_form(app, "/volunteers/register", &[]).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/volunteers/register");
    let json = body_json(response).await;
    assert_eq!(json["data"]["errors"].as_array().unwrap().len(), 3);
    assert_eq!(
        json["notice"]["message"],
        "Full name is required; Professional expertise is required; \
         Deployment capacity is required"
    );
}

// ---------------------------------------------------------------------------
// Test: list and search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_most_recent_first() {
    let app = build_test_app(test_pool().await);
    register(&app, "Marcus Rodriguez", "Structural Engineering", "Full-time").await;
    register(&app, "Emily Thompson", "Public Health", "Part-time").await;

    let json = body_json(get(app, "/volunteers").await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, ["Emily Thompson", "Marcus Rodriguez"]);
}

#[tokio::test]
async fn search_matches_skill_substring_ignoring_case() {
    let app = build_test_app(test_pool().await);
    register(&app, "Dr. Aisha Patel", "Emergency Medicine, Pediatrics", "On-call").await;
    register(&app, "James Wilson", "Logistics, Supply Chain", "Full-time").await;

    let response = get(app, "/volunteers/search?skill=medicine").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Dr. Aisha Patel");
}

#[tokio::test]
async fn search_requires_skill() {
    let app = build_test_app(test_pool().await);

    for uri in ["/volunteers/search", "/volunteers/search?skill=", "/volunteers/search?skill=%20"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn unknown_volunteer_returns_404() {
    let app = build_test_app(test_pool().await);
    let response = get(app, "/volunteers/42").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Volunteer with id 42 not found");
}

#[tokio::test]
async fn registration_form_lists_availability_options() {
    let app = build_test_app(test_pool().await);
    let json = body_json(get(app, "/volunteers/register").await).await;

    let fields = json["data"]["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[2]["kind"], "choice");
    assert_eq!(
        fields[2]["options"],
        serde_json::json!(["Full-time", "Part-time", "Weekends", "On-call"])
    );
}

#[tokio::test]
async fn list_falls_back_to_empty_with_notice() {
    let pool = test_pool().await;
    sqlx::query("DROP TABLE volunteers")
        .execute(&pool)
        .await
        .unwrap();
    let app = build_test_app(pool);

    let json = body_json(get(app, "/volunteers").await).await;

    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["notice"]["level"], "error");
}

#[tokio::test]
async fn register_reports_storage_failure_as_500() {
    let pool = test_pool().await;
    sqlx::query("DROP TABLE volunteers")
        .execute(&pool)
        .await
        .unwrap();
    let app = build_test_app(pool);

    let response = post_form(
        app,
        "/volunteers/register",
        &[
            ("name", "Thomas O'Brien"),
            ("skills", "Electrical Engineering"),
            ("availability", "Weekends"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred. Please try again.");
}
