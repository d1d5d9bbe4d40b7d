//! Integration tests for workshop HTTP endpoints.
//!
//! These tests verify the workshop pages through the application router:
//! 1. Static content is served
//! 2. Participant input is validated and acknowledged
//! 3. Unknown cases return 404

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use equity_workshop::adapters::http::app_router;
use equity_workshop::config::AppConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app_router(&AppConfig::default())
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// =============================================================================
// Content
// =============================================================================

#[tokio::test]
async fn workshop_info_includes_footer() {
    let (status, json) = get("/api/workshop").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["presenter"], "Prof. Salome Bukachi");
    assert_eq!(json["footer"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn introduction_is_served() {
    let (status, json) = get("/api/workshop/introduction").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["heading"], "Gender-Responsive Workplaces");
    assert_eq!(json["benefits"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn case_list_has_five_labels() {
    let (status, json) = get("/api/workshop/cases").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 5);
    assert_eq!(json["cases"][2]["label"], "Case 3: The Broken Ladder");
}

#[tokio::test]
async fn case_study_is_found_by_id() {
    let (status, json) = get("/api/workshop/cases/4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "The Dedicated Father vs. Distracted Mother");
    assert_eq!(json["questions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_case_is_not_found() {
    let (status, json) = get("/api/workshop/cases/9").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "CASE_STUDY_NOT_FOUND");
}

#[tokio::test]
async fn non_numeric_case_id_is_bad_request() {
    let (status, json) = get("/api/workshop/cases/first").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

// =============================================================================
// Participant input
// =============================================================================

#[tokio::test]
async fn reflection_summarizes_selection() {
    let (status, json) = post(
        "/api/workshop/reflections",
        json!({"selected": ["pay_gap", "unheard_in_meetings"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["selected_count"], 2);
    assert_eq!(json["summary"]["insights"][0]["topic"], "Pay disparities");
}

#[tokio::test]
async fn empty_reflection_has_no_summary() {
    let (status, json) = post("/api/workshop/reflections", json!({"selected": []})).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["summary"].is_null());
}

#[tokio::test]
async fn complete_group_response_is_acknowledged() {
    let (status, json) = post(
        "/api/workshop/cases/2/responses",
        json!({
            "insights": "Negotiation norms differ",
            "proposed_solutions": "Publish salary bands"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["case_id"], 2);
    assert_eq!(json["heading"], "Thank you for sharing your insights!");
}

#[tokio::test]
async fn incomplete_group_response_is_rejected() {
    let (status, json) = post(
        "/api/workshop/cases/2/responses",
        json!({"insights": "Negotiation norms differ", "proposed_solutions": "  "}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "EMPTY_FIELD");
    assert_eq!(
        json["message"],
        "Please enter both insights and proposed solutions before sharing."
    );
    assert_eq!(json["details"]["field"], "proposed_solutions");
}

#[tokio::test]
async fn response_to_unknown_case_is_not_found() {
    let (status, _) = post(
        "/api/workshop/cases/7/responses",
        json!({"insights": "a", "proposed_solutions": "b"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn commitment_is_attributed() {
    let (status, json) = post(
        "/api/workshop/commitments",
        json!({
            "name": "Amina",
            "department": "Vector Biology",
            "commitment_type": "challenging_bias",
            "commitment": "Interrupt interruptions in meetings"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["commitment"]["attribution"],
        "Amina from Vector Biology commits to:"
    );
    assert_eq!(json["commitment"]["area"], "Challenging Bias");
    assert_eq!(json["encouragement_heading"], "Making Change Happen");
    assert_eq!(json["encouragement"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn blank_commitment_is_rejected() {
    let (status, json) = post("/api/workshop/commitments", json!({"commitment": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "EMPTY_FIELD");
    assert_eq!(
        json["message"],
        "Please enter your commitment before submitting."
    );
    assert_eq!(json["details"]["field"], "commitment");
}

#[tokio::test]
async fn sample_commitments_are_listed() {
    let (status, json) = get("/api/workshop/commitments/samples").await;

    assert_eq!(status, StatusCode::OK);
    let samples = json["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 3);
    assert_eq!(
        samples[0]["attribution"],
        "Dr. Thomas Odhiambo from Entomology commits to:"
    );
}
