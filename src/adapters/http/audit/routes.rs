//! Axum router configuration for audit endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{evaluate_audit, get_audit_form, AuditAppState};

/// Create the audit API router.
///
/// Suitable for mounting at `/api/audit`.
///
/// # Routes
///
/// - `GET /dimensions` - Form definition for the five rating inputs
/// - `POST /evaluate` - Score a submission and return focus areas
pub fn audit_router() -> Router<AuditAppState> {
    Router::new()
        .route("/dimensions", get(get_audit_form))
        .route("/evaluate", post(evaluate_audit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        audit_router().with_state(AuditAppState::default())
    }

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/evaluate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn dimensions_route_lists_form_fields() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/dimensions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["fields"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn evaluate_route_returns_focus_areas() {
        let (status, json) = post_json(
            r#"{"ratings": [
                {"dimension": "leadership", "value": 5},
                {"dimension": "recruitment", "value": 1},
                {"dimension": "environment", "value": 2},
                {"dimension": "work_life", "value": 4},
                {"dimension": "resources", "value": 3}
            ]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["average_display"], "3.0");
        assert_eq!(json["focus_areas"][0]["dimension"], "recruitment");
        assert_eq!(json["focus_areas"][1]["dimension"], "environment");
    }

    #[tokio::test]
    async fn evaluate_route_rejects_out_of_range() {
        let (status, json) = post_json(
            r#"{"ratings": [
                {"dimension": "leadership", "value": 6},
                {"dimension": "recruitment", "value": 1},
                {"dimension": "environment", "value": 2},
                {"dimension": "work_life", "value": 4},
                {"dimension": "resources", "value": 3}
            ]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn unreadable_body_hides_parser_message_by_default() {
        let (status, json) = post_json(r#"{"ratings": [{"dimension": "salary", "value": 3}]}"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "INVALID_REQUEST_BODY");
        assert_eq!(json["message"], "Request body could not be read");
    }

    #[tokio::test]
    async fn unreadable_body_explained_when_verbose() {
        let response = audit_router()
            .with_state(AuditAppState::new(true))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/evaluate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"ratings": [{"dimension": "salary", "value": 3}]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["message"].as_str().unwrap().contains("salary"));
    }
}
