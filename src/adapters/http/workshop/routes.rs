//! Axum router configuration for workshop endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_case_study, get_introduction, get_workshop_info, list_case_studies,
    list_sample_commitments, share_case_response, submit_commitment, submit_reflection,
    WorkshopAppState,
};

/// Create the workshop API router.
///
/// Suitable for mounting at `/api/workshop`.
///
/// # Routes
///
/// - `GET /` - Workshop details and footer
/// - `GET /introduction` - Introduction page content
/// - `POST /reflections` - Summarize reflection selections
/// - `GET /cases` - List case studies
/// - `GET /cases/:id` - Get a case study
/// - `POST /cases/:id/responses` - Share a group response
/// - `GET /commitments/samples` - Example commitments
/// - `POST /commitments` - Add a commitment
pub fn workshop_router() -> Router<WorkshopAppState> {
    Router::new()
        .route("/", get(get_workshop_info))
        .route("/introduction", get(get_introduction))
        .route("/reflections", post(submit_reflection))
        .route("/cases", get(list_case_studies))
        .route("/cases/:id", get(get_case_study))
        .route("/cases/:id/responses", post(share_case_response))
        .route("/commitments", post(submit_commitment))
        .route("/commitments/samples", get(list_sample_commitments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        workshop_router().with_state(WorkshopAppState::default())
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn case_route_returns_case_detail() {
        let (status, json) = send(
            Request::builder()
                .uri("/cases/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["label"], "Case 2: The Salary Secret");
    }

    #[tokio::test]
    async fn commitment_route_warns_on_blank_text() {
        let (status, json) = send(
            Request::builder()
                .method("POST")
                .uri("/commitments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "Amina", "commitment": "   "}"#))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Please enter your commitment before submitting.");
    }

    #[tokio::test]
    async fn reflection_route_rejects_unknown_statement() {
        let (status, json) = send(
            Request::builder()
                .method("POST")
                .uri("/reflections")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"selected": ["not_a_statement"]}"#))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "INVALID_REQUEST_BODY");
    }
}
