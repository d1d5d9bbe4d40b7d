//! HTTP handlers for workshop endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    GetCaseStudyHandler, GetCaseStudyQuery, GetIntroductionHandler, GetIntroductionQuery,
    ListCaseStudiesHandler, ListCaseStudiesQuery, ListSampleCommitmentsHandler,
    ListSampleCommitmentsQuery, ShareCaseResponseCommand, ShareCaseResponseHandler,
    SubmitCommitmentCommand, SubmitCommitmentHandler, SubmitReflectionCommand,
    SubmitReflectionHandler,
};
use crate::domain::workshop::Introduction;

use super::dto::{
    CaseStudyResponse, ListCaseStudiesResponse, ReflectionRequest, ReflectionResponse,
    SampleCommitmentsResponse, ShareCaseResponseRequest, ShareCaseResponseResponse,
    SubmitCommitmentRequest, SubmitCommitmentResponse, WorkshopInfoResponse,
};

/// Application state for workshop endpoints.
#[derive(Debug, Clone, Default)]
pub struct WorkshopAppState {
    /// Explain unreadable request bodies in error responses
    pub verbose_errors: bool,
}

impl WorkshopAppState {
    pub fn new(verbose_errors: bool) -> Self {
        Self { verbose_errors }
    }
}

fn parse_case_id(raw: &str) -> Result<u8, ApiError> {
    raw.parse::<u8>()
        .map_err(|_| ApiError::bad_request(format!("Invalid case id: {}", raw)))
}

/// Get workshop details and footer.
///
/// GET /api/workshop
pub async fn get_workshop_info() -> Json<WorkshopInfoResponse> {
    Json(GetIntroductionHandler::new().workshop_info().into())
}

/// Get the introduction page content.
///
/// GET /api/workshop/introduction
pub async fn get_introduction() -> Json<Introduction> {
    Json(GetIntroductionHandler::new().handle(GetIntroductionQuery))
}

/// Summarize reflection selections.
///
/// POST /api/workshop/reflections
pub async fn submit_reflection(
    State(state): State<WorkshopAppState>,
    payload: Result<Json<ReflectionRequest>, JsonRejection>,
) -> Result<Json<ReflectionResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::from_rejection(e, state.verbose_errors))?;
    let summary = SubmitReflectionHandler::new().handle(SubmitReflectionCommand {
        selected: request.selected,
    });
    Ok(Json(ReflectionResponse { summary }))
}

/// List case studies.
///
/// GET /api/workshop/cases
pub async fn list_case_studies() -> Json<ListCaseStudiesResponse> {
    Json(ListCaseStudiesHandler::new().handle(ListCaseStudiesQuery).into())
}

/// Get a case study.
///
/// GET /api/workshop/cases/:id
pub async fn get_case_study(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let case_id = parse_case_id(&id)?;
    let case = GetCaseStudyHandler::new().handle(GetCaseStudyQuery { case_id })?;

    Ok(Json(CaseStudyResponse::from(case)))
}

/// Share a group's response to a case study.
///
/// POST /api/workshop/cases/:id/responses
pub async fn share_case_response(
    State(state): State<WorkshopAppState>,
    Path(id): Path<String>,
    payload: Result<Json<ShareCaseResponseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let case_id = parse_case_id(&id)?;
    let Json(request) = payload.map_err(|e| ApiError::from_rejection(e, state.verbose_errors))?;
    let result = ShareCaseResponseHandler::new().handle(ShareCaseResponseCommand {
        case_id,
        insights: request.insights,
        proposed_solutions: request.proposed_solutions,
    })?;

    Ok(Json(ShareCaseResponseResponse::from(result)))
}

/// List the example commitments.
///
/// GET /api/workshop/commitments/samples
pub async fn list_sample_commitments() -> Json<SampleCommitmentsResponse> {
    Json(
        ListSampleCommitmentsHandler::new()
            .handle(ListSampleCommitmentsQuery)
            .into(),
    )
}

/// Add a commitment to the wall.
///
/// POST /api/workshop/commitments
pub async fn submit_commitment(
    State(state): State<WorkshopAppState>,
    payload: Result<Json<SubmitCommitmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::from_rejection(e, state.verbose_errors))?;
    let result = SubmitCommitmentHandler::new().handle(SubmitCommitmentCommand {
        name: request.name,
        department: request.department,
        commitment_type: request.commitment_type,
        commitment: request.commitment,
    })?;

    Ok(Json(SubmitCommitmentResponse::from(result)))
}
