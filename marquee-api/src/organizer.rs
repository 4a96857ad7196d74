use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use marquee_core::submission::SubmissionReceipt;
use marquee_draft::{submit_to, DraftForm};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/organizer/submissions", post(submit_event))
}

/// POST /v1/organizer/submissions
pub async fn submit_event(
    State(state): State<AppState>,
    Json(draft): Json<DraftForm>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), AppError> {
    let receipt = submit_to(&draft, state.submissions.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
