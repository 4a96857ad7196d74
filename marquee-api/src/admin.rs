use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use marquee_catalog::{filter_events, EventId, EventRecord, EventStatus, FilterState, ModerationSummary};
use marquee_core::approval::ApprovalDecision;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AdminEventsQuery {
    pub q: Option<String>,
    pub status: Option<String>,
}

impl AdminEventsQuery {
    pub fn to_filter(&self) -> Result<FilterState, AppError> {
        let mut state = FilterState::admin().with_query(self.q.clone().unwrap_or_default());
        if let Some(status) = &self.status {
            state = state.with_status(status.parse()?);
        }
        Ok(state)
    }
}

#[derive(Debug, Deserialize)]
pub struct RejectBody {
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub id: EventId,
    pub status: EventStatus,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/admin/events", get(list_events))
        .route("/v1/admin/summary", get(summary))
        .route("/v1/admin/events/{id}/approve", post(approve_event))
        .route("/v1/admin/events/{id}/reject", post(reject_event))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/admin/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<AdminEventsQuery>,
) -> Result<Json<Vec<EventRecord>>, AppError> {
    let filter = query.to_filter()?;
    let catalog = state.catalog.read().await;
    Ok(Json(filter_events(catalog.as_slice(), &filter).into_iter().cloned().collect()))
}

/// GET /v1/admin/summary
pub async fn summary(State(state): State<AppState>) -> Json<ModerationSummary> {
    Json(state.catalog.read().await.summary())
}

/// POST /v1/admin/events/{id}/approve
pub async fn approve_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<DecisionResponse>, AppError> {
    let status = state.approvals.decide(id, ApprovalDecision::Approve).await?;
    Ok(Json(DecisionResponse { id, status }))
}

/// POST /v1/admin/events/{id}/reject
pub async fn reject_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Json(body): Json<RejectBody>,
) -> Result<Json<DecisionResponse>, AppError> {
    let status = state
        .approvals
        .decide(id, ApprovalDecision::Reject { reason: body.reason })
        .await?;
    Ok(Json(DecisionResponse { id, status }))
}
