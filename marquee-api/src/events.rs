use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use marquee_booking::TierSelection;
use marquee_catalog::{filter_events, CatalogProvider, EventId, EventRecord, EventStatus, FilterState, StatusFilter};
use marquee_core::booking::BookingReceipt;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListEventsQuery {
    pub q: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
}

impl ListEventsQuery {
    /// Public listings only ever show approved events
    pub fn to_filter(&self) -> Result<FilterState, AppError> {
        let mut state = FilterState::public()
            .with_query(self.q.clone().unwrap_or_default())
            .with_status(StatusFilter::Only(EventStatus::Approved));
        if let Some(location) = &self.location {
            state = state.with_location(location.parse()?);
        }
        if let Some(price) = &self.price {
            state = state.with_price(price.parse()?);
        }
        Ok(state)
    }
}

#[derive(Debug, Deserialize)]
pub struct BookingBody {
    pub tier: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatLinkResponse {
    pub url: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/events", get(list_events))
        .route("/v1/events/{id}", get(get_event))
        .route("/v1/events/{id}/chat-link", get(chat_link))
        .route("/v1/events/{id}/bookings", post(book_event))
}

async fn public_event(state: &AppState, id: EventId) -> Result<EventRecord, AppError> {
    state
        .catalog
        .read()
        .await
        .get(id)
        .filter(|e| e.status == EventStatus::Approved)
        .ok_or_else(|| AppError::NotFoundError(format!("Event not found: {}", id)))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<Vec<EventRecord>>, AppError> {
    let filter = query.to_filter()?;
    let catalog = state.catalog.read().await;
    let events: Vec<EventRecord> = filter_events(catalog.as_slice(), &filter).into_iter().cloned().collect();

    tracing::debug!(?filter, matched = events.len(), "Listing events");
    Ok(Json(events))
}

/// GET /v1/events/{id}
pub async fn get_event(State(state): State<AppState>, Path(id): Path<EventId>) -> Result<Json<EventRecord>, AppError> {
    Ok(Json(public_event(&state, id).await?))
}

/// GET /v1/events/{id}/chat-link
pub async fn chat_link(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<ChatLinkResponse>, AppError> {
    let event = public_event(&state, id).await?;
    Ok(Json(ChatLinkResponse {
        url: state.chat.link(event.whatsapp.expose(), &event.name),
    }))
}

/// POST /v1/events/{id}/bookings
///
/// Each request is a fresh detail view: select the tier (if any), then book.
pub async fn book_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Json(body): Json<BookingBody>,
) -> Result<(StatusCode, Json<BookingReceipt>), AppError> {
    let event = public_event(&state, id).await?;

    let mut selection = TierSelection::new(&event);
    if let Some(tier) = body.tier.as_deref() {
        selection.select(tier)?;
    }

    let receipt = selection.checkout(state.bookings.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
