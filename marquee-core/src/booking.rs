use async_trait::async_trait;
use chrono::{DateTime, Utc};
use marquee_catalog::EventId;
use marquee_shared::BookingRequestedEvent;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

use crate::CoreResult;

/// Payment hand-off for one selected tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    pub request_id: Uuid,
    pub event_id: EventId,
    pub event_name: String,
    pub tier: String,
    /// Whole rupees
    pub price: u32,
    pub requested_at: DateTime<Utc>,
}

impl BookingRequest {
    pub fn to_event(&self) -> BookingRequestedEvent {
        BookingRequestedEvent {
            request_id: self.request_id,
            event_id: self.event_id,
            tier: self.tier.clone(),
            price: self.price,
            requested_at: self.requested_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingReceipt {
    pub request_id: Uuid,
    /// Where the buyer continues to pay
    pub redirect_url: String,
}

#[async_trait]
pub trait BookingService: Send + Sync {
    async fn request_booking(&self, request: BookingRequest) -> CoreResult<BookingReceipt>;
}

/// Answers every request with a redirect to `{payment_base_url}/{request_id}`
/// and records a `BookingRequestedEvent` per request.
pub struct MockBookingService {
    payment_base_url: String,
    requested: Mutex<Vec<BookingRequestedEvent>>,
}

impl MockBookingService {
    pub fn new(payment_base_url: impl Into<String>) -> Self {
        Self {
            payment_base_url: payment_base_url.into(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Events emitted so far, oldest first
    pub fn requested(&self) -> Vec<BookingRequestedEvent> {
        self.requested.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl BookingService for MockBookingService {
    async fn request_booking(&self, request: BookingRequest) -> CoreResult<BookingReceipt> {
        let event = request.to_event();
        tracing::info!(
            request_id = %event.request_id,
            event_id = event.event_id,
            price = event.price,
            "Redirecting to payment for {} ticket...",
            event.tier
        );
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(event);
        }

        Ok(BookingReceipt {
            request_id: request.request_id,
            redirect_url: format!("{}/{}", self.payment_base_url.trim_end_matches('/'), request.request_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_redirect_url() {
        let service = MockBookingService::new("https://pay.example.com/checkout/");
        let request = BookingRequest {
            request_id: Uuid::new_v4(),
            event_id: 1,
            event_name: "Neon Nights Festival".to_string(),
            tier: "VIP".to_string(),
            price: 2999,
            requested_at: Utc::now(),
        };

        let receipt = service.request_booking(request.clone()).await.unwrap();
        assert_eq!(receipt.request_id, request.request_id);
        assert_eq!(
            receipt.redirect_url,
            format!("https://pay.example.com/checkout/{}", request.request_id)
        );

        let emitted = service.requested();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].request_id, request.request_id);
        assert_eq!(emitted[0].tier, "VIP");
        assert_eq!(emitted[0].price, 2999);
    }
}
