use async_trait::async_trait;
use marquee_catalog::{EventCandidate, EventId, EventStatus};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::CoreResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub event_id: EventId,
    pub status: EventStatus,
}

/// Accepts validated organizer submissions into the approval queue
#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, candidate: EventCandidate) -> CoreResult<SubmissionReceipt>;
}

/// Accepts everything and hands out increasing ids
pub struct MockSubmissionService {
    next_id: AtomicU64,
}

impl MockSubmissionService {
    pub fn new(first_id: EventId) -> Self {
        Self {
            next_id: AtomicU64::new(first_id),
        }
    }
}

impl Default for MockSubmissionService {
    fn default() -> Self {
        Self::new(1)
    }
}

#[async_trait]
impl SubmissionService for MockSubmissionService {
    async fn submit(&self, candidate: EventCandidate) -> CoreResult<SubmissionReceipt> {
        let event_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::info!(event_id, name = %candidate.name, "Mock submission accepted");

        Ok(SubmissionReceipt {
            event_id,
            status: candidate.status(),
        })
    }
}
