use async_trait::async_trait;
use marquee_catalog::{EventCandidate, EventId, EventStatus};
use marquee_core::approval::{ApprovalDecision, ApprovalService};
use marquee_core::submission::{SubmissionReceipt, SubmissionService};
use marquee_core::CoreResult;

use crate::state::SharedCatalog;

/// Submissions land straight in the shared catalog as pending events
pub struct CatalogSubmissionService {
    catalog: SharedCatalog,
}

impl CatalogSubmissionService {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl SubmissionService for CatalogSubmissionService {
    async fn submit(&self, candidate: EventCandidate) -> CoreResult<SubmissionReceipt> {
        let submitted = self.catalog.write().await.insert(candidate);
        tracing::debug!(?submitted, "Submission stored");

        Ok(SubmissionReceipt {
            event_id: submitted.event_id,
            status: EventStatus::Pending,
        })
    }
}

/// Moderation decisions applied to the shared catalog
pub struct CatalogApprovalService {
    catalog: SharedCatalog,
}

impl CatalogApprovalService {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ApprovalService for CatalogApprovalService {
    async fn decide(&self, event_id: EventId, decision: ApprovalDecision) -> CoreResult<EventStatus> {
        let mut catalog = self.catalog.write().await;
        let moderated = match &decision {
            ApprovalDecision::Approve => catalog.approve(event_id)?,
            ApprovalDecision::Reject { reason } => catalog.reject(event_id, reason)?,
        };
        tracing::debug!(?moderated, "Moderation applied");

        Ok(decision.target_status())
    }
}
