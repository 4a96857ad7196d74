use async_trait::async_trait;
use marquee_catalog::{EventId, EventStatus};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, IssueKind, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ApprovalDecision {
    Approve,
    Reject { reason: String },
}

impl ApprovalDecision {
    pub fn target_status(&self) -> EventStatus {
        match self {
            ApprovalDecision::Approve => EventStatus::Approved,
            ApprovalDecision::Reject { .. } => EventStatus::Rejected,
        }
    }
}

/// Applies an admin decision to a pending event
#[async_trait]
pub trait ApprovalService: Send + Sync {
    /// Returns the event's new status
    async fn decide(&self, event_id: EventId, decision: ApprovalDecision) -> CoreResult<EventStatus>;
}

/// Accepts every decision that carries the data it needs
pub struct MockApprovalService;

#[async_trait]
impl ApprovalService for MockApprovalService {
    async fn decide(&self, event_id: EventId, decision: ApprovalDecision) -> CoreResult<EventStatus> {
        if let ApprovalDecision::Reject { reason } = &decision {
            if reason.trim().is_empty() {
                return Err(CoreError::Validation(ValidationError::single("reason", IssueKind::Missing)));
            }
        }

        tracing::info!(event_id, ?decision, "Mock approval decision recorded");
        Ok(decision.target_status())
    }
}
