pub mod validation;
pub mod submission;
pub mod approval;
pub mod booking;
pub mod images;
pub mod chat;

use marquee_catalog::{EventId, EventStatus, ModerationError};

pub use validation::{FieldIssue, IssueKind, ValidationError};

/// A guarded tier-selection or booking action was refused. State is left unchanged.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SelectionGuardViolation {
    #[error("Please select a ticket tier first!")]
    NoTierSelected,

    #[error("Tier '{0}' is sold out")]
    TierUnavailable(String),

    #[error("Tier '{0}' is not offered for this event")]
    UnknownTier(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    SelectionGuard(#[from] SelectionGuardViolation),
    #[error("Index {index} out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },
    #[error("Event not found: {0}")]
    NotFound(EventId),
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: EventStatus, to: EventStatus },
    #[error("Collaborator request failed: {0}")]
    Collaborator(String),
}

impl From<ModerationError> for CoreError {
    fn from(err: ModerationError) -> Self {
        match err {
            ModerationError::NotFound(id) => CoreError::NotFound(id),
            ModerationError::InvalidTransition { from, to } => CoreError::InvalidTransition { from, to },
            ModerationError::MissingReason => {
                CoreError::Validation(ValidationError::single("reason", IssueKind::Missing))
            }
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
