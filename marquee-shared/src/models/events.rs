use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An organizer's event entered the approval queue.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct EventSubmittedEvent {
    pub event_id: u64,
    pub event_name: String,
    pub organizer_name: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "decision", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationOutcome {
    Approved,
    Rejected { reason: String },
}

/// An admin approved or rejected a pending event.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct EventModeratedEvent {
    pub event_id: u64,
    pub outcome: ModerationOutcome,
    pub decided_at: DateTime<Utc>,
}

/// A buyer asked to pay for a ticket tier.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct BookingRequestedEvent {
    pub request_id: Uuid,
    pub event_id: u64,
    pub tier: String,
    pub price: u32,
    pub requested_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderation_outcome_wire_format() {
        let rejected = ModerationOutcome::Rejected { reason: "Duplicate listing".to_string() };
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json["decision"], "REJECTED");
        assert_eq!(json["reason"], "Duplicate listing");

        let approved = serde_json::to_value(ModerationOutcome::Approved).unwrap();
        assert_eq!(approved, serde_json::json!({ "decision": "APPROVED" }));
    }
}
