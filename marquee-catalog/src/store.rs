use crate::event::{EventCandidate, EventId, EventRecord, EventStatus};
use crate::provider::CatalogProvider;
use chrono::Utc;
use marquee_shared::{EventModeratedEvent, EventSubmittedEvent, ModerationOutcome};
use serde::{Deserialize, Serialize};

/// Counters shown on the admin dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModerationSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// In-memory catalog that accepts submissions and moderation decisions.
///
/// Records keep insertion order; ids are assigned monotonically.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    events: Vec<EventRecord>,
    next_id: EventId,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed with existing records; new ids continue after the highest seeded one.
    pub fn with_events(events: Vec<EventRecord>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { events, next_id }
    }

    /// Store a validated submission as a pending event
    pub fn insert(&mut self, candidate: EventCandidate) -> EventSubmittedEvent {
        let id = self.next_id;
        self.next_id += 1;

        let submitted_at = Utc::now();
        let record = candidate.into_record(id, submitted_at);
        tracing::info!(event_id = id, name = %record.name, "Event submitted for approval");

        let submitted = EventSubmittedEvent {
            event_id: id,
            event_name: record.name.clone(),
            organizer_name: record.organizer.name.clone(),
            submitted_at,
        };
        self.events.push(record);
        submitted
    }

    /// Transition: Pending → Approved
    pub fn approve(&mut self, id: EventId) -> Result<EventModeratedEvent, ModerationError> {
        let event = self.pending_mut(id, EventStatus::Approved)?;
        event.status = EventStatus::Approved;
        tracing::info!(event_id = id, "Event approved");

        Ok(EventModeratedEvent {
            event_id: id,
            outcome: ModerationOutcome::Approved,
            decided_at: Utc::now(),
        })
    }

    /// Transition: Pending → Rejected. A blank reason leaves the event untouched.
    pub fn reject(&mut self, id: EventId, reason: &str) -> Result<EventModeratedEvent, ModerationError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ModerationError::MissingReason);
        }

        let event = self.pending_mut(id, EventStatus::Rejected)?;
        event.status = EventStatus::Rejected;
        event.rejection_reason = Some(reason.to_string());
        tracing::info!(event_id = id, reason, "Event rejected");

        Ok(EventModeratedEvent {
            event_id: id,
            outcome: ModerationOutcome::Rejected { reason: reason.to_string() },
            decided_at: Utc::now(),
        })
    }

    pub fn summary(&self) -> ModerationSummary {
        self.events.iter().fold(
            ModerationSummary {
                total: self.events.len(),
                ..ModerationSummary::default()
            },
            |mut acc, e| {
                match e.status {
                    EventStatus::Pending => acc.pending += 1,
                    EventStatus::Approved => acc.approved += 1,
                    EventStatus::Rejected => acc.rejected += 1,
                }
                acc
            },
        )
    }

    pub fn as_slice(&self) -> &[EventRecord] {
        &self.events
    }

    fn pending_mut(&mut self, id: EventId, to: EventStatus) -> Result<&mut EventRecord, ModerationError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ModerationError::NotFound(id))?;

        if event.status != EventStatus::Pending {
            return Err(ModerationError::InvalidTransition { from: event.status, to });
        }
        Ok(event)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn events(&self) -> Vec<EventRecord> {
        self.events.clone()
    }

    fn get(&self, id: EventId) -> Option<EventRecord> {
        self.events.iter().find(|e| e.id == id).cloned()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModerationError {
    #[error("Event not found: {0}")]
    NotFound(EventId),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: EventStatus, to: EventStatus },

    #[error("A reason is required to reject an event")]
    MissingReason,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn candidate() -> EventCandidate {
        let e = fixtures::event(0, "Pune", &[799, 1499]);
        EventCandidate {
            name: "Sunburn Arena".to_string(),
            artist: e.artist,
            date: e.date,
            time: e.time,
            location: e.location,
            address: e.address,
            maps_link: None,
            description: e.description,
            images: e.images,
            pricing: e.pricing,
            whatsapp: e.whatsapp,
            organizer: e.organizer,
            policies: e.policies,
        }
    }

    #[test]
    fn test_insert_assigns_next_id() {
        let mut catalog = InMemoryCatalog::with_events(fixtures::sample_events());
        let submitted = catalog.insert(candidate());

        assert_eq!(submitted.event_id, 7);
        assert_eq!(submitted.event_name, "Sunburn Arena");
        let stored = catalog.get(7).unwrap();
        assert_eq!(stored.status, EventStatus::Pending);
        assert!(stored.submitted_at.is_some());

        assert_eq!(InMemoryCatalog::new().insert(candidate()).event_id, 1);
    }

    #[test]
    fn test_moderation_lifecycle() {
        let mut catalog = InMemoryCatalog::with_events(fixtures::sample_events());

        let approved = catalog.approve(4).unwrap();
        assert_eq!(approved.outcome, ModerationOutcome::Approved);
        assert_eq!(catalog.get(4).unwrap().status, EventStatus::Approved);

        let rejected = catalog.reject(5, "  Venue not verified ").unwrap();
        assert_eq!(
            rejected.outcome,
            ModerationOutcome::Rejected { reason: "Venue not verified".to_string() }
        );
        let stored = catalog.get(5).unwrap();
        assert_eq!(stored.status, EventStatus::Rejected);
        assert_eq!(stored.rejection_reason.as_deref(), Some("Venue not verified"));

        assert_eq!(
            catalog.summary(),
            ModerationSummary { total: 6, pending: 1, approved: 4, rejected: 1 }
        );
    }

    #[test]
    fn test_invalid_transitions() {
        let mut catalog = InMemoryCatalog::with_events(fixtures::sample_events());

        // Approved listings cannot be moderated again
        assert_eq!(
            catalog.approve(1),
            Err(ModerationError::InvalidTransition {
                from: EventStatus::Approved,
                to: EventStatus::Approved,
            })
        );
        assert_eq!(catalog.approve(99), Err(ModerationError::NotFound(99)));

        // A blank reason is dropped without touching the event
        assert_eq!(catalog.reject(6, "   "), Err(ModerationError::MissingReason));
        assert_eq!(catalog.get(6).unwrap().status, EventStatus::Pending);
    }
}
