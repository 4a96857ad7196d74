use crate::event::{EventId, EventRecord};

/// Synchronous, ordered source of event records for a view.
///
/// The filter never cares where records come from: the compiled-in fixtures, the
/// in-memory moderation store, or a persistent store behind the same trait.
pub trait CatalogProvider: Send + Sync {
    /// Every record, in catalog order
    fn events(&self) -> Vec<EventRecord>;

    fn get(&self, id: EventId) -> Option<EventRecord> {
        self.events().into_iter().find(|e| e.id == id)
    }
}

/// Read-only catalog over a fixed list
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    events: Vec<EventRecord>,
}

impl StaticCatalog {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn events(&self) -> Vec<EventRecord> {
        self.events.clone()
    }

    fn get(&self, id: EventId) -> Option<EventRecord> {
        self.events.iter().find(|e| e.id == id).cloned()
    }
}
