pub mod event;
pub mod filter;
pub mod provider;
pub mod fixtures;
pub mod store;

pub use event::{EventCandidate, EventId, EventPolicies, EventRecord, EventStatus, ImageRef, Organizer, PricingTier};
pub use filter::{filter_events, FilterParseError, FilterState, LocationFilter, PriceBand, SearchScope, StatusFilter};
pub use provider::{CatalogProvider, StaticCatalog};
pub use store::{InMemoryCatalog, ModerationError, ModerationSummary};
