pub mod models;
pub mod pii;

pub use models::events::{BookingRequestedEvent, EventModeratedEvent, EventSubmittedEvent, ModerationOutcome};
pub use pii::Masked;
