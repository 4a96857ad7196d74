pub mod fields;
pub mod form;
pub mod submit;

/// Upper bound on pricing tiers per event
pub const MAX_TIERS: usize = 5;
/// Upper bound on images per event
pub const MAX_IMAGES: usize = 5;

pub use fields::{DraftField, DraftFields, TierDraft, TierField};
pub use form::{DraftForm, DraftShapeError};
pub use submit::{intake_images, submit_to};
