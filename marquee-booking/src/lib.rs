pub mod selection;

pub use selection::{SelectionState, TierSelection};
