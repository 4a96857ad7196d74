use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for contact data (phone numbers, emails) that masks its value in Debug and Display output.
///
/// Serialization is transparent: API responses need the real value, log macros like
/// `tracing::info!("{:?}", event)` must not see it.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    /// Borrow the underlying value. Call sites that use this are the ones that leak it.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Masked(value.to_string())
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Masked(value)
    }
}
