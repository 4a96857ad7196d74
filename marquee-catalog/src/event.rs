use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use marquee_shared::Masked;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type EventId = u64;

/// Lifecycle of a listed event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Approved => "approved",
            EventStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named pricing option on an event. Prices are whole rupees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingTier {
    pub label: String,
    pub price: u32,
    pub available: bool,
    pub description: Option<String>,
}

impl PricingTier {
    pub fn new(label: impl Into<String>, price: u32) -> Self {
        Self {
            label: label.into(),
            price,
            available: true,
            description: None,
        }
    }

    pub fn sold_out(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Stable reference (URL) to an uploaded image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        ImageRef(value.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organizer {
    pub name: String,
    pub email: Masked<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventPolicies {
    pub cancellation: String,
    pub refund: String,
    pub age_limit: Option<String>,
    pub dress_code: Option<String>,
}

/// A listed event with its pricing tiers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: EventId,
    pub name: String,
    pub artist: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub address: String,
    pub maps_link: Option<String>,
    pub description: String,
    pub images: Vec<ImageRef>,
    pub pricing: Vec<PricingTier>,
    /// Chat contact, phone-like (e.g. `+918446522752`)
    pub whatsapp: Masked<String>,
    pub organizer: Organizer,
    pub policies: EventPolicies,
    pub status: EventStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
}

impl EventRecord {
    /// Cheapest tier price, available or not. `None` for an event without tiers.
    pub fn min_price(&self) -> Option<u32> {
        self.pricing.iter().map(|t| t.price).min()
    }

    pub fn tier(&self, label: &str) -> Option<&PricingTier> {
        self.pricing.iter().find(|t| t.label == label)
    }
}

/// A validated organizer submission that has not been assigned an id yet.
///
/// Always enters the catalog as [`EventStatus::Pending`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventCandidate {
    pub name: String,
    pub artist: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub address: String,
    pub maps_link: Option<String>,
    pub description: String,
    pub images: Vec<ImageRef>,
    pub pricing: Vec<PricingTier>,
    pub whatsapp: Masked<String>,
    pub organizer: Organizer,
    pub policies: EventPolicies,
}

impl EventCandidate {
    pub fn status(&self) -> EventStatus {
        EventStatus::Pending
    }

    pub fn into_record(self, id: EventId, submitted_at: DateTime<Utc>) -> EventRecord {
        EventRecord {
            id,
            name: self.name,
            artist: self.artist,
            date: self.date,
            time: self.time,
            location: self.location,
            address: self.address,
            maps_link: self.maps_link,
            description: self.description,
            images: self.images,
            pricing: self.pricing,
            whatsapp: self.whatsapp,
            organizer: self.organizer,
            policies: self.policies,
            status: EventStatus::Pending,
            submitted_at: Some(submitted_at),
            rejection_reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_min_price() {
        let mut event = fixtures::event(1, "Mumbai", &[1599, 1299, 2999]);
        assert_eq!(event.min_price(), Some(1299));

        // sold-out tiers still count towards the band
        event.pricing[1].available = false;
        assert_eq!(event.min_price(), Some(1299));

        event.pricing.clear();
        assert_eq!(event.min_price(), None);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&EventStatus::Approved).unwrap(), "\"approved\"");
        let status: EventStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, EventStatus::Rejected);
    }

    #[test]
    fn test_candidate_enters_as_pending() {
        let record = fixtures::event(7, "Pune", &[499]);
        let candidate = EventCandidate {
            name: record.name.clone(),
            artist: record.artist.clone(),
            date: record.date,
            time: record.time,
            location: record.location.clone(),
            address: record.address.clone(),
            maps_link: None,
            description: record.description.clone(),
            images: vec![],
            pricing: record.pricing.clone(),
            whatsapp: record.whatsapp.clone(),
            organizer: record.organizer.clone(),
            policies: record.policies.clone(),
        };
        assert_eq!(candidate.status(), EventStatus::Pending);

        let now = Utc::now();
        let stored = candidate.into_record(42, now);
        assert_eq!(stored.id, 42);
        assert_eq!(stored.status, EventStatus::Pending);
        assert_eq!(stored.submitted_at, Some(now));
        assert!(stored.rejection_reason.is_none());
    }
}
