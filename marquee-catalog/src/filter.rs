use crate::event::{EventRecord, EventStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Location predicate. `All` is the sentinel that always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    All,
    /// Case-insensitive substring of the event's location
    Contains(String),
}

impl FromStr for LocationFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(LocationFilter::All)
        } else {
            Ok(LocationFilter::Contains(s.to_string()))
        }
    }
}

/// Price band, evaluated against the cheapest tier of an event
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceBand {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "under1000")]
    Under1000,
    #[serde(rename = "1000-2000")]
    From1000To2000,
    #[serde(rename = "above2000")]
    Above2000,
}

impl PriceBand {
    /// Band edges are exact: 1000 and 2000 both fall in `From1000To2000`.
    /// An event without tiers has no floor price and counts as `Above2000`.
    pub fn contains(&self, min_price: Option<u32>) -> bool {
        match (self, min_price) {
            (PriceBand::All, _) => true,
            (PriceBand::Above2000, None) => true,
            (_, None) => false,
            (PriceBand::Under1000, Some(p)) => p < 1000,
            (PriceBand::From1000To2000, Some(p)) => p >= 1000 && p <= 2000,
            (PriceBand::Above2000, Some(p)) => p > 2000,
        }
    }
}

impl FromStr for PriceBand {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PriceBand::All),
            "under1000" => Ok(PriceBand::Under1000),
            "1000-2000" => Ok(PriceBand::From1000To2000),
            "above2000" => Ok(PriceBand::Above2000),
            other => Err(FilterParseError::UnknownPriceBand(other.to_string())),
        }
    }
}

/// Status predicate, used by the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EventStatus),
}

impl FromStr for StatusFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Only(EventStatus::Pending)),
            "approved" => Ok(StatusFilter::Only(EventStatus::Approved)),
            "rejected" => Ok(StatusFilter::Only(EventStatus::Rejected)),
            other => Err(FilterParseError::UnknownStatus(other.to_string())),
        }
    }
}

/// Which text fields the free-text query is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// Event name or artist (public listing)
    #[default]
    Public,
    /// Event name or organizer name (admin dashboard)
    Admin,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("Unknown price band: {0}")]
    UnknownPriceBand(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}

/// Active predicates for one listing view. All predicates compose with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub location: LocationFilter,
    pub price: PriceBand,
    pub status: StatusFilter,
    pub scope: SearchScope,
}

impl FilterState {
    pub fn public() -> Self {
        Self::default()
    }

    pub fn admin() -> Self {
        Self {
            scope: SearchScope::Admin,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_location(mut self, location: LocationFilter) -> Self {
        self.location = location;
        self
    }

    pub fn with_price(mut self, price: PriceBand) -> Self {
        self.price = price;
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// True when no predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty()
            && self.location == LocationFilter::All
            && self.price == PriceBand::All
            && self.status == StatusFilter::All
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        self.matches_query(event)
            && self.matches_location(event)
            && self.price.contains(event.min_price())
            && self.matches_status(event)
    }

    fn matches_query(&self, event: &EventRecord) -> bool {
        let needle = self.query.to_lowercase();
        let secondary = match self.scope {
            SearchScope::Public => &event.artist,
            SearchScope::Admin => &event.organizer.name,
        };
        event.name.to_lowercase().contains(&needle) || secondary.to_lowercase().contains(&needle)
    }

    fn matches_location(&self, event: &EventRecord) -> bool {
        match &self.location {
            LocationFilter::All => true,
            LocationFilter::Contains(city) => event.location.to_lowercase().contains(&city.to_lowercase()),
        }
    }

    fn matches_status(&self, event: &EventRecord) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => event.status == status,
        }
    }
}

/// Stable filter: keeps catalog order, never re-sorts.
pub fn filter_events<'a>(catalog: &'a [EventRecord], state: &FilterState) -> Vec<&'a EventRecord> {
    catalog.iter().filter(|event| state.matches(event)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ids(events: &[&EventRecord]) -> Vec<u64> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_location_scenario() {
        let catalog = vec![
            fixtures::event(1, "Mumbai", &[599]),
            fixtures::event(2, "Delhi", &[1500]),
        ];
        let state = FilterState::public().with_location("mumbai".parse().unwrap());

        assert_eq!(ids(&filter_events(&catalog, &state)), vec![1]);
    }

    #[test]
    fn test_unfiltered_is_identity() {
        let catalog = fixtures::sample_events();
        let state = FilterState::public();
        assert!(state.is_unfiltered());

        let out = filter_events(&catalog, &state);
        assert_eq!(out.len(), catalog.len());
        assert!(out.iter().zip(catalog.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_price_band_edges() {
        let at_1000 = fixtures::event(1, "Pune", &[1000, 1800]);
        let at_2000 = fixtures::event(2, "Pune", &[2000, 2500]);

        assert!(PriceBand::From1000To2000.contains(at_1000.min_price()));
        assert!(!PriceBand::Under1000.contains(at_1000.min_price()));
        assert!(PriceBand::From1000To2000.contains(at_2000.min_price()));
        assert!(!PriceBand::Above2000.contains(at_2000.min_price()));

        assert!(PriceBand::Under1000.contains(Some(999)));
        assert!(PriceBand::Above2000.contains(Some(2001)));
    }

    #[test]
    fn test_event_without_tiers_sorts_above_every_band() {
        let mut event = fixtures::event(1, "Delhi", &[]);
        event.pricing.clear();

        assert!(FilterState::public().matches(&event));
        assert!(FilterState::public().with_price(PriceBand::Above2000).matches(&event));
        for band in [PriceBand::Under1000, PriceBand::From1000To2000] {
            assert!(!FilterState::public().with_price(band).matches(&event));
        }
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let catalog = fixtures::sample_events();

        let by_artist = FilterState::public().with_query("KUHAD");
        let out = filter_events(&catalog, &by_artist);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Indie Vibes Concert");

        // organizer names are not searched on the public listing
        let by_org = FilterState::public().with_query("laugh factory");
        assert!(filter_events(&catalog, &by_org).is_empty());

        let admin = FilterState::admin().with_query("laugh factory");
        let out = filter_events(&catalog, &admin);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Stand-up Comedy Night");
    }

    #[test]
    fn test_predicates_compose_with_and() {
        let catalog = fixtures::sample_events();
        let state = FilterState::admin()
            .with_status("pending".parse().unwrap())
            .with_location("mumbai".parse().unwrap());

        let out = filter_events(&catalog, &state);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Electronic Music Festival");

        let state = state.with_price(PriceBand::Under1000);
        assert!(filter_events(&catalog, &state).is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "cheap".parse::<PriceBand>(),
            Err(FilterParseError::UnknownPriceBand("cheap".to_string()))
        );
        assert!("archived".parse::<StatusFilter>().is_err());
        assert_eq!("ALL".parse::<LocationFilter>(), Ok(LocationFilter::All));
    }
}
