use chrono::Utc;
use marquee_catalog::{EventId, EventRecord, PricingTier};
use marquee_core::booking::{BookingReceipt, BookingRequest, BookingService};
use marquee_core::{CoreResult, SelectionGuardViolation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", content = "tier", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionState {
    #[default]
    NoneSelected,
    Selected(String),
}

/// Tier choice on one event detail view.
///
/// Built fresh for every view; there is no terminal state and no way back to
/// `NoneSelected` other than constructing a new selection.
#[derive(Debug, Clone)]
pub struct TierSelection {
    event_id: EventId,
    event_name: String,
    tiers: Vec<PricingTier>,
    state: SelectionState,
}

impl TierSelection {
    pub fn new(event: &EventRecord) -> Self {
        Self {
            event_id: event.id,
            event_name: event.name.clone(),
            tiers: event.pricing.clone(),
            state: SelectionState::NoneSelected,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    /// Select an available tier, replacing any earlier choice.
    ///
    /// Selecting the current tier again keeps it selected. Sold-out and unknown
    /// labels are refused and leave the state as it was.
    pub fn select(&mut self, label: &str) -> Result<&PricingTier, SelectionGuardViolation> {
        let mut matching = self.tiers.iter().filter(|t| t.label == label).peekable();
        if matching.peek().is_none() {
            return Err(SelectionGuardViolation::UnknownTier(label.to_string()));
        }

        let tier = matching
            .find(|t| t.available)
            .ok_or_else(|| SelectionGuardViolation::TierUnavailable(label.to_string()))?;

        self.state = SelectionState::Selected(tier.label.clone());
        Ok(tier)
    }

    pub fn selected_tier(&self) -> Option<&PricingTier> {
        match &self.state {
            SelectionState::NoneSelected => None,
            SelectionState::Selected(label) => self.tiers.iter().find(|t| t.available && &t.label == label),
        }
    }

    pub fn can_book(&self) -> bool {
        matches!(self.state, SelectionState::Selected(_))
    }

    /// Build the payment hand-off for the selected tier. Never changes the selection.
    pub fn book(&self) -> Result<BookingRequest, SelectionGuardViolation> {
        let tier = self.selected_tier().ok_or(SelectionGuardViolation::NoTierSelected)?;

        Ok(BookingRequest {
            request_id: Uuid::new_v4(),
            event_id: self.event_id,
            event_name: self.event_name.clone(),
            tier: tier.label.clone(),
            price: tier.price,
            requested_at: Utc::now(),
        })
    }

    /// `book` followed by the hand-off to the booking collaborator
    pub async fn checkout(&self, service: &dyn BookingService) -> CoreResult<BookingReceipt> {
        let request = self.book()?;
        tracing::debug!(event_id = self.event_id, tier = %request.tier, "Handing off booking request");
        service.request_booking(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_catalog::fixtures;
    use marquee_core::booking::MockBookingService;
    use marquee_core::CoreError;

    fn indie_vibes() -> EventRecord {
        fixtures::sample_events().into_iter().find(|e| e.id == 2).unwrap()
    }

    #[test]
    fn test_starts_with_nothing_selected() {
        let selection = TierSelection::new(&indie_vibes());
        assert_eq!(selection.state(), &SelectionState::NoneSelected);
        assert!(!selection.can_book());
        assert!(selection.selected_tier().is_none());
    }

    #[test]
    fn test_select_overwrites_previous_choice() {
        let mut selection = TierSelection::new(&indie_vibes());

        assert_eq!(selection.select("Standing").unwrap().price, 899);
        assert_eq!(selection.select("VIP").unwrap().price, 2299);
        assert_eq!(selection.state(), &SelectionState::Selected("VIP".to_string()));

        // re-selecting does not toggle off
        selection.select("VIP").unwrap();
        assert_eq!(selection.state(), &SelectionState::Selected("VIP".to_string()));
        assert!(selection.can_book());
    }

    #[test]
    fn test_unavailable_tier_is_a_no_op() {
        let mut selection = TierSelection::new(&indie_vibes());

        assert_eq!(
            selection.select("Premium").unwrap_err(),
            SelectionGuardViolation::TierUnavailable("Premium".to_string())
        );
        assert_eq!(selection.state(), &SelectionState::NoneSelected);

        selection.select("Standing").unwrap();
        assert!(selection.select("Premium").is_err());
        assert_eq!(selection.state(), &SelectionState::Selected("Standing".to_string()));

        assert_eq!(
            selection.select("Balcony").unwrap_err(),
            SelectionGuardViolation::UnknownTier("Balcony".to_string())
        );
        assert_eq!(selection.state(), &SelectionState::Selected("Standing".to_string()));
    }

    #[test]
    fn test_duplicate_labels_pick_the_available_one() {
        let mut event = fixtures::event(9, "Pune", &[]);
        event.pricing = vec![
            PricingTier::new("General", 500).sold_out(),
            PricingTier::new("General", 700),
        ];
        let mut selection = TierSelection::new(&event);

        assert_eq!(selection.select("General").unwrap().price, 700);
        assert_eq!(selection.book().unwrap().price, 700);
    }

    #[test]
    fn test_booking_without_selection_is_refused() {
        let selection = TierSelection::new(&indie_vibes());

        let err = selection.book().unwrap_err();
        assert_eq!(err, SelectionGuardViolation::NoTierSelected);
        assert_eq!(err.to_string(), "Please select a ticket tier first!");
        assert_eq!(selection.state(), &SelectionState::NoneSelected);
    }

    #[test]
    fn test_book_builds_request_without_changing_state() {
        let mut selection = TierSelection::new(&indie_vibes());
        selection.select("VIP").unwrap();

        let request = selection.book().unwrap();
        assert_eq!(request.event_id, 2);
        assert_eq!(request.event_name, "Indie Vibes Concert");
        assert_eq!(request.tier, "VIP");
        assert_eq!(request.price, 2299);
        assert_eq!(selection.state(), &SelectionState::Selected("VIP".to_string()));
    }

    #[tokio::test]
    async fn test_checkout_hands_off() {
        let service = MockBookingService::new("https://pay.example.com");
        let mut selection = TierSelection::new(&indie_vibes());

        let result = selection.checkout(&service).await;
        assert!(matches!(
            result,
            Err(CoreError::SelectionGuard(SelectionGuardViolation::NoTierSelected))
        ));

        selection.select("Standing").unwrap();
        let receipt = selection.checkout(&service).await.unwrap();
        assert!(receipt.redirect_url.starts_with("https://pay.example.com/"));
    }
}
