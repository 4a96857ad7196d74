//! Seed catalog used by the prototype listing, detail and admin views.

use crate::event::{EventId, EventPolicies, EventRecord, EventStatus, ImageRef, Organizer, PricingTier};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

const SUPPORT_WHATSAPP: &str = "+918446522752";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("fixture time")
}

fn standard_policies() -> EventPolicies {
    EventPolicies {
        cancellation: "Tickets can be cancelled up to 48 hours before the event for a full refund. \
                       Cancellations within 48 hours will receive a 50% refund."
            .to_string(),
        refund: "Refunds will be processed within 5-7 business days to the original payment method.".to_string(),
        age_limit: Some("18+ event. Valid ID required for entry.".to_string()),
        dress_code: Some("Smart casual dress code. Neon accessories encouraged!".to_string()),
    }
}

fn organizer(name: &str, email: &str) -> Organizer {
    Organizer {
        name: name.to_string(),
        email: email.into(),
    }
}

fn images(urls: &[&str]) -> Vec<ImageRef> {
    urls.iter().map(|u| ImageRef::from(*u)).collect()
}

/// Minimal approved event for tests and examples: one tier per price, all available.
pub fn event(id: EventId, location: &str, prices: &[u32]) -> EventRecord {
    EventRecord {
        id,
        name: format!("Event {}", id),
        artist: format!("Artist {}", id),
        date: date(2025, 3, 1),
        time: time(19, 0),
        location: location.to_string(),
        address: format!("Main Road, {}", location),
        maps_link: None,
        description: "Live show".to_string(),
        images: Vec::new(),
        pricing: prices
            .iter()
            .enumerate()
            .map(|(i, p)| PricingTier::new(format!("Tier {}", i + 1), *p))
            .collect(),
        whatsapp: SUPPORT_WHATSAPP.into(),
        organizer: organizer("Test Organizer", "organizer@example.com"),
        policies: standard_policies(),
        status: EventStatus::Approved,
        submitted_at: None,
        rejection_reason: None,
    }
}

/// The six events of the prototype: three approved listings, three awaiting review.
pub fn sample_events() -> Vec<EventRecord> {
    let mumbai_events = organizer("Mumbai Events Co.", "contact@mumbaievents.com");
    let description = "Get ready for the most electrifying night of the year! Neon Nights Festival brings \
                       together India's biggest electronic music stars for an unforgettable experience.";

    vec![
        EventRecord {
            id: 1,
            name: "Neon Nights Festival".to_string(),
            artist: "DJ Nucleya & Divine".to_string(),
            date: date(2025, 2, 15),
            time: time(20, 0),
            location: "Phoenix Marketcity, Mumbai".to_string(),
            address: "LBS Marg, Kurla West, Mumbai, Maharashtra 400070".to_string(),
            maps_link: Some("https://maps.app.goo.gl/xyz123".to_string()),
            description: description.to_string(),
            images: images(&[
                "https://images.pexels.com/photos/1763075/pexels-photo-1763075.jpeg",
                "https://images.pexels.com/photos/1540406/pexels-photo-1540406.jpeg",
                "https://images.pexels.com/photos/2747449/pexels-photo-2747449.jpeg",
            ]),
            pricing: vec![
                PricingTier::new("Early Bird", 1299).with_description("Limited time offer - includes entry and welcome drink"),
                PricingTier::new("General", 1599).with_description("Standard entry with access to all areas"),
                PricingTier::new("VIP", 2999)
                    .with_description("Premium experience with VIP lounge access, complimentary drinks, and meet & greet"),
            ],
            whatsapp: SUPPORT_WHATSAPP.into(),
            organizer: mumbai_events.clone(),
            policies: standard_policies(),
            status: EventStatus::Approved,
            submitted_at: None,
            rejection_reason: None,
        },
        EventRecord {
            id: 2,
            name: "Indie Vibes Concert".to_string(),
            artist: "Prateek Kuhad".to_string(),
            date: date(2025, 2, 20),
            time: time(19, 30),
            location: "Hard Rock Cafe, Bangalore".to_string(),
            address: "Koramangala Park, Bengaluru".to_string(),
            maps_link: Some("https://maps.app.goo.gl/xyz123".to_string()),
            description: description.to_string(),
            images: images(&[
                "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg",
                "https://images.pexels.com/photos/1540406/pexels-photo-1540406.jpeg",
            ]),
            pricing: vec![
                PricingTier::new("Standing", 899).with_description("Standing area ticket"),
                PricingTier::new("Premium", 1499)
                    .with_description("Premium seating with better view")
                    .sold_out(),
                PricingTier::new("VIP", 2299).with_description("VIP access with complimentary drinks"),
            ],
            whatsapp: SUPPORT_WHATSAPP.into(),
            organizer: mumbai_events.clone(),
            policies: standard_policies(),
            status: EventStatus::Approved,
            submitted_at: None,
            rejection_reason: None,
        },
        EventRecord {
            id: 3,
            name: "Comedy Night Live".to_string(),
            artist: "Zakir Khan".to_string(),
            date: date(2025, 2, 25),
            time: time(21, 0),
            location: "Amphitheatre, Delhi".to_string(),
            address: "Amphitheatre, New Delhi".to_string(),
            maps_link: Some("https://maps.app.goo.gl/xyz123".to_string()),
            description: description.to_string(),
            images: images(&["https://images.pexels.com/photos/2747449/pexels-photo-2747449.jpeg"]),
            pricing: vec![
                PricingTier::new("Bronze", 599).with_description("Bronze tier seating"),
                PricingTier::new("Silver", 899).with_description("Silver tier seating"),
                PricingTier::new("Gold", 1299).with_description("Gold tier seating with best view"),
            ],
            whatsapp: SUPPORT_WHATSAPP.into(),
            organizer: mumbai_events,
            policies: standard_policies(),
            status: EventStatus::Approved,
            submitted_at: None,
            rejection_reason: None,
        },
        pending(
            4,
            "Electronic Music Festival",
            "Various Artists",
            "Mumbai Events Co.",
            date(2025, 3, 15),
            "Mumbai",
            &[("Early Bird", 1299), ("General", 1599), ("VIP", 2999)],
            (2025, 1, 15, 10, 30),
        ),
        pending(
            5,
            "Stand-up Comedy Night",
            "Various Comedians",
            "Laugh Factory",
            date(2025, 2, 28),
            "Bangalore",
            &[("Standard", 599), ("Premium", 899)],
            (2025, 1, 14, 15, 45),
        ),
        pending(
            6,
            "Rock Concert Live",
            "The Local Train",
            "Rock Nation",
            date(2025, 4, 10),
            "Delhi",
            &[("General", 1199), ("VIP", 2499)],
            (2025, 1, 13, 9, 15),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn pending(
    id: EventId,
    name: &str,
    artist: &str,
    organizer_name: &str,
    on: NaiveDate,
    location: &str,
    tiers: &[(&str, u32)],
    submitted: (i32, u32, u32, u32, u32),
) -> EventRecord {
    let (y, mo, d, h, mi) = submitted;
    let email = format!("events@{}.example", organizer_name.to_lowercase().replace([' ', '.'], ""));
    EventRecord {
        id,
        name: name.to_string(),
        artist: artist.to_string(),
        date: on,
        time: time(19, 0),
        location: location.to_string(),
        address: location.to_string(),
        maps_link: None,
        description: format!("{} by {}", name, organizer_name),
        images: Vec::new(),
        pricing: tiers.iter().map(|(label, price)| PricingTier::new(*label, *price)).collect(),
        whatsapp: SUPPORT_WHATSAPP.into(),
        organizer: organizer(organizer_name, &email),
        policies: standard_policies(),
        status: EventStatus::Pending,
        submitted_at: Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single(),
        rejection_reason: None,
    }
}
