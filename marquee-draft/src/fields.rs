use serde::{Deserialize, Serialize};
use std::fmt;

/// Text inputs of the organizer form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Artist,
    Date,
    Time,
    Description,
    Location,
    Address,
    MapsLink,
    Whatsapp,
    CancellationPolicy,
    RefundPolicy,
    AgeLimit,
    DressCode,
    OrganizerName,
    OrganizerEmail,
}

impl DraftField {
    pub const ALL: [DraftField; 15] = [
        DraftField::Name,
        DraftField::Artist,
        DraftField::Date,
        DraftField::Time,
        DraftField::Description,
        DraftField::Location,
        DraftField::Address,
        DraftField::MapsLink,
        DraftField::Whatsapp,
        DraftField::CancellationPolicy,
        DraftField::RefundPolicy,
        DraftField::AgeLimit,
        DraftField::DressCode,
        DraftField::OrganizerName,
        DraftField::OrganizerEmail,
    ];

    pub fn is_required(&self) -> bool {
        !matches!(self, DraftField::MapsLink | DraftField::AgeLimit | DraftField::DressCode)
    }

    /// Identifier used in validation reports
    pub fn key(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Artist => "artist",
            DraftField::Date => "date",
            DraftField::Time => "time",
            DraftField::Description => "description",
            DraftField::Location => "location",
            DraftField::Address => "address",
            DraftField::MapsLink => "maps_link",
            DraftField::Whatsapp => "whatsapp",
            DraftField::CancellationPolicy => "cancellation_policy",
            DraftField::RefundPolicy => "refund_policy",
            DraftField::AgeLimit => "age_limit",
            DraftField::DressCode => "dress_code",
            DraftField::OrganizerName => "organizer_name",
            DraftField::OrganizerEmail => "organizer_email",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw form values, exactly as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DraftFields {
    pub name: String,
    pub artist: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub location: String,
    pub address: String,
    pub maps_link: String,
    pub whatsapp: String,
    pub cancellation_policy: String,
    pub refund_policy: String,
    pub age_limit: String,
    pub dress_code: String,
    pub organizer_name: String,
    pub organizer_email: String,
}

impl DraftFields {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Artist => &self.artist,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Description => &self.description,
            DraftField::Location => &self.location,
            DraftField::Address => &self.address,
            DraftField::MapsLink => &self.maps_link,
            DraftField::Whatsapp => &self.whatsapp,
            DraftField::CancellationPolicy => &self.cancellation_policy,
            DraftField::RefundPolicy => &self.refund_policy,
            DraftField::AgeLimit => &self.age_limit,
            DraftField::DressCode => &self.dress_code,
            DraftField::OrganizerName => &self.organizer_name,
            DraftField::OrganizerEmail => &self.organizer_email,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Artist => &mut self.artist,
            DraftField::Date => &mut self.date,
            DraftField::Time => &mut self.time,
            DraftField::Description => &mut self.description,
            DraftField::Location => &mut self.location,
            DraftField::Address => &mut self.address,
            DraftField::MapsLink => &mut self.maps_link,
            DraftField::Whatsapp => &mut self.whatsapp,
            DraftField::CancellationPolicy => &mut self.cancellation_policy,
            DraftField::RefundPolicy => &mut self.refund_policy,
            DraftField::AgeLimit => &mut self.age_limit,
            DraftField::DressCode => &mut self.dress_code,
            DraftField::OrganizerName => &mut self.organizer_name,
            DraftField::OrganizerEmail => &mut self.organizer_email,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TierField {
    Name,
    Price,
    Description,
}

/// A pricing row being typed in; the price stays text until submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TierDraft {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl TierDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: String::new(),
        }
    }

    pub fn set(&mut self, field: TierField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TierField::Name => self.name = value,
            TierField::Price => self.price = value,
            TierField::Description => self.description = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.price.trim().is_empty() && self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_every_field() {
        let mut fields = DraftFields::default();
        for field in DraftField::ALL {
            fields.set(field, field.key());
        }
        for field in DraftField::ALL {
            assert_eq!(fields.get(field), field.key());
        }
    }

    #[test]
    fn test_optional_fields() {
        let optional: Vec<_> = DraftField::ALL.iter().filter(|f| !f.is_required()).collect();
        assert_eq!(optional, vec![&DraftField::MapsLink, &DraftField::AgeLimit, &DraftField::DressCode]);
    }
}
