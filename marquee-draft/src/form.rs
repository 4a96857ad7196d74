use marquee_catalog::ImageRef;
use marquee_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

use crate::fields::{DraftField, DraftFields, TierDraft, TierField};
use crate::{MAX_IMAGES, MAX_TIERS};

/// Organizer-side draft of a new event.
///
/// Holds between 1 and [`MAX_TIERS`] pricing rows and at most [`MAX_IMAGES`] images
/// at all times. Operations that would break either bound are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DraftPayload")]
pub struct DraftForm {
    pub fields: DraftFields,
    tiers: Vec<TierDraft>,
    images: Vec<ImageRef>,
}

/// Wire shape of a draft, checked against the list bounds on the way in
#[derive(Debug, Deserialize)]
pub struct DraftPayload {
    #[serde(default)]
    fields: DraftFields,
    #[serde(default)]
    tiers: Vec<TierDraft>,
    #[serde(default)]
    images: Vec<ImageRef>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftShapeError {
    #[error("A draft holds at most {max} pricing tiers, got {got}")]
    TooManyTiers { max: usize, got: usize },

    #[error("A draft holds at most {max} images, got {got}")]
    TooManyImages { max: usize, got: usize },
}

impl TryFrom<DraftPayload> for DraftForm {
    type Error = DraftShapeError;

    fn try_from(payload: DraftPayload) -> Result<Self, Self::Error> {
        if payload.tiers.len() > MAX_TIERS {
            return Err(DraftShapeError::TooManyTiers {
                max: MAX_TIERS,
                got: payload.tiers.len(),
            });
        }
        if payload.images.len() > MAX_IMAGES {
            return Err(DraftShapeError::TooManyImages {
                max: MAX_IMAGES,
                got: payload.images.len(),
            });
        }

        let mut tiers = payload.tiers;
        if tiers.is_empty() {
            tiers.push(TierDraft::default());
        }

        Ok(Self {
            fields: payload.fields,
            tiers,
            images: payload.images,
        })
    }
}

impl DraftForm {
    /// Empty form with a single blank pricing row
    pub fn new() -> Self {
        Self {
            fields: DraftFields::default(),
            tiers: vec![TierDraft::default()],
            images: Vec::new(),
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn field(&self, field: DraftField) -> &str {
        self.fields.get(field)
    }

    pub fn tiers(&self) -> &[TierDraft] {
        &self.tiers
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Append a blank pricing row. Returns false (and does nothing) at the cap.
    pub fn add_tier(&mut self) -> bool {
        if self.tiers.len() >= MAX_TIERS {
            return false;
        }
        self.tiers.push(TierDraft::default());
        true
    }

    /// Remove a pricing row. The last remaining row and bad indices are left alone.
    pub fn remove_tier(&mut self, index: usize) -> bool {
        if self.tiers.len() <= 1 || index >= self.tiers.len() {
            return false;
        }
        self.tiers.remove(index);
        true
    }

    pub fn update_tier(&mut self, index: usize, field: TierField, value: impl Into<String>) -> CoreResult<()> {
        let len = self.tiers.len();
        let tier = self
            .tiers
            .get_mut(index)
            .ok_or(CoreError::OutOfRange { index, len })?;
        tier.set(field, value);
        Ok(())
    }

    /// Append image references, keeping only the first [`MAX_IMAGES`] in addition order.
    ///
    /// Returns how many of `refs` were kept.
    pub fn add_images(&mut self, refs: impl IntoIterator<Item = ImageRef>) -> usize {
        let slots = self.remaining_image_slots();
        let before = self.images.len();
        self.images.extend(refs.into_iter().take(slots));
        self.images.len() - before
    }

    pub fn remove_image(&mut self, index: usize) -> Option<ImageRef> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    pub fn remaining_image_slots(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.images.len())
    }
}

impl Default for DraftForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(prefix: &str, n: usize) -> Vec<ImageRef> {
        (0..n).map(|i| ImageRef(format!("{}-{}", prefix, i))).collect()
    }

    #[test]
    fn test_tier_cap() {
        let mut draft = DraftForm::new();
        assert_eq!(draft.tiers().len(), 1);

        for _ in 0..4 {
            assert!(draft.add_tier());
        }
        assert_eq!(draft.tiers().len(), 5);

        assert!(!draft.add_tier());
        assert_eq!(draft.tiers().len(), 5);
    }

    #[test]
    fn test_last_tier_cannot_be_removed() {
        let mut draft = DraftForm::new();
        draft.update_tier(0, TierField::Name, "General").unwrap();
        let before = draft.clone();

        assert!(!draft.remove_tier(0));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_remove_tier_keeps_order() {
        let mut draft = DraftForm::new();
        draft.add_tier();
        draft.add_tier();
        for (i, name) in ["Early Bird", "General", "VIP"].iter().enumerate() {
            draft.update_tier(i, TierField::Name, *name).unwrap();
        }

        assert!(draft.remove_tier(1));
        let names: Vec<_> = draft.tiers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Early Bird", "VIP"]);

        assert!(!draft.remove_tier(5));
        assert_eq!(draft.tiers().len(), 2);
    }

    #[test]
    fn test_update_tier_out_of_range() {
        let mut draft = DraftForm::new();
        draft.update_tier(0, TierField::Price, "1299").unwrap();
        assert_eq!(draft.tiers()[0].price, "1299");

        let err = draft.update_tier(3, TierField::Price, "999").unwrap_err();
        assert!(matches!(err, CoreError::OutOfRange { index: 3, len: 1 }));
    }

    #[test]
    fn test_image_cap_keeps_earliest() {
        let mut draft = DraftForm::new();
        assert_eq!(draft.add_images(refs("a", 3)), 3);
        assert_eq!(draft.add_images(refs("b", 4)), 2);

        let stored: Vec<_> = draft.images().iter().map(|r| r.as_str()).collect();
        assert_eq!(stored, vec!["a-0", "a-1", "a-2", "b-0", "b-1"]);

        assert_eq!(draft.add_images(refs("c", 1)), 0);
        assert_eq!(draft.images().len(), 5);
    }

    #[test]
    fn test_remove_image() {
        let mut draft = DraftForm::new();
        draft.add_images(refs("a", 2));

        assert_eq!(draft.remove_image(0), Some(ImageRef("a-0".to_string())));
        assert_eq!(draft.remove_image(4), None);
        assert_eq!(draft.images().len(), 1);
        assert_eq!(draft.remaining_image_slots(), 4);
    }

    #[test]
    fn test_deserialize_enforces_bounds() {
        let draft: DraftForm = serde_json::from_str(r#"{ "fields": { "name": "Gig" } }"#).unwrap();
        assert_eq!(draft.tiers().len(), 1);
        assert_eq!(draft.field(DraftField::Name), "Gig");

        let too_many = serde_json::json!({ "tiers": vec![serde_json::json!({}); 6] });
        let err = serde_json::from_value::<DraftForm>(too_many).unwrap_err();
        assert!(err.to_string().contains("at most 5 pricing tiers"));
    }
}
