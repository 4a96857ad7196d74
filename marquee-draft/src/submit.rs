use chrono::{NaiveDate, NaiveTime};
use marquee_catalog::{EventCandidate, EventPolicies, Organizer, PricingTier};
use marquee_core::images::{ImageIntake, ImageUpload};
use marquee_core::submission::{SubmissionReceipt, SubmissionService};
use marquee_core::{CoreResult, FieldIssue, ValidationError};
use marquee_shared::Masked;

use crate::fields::{DraftField, TierDraft};
use crate::form::DraftForm;

const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%I:%M %p"];

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

/// `+`, then 7 to 15 digits; spaces and dashes are ignored.
fn is_phone_like(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// One `@`, a non-empty local part, and a dotted domain with no empty labels.
fn is_email_like(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// A fully blank row is ignored; anything else must carry a name and a whole-rupee price.
fn check_tier(index: usize, row: &TierDraft, issues: &mut ValidationError) -> Option<PricingTier> {
    if row.is_blank() {
        return None;
    }

    let name = row.name.trim();
    if name.is_empty() {
        issues.push(FieldIssue::missing(format!("tiers[{}].name", index)));
    }

    let price = row.price.trim();
    let parsed = if price.is_empty() {
        issues.push(FieldIssue::missing(format!("tiers[{}].price", index)));
        None
    } else {
        match price.parse::<u32>() {
            Ok(p) => Some(p),
            Err(_) => {
                issues.push(FieldIssue::invalid(
                    format!("tiers[{}].price", index),
                    "must be a non-negative whole number of rupees",
                ));
                None
            }
        }
    };

    match (name.is_empty(), parsed) {
        (false, Some(price)) => Some(PricingTier {
            label: name.to_string(),
            price,
            available: true,
            description: optional(&row.description),
        }),
        _ => None,
    }
}

impl DraftForm {
    /// Validate the draft and normalize it into a pending event candidate.
    ///
    /// Reports every missing or malformed field at once.
    pub fn submit(&self) -> Result<EventCandidate, ValidationError> {
        let mut issues = ValidationError::default();

        for field in DraftField::ALL {
            if field.is_required() && self.field(field).trim().is_empty() {
                issues.push(FieldIssue::missing(field.key()));
            }
        }

        let date_raw = self.field(DraftField::Date).trim();
        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").ok();
        if date.is_none() && !date_raw.is_empty() {
            issues.push(FieldIssue::invalid(DraftField::Date.key(), "expected YYYY-MM-DD"));
        }

        let time_raw = self.field(DraftField::Time).trim();
        let time = parse_time(time_raw);
        if time.is_none() && !time_raw.is_empty() {
            issues.push(FieldIssue::invalid(DraftField::Time.key(), "expected HH:MM"));
        }

        let whatsapp = self.field(DraftField::Whatsapp).trim();
        if !whatsapp.is_empty() && !is_phone_like(whatsapp) {
            issues.push(FieldIssue::invalid(DraftField::Whatsapp.key(), "expected a phone number"));
        }

        let email = self.field(DraftField::OrganizerEmail).trim();
        if !email.is_empty() && !is_email_like(email) {
            issues.push(FieldIssue::invalid(DraftField::OrganizerEmail.key(), "expected an email address"));
        }

        let maps_link = optional(self.field(DraftField::MapsLink));
        if let Some(link) = &maps_link {
            if !(link.starts_with("https://") || link.starts_with("http://")) {
                issues.push(FieldIssue::invalid(DraftField::MapsLink.key(), "expected an http(s) link"));
            }
        }

        let pricing: Vec<PricingTier> = self
            .tiers()
            .iter()
            .enumerate()
            .filter_map(|(i, row)| check_tier(i, row, &mut issues))
            .collect();
        if pricing.is_empty() && self.tiers().iter().all(TierDraft::is_blank) {
            issues.push(FieldIssue::missing("pricing"));
        }

        let (date, time) = match (issues.into_result(), date, time) {
            (Ok(()), Some(date), Some(time)) => (date, time),
            (Err(issues), _, _) => return Err(issues),
            // date and time are required, so a clean report implies both parsed
            (Ok(()), _, _) => return Err(ValidationError::single("date", marquee_core::IssueKind::Missing)),
        };

        let text = |field: DraftField| self.field(field).trim().to_string();
        Ok(EventCandidate {
            name: text(DraftField::Name),
            artist: text(DraftField::Artist),
            date,
            time,
            location: text(DraftField::Location),
            address: text(DraftField::Address),
            maps_link,
            description: text(DraftField::Description),
            images: self.images().to_vec(),
            pricing,
            whatsapp: Masked(text(DraftField::Whatsapp)),
            organizer: Organizer {
                name: text(DraftField::OrganizerName),
                email: Masked(text(DraftField::OrganizerEmail)),
            },
            policies: EventPolicies {
                cancellation: text(DraftField::CancellationPolicy),
                refund: text(DraftField::RefundPolicy),
                age_limit: optional(self.field(DraftField::AgeLimit)),
                dress_code: optional(self.field(DraftField::DressCode)),
            },
        })
    }
}

/// Validate, then hand the candidate to the submission collaborator
pub async fn submit_to(draft: &DraftForm, service: &dyn SubmissionService) -> CoreResult<SubmissionReceipt> {
    let candidate = draft.submit()?;
    let receipt = service.submit(candidate).await?;
    tracing::info!(event_id = receipt.event_id, "Event submitted for approval");
    Ok(receipt)
}

/// Store newly chosen files through the intake collaborator and attach the references.
///
/// Files that would not fit under the image cap are never uploaded. Returns how many
/// references were attached.
pub async fn intake_images(
    draft: &mut DraftForm,
    intake: &dyn ImageIntake,
    uploads: Vec<ImageUpload>,
) -> CoreResult<usize> {
    let slots = draft.remaining_image_slots();
    if uploads.len() > slots {
        tracing::debug!(dropped = uploads.len() - slots, "Image cap reached, ignoring extra files");
    }

    let mut refs = Vec::with_capacity(slots);
    for upload in uploads.into_iter().take(slots) {
        refs.push(intake.store(upload).await?);
    }
    Ok(draft.add_images(refs))
}
