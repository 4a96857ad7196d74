use std::sync::Arc;
use tokio::sync::RwLock;

use marquee_catalog::{fixtures, InMemoryCatalog};
use marquee_core::approval::ApprovalService;
use marquee_core::booking::{BookingService, MockBookingService};
use marquee_core::chat::ChatLinkBuilder;
use marquee_core::submission::SubmissionService;

use crate::app_config::Config;
use crate::services::{CatalogApprovalService, CatalogSubmissionService};

pub type SharedCatalog = Arc<RwLock<InMemoryCatalog>>;

#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub submissions: Arc<dyn SubmissionService>,
    pub approvals: Arc<dyn ApprovalService>,
    pub bookings: Arc<dyn BookingService>,
    pub chat: ChatLinkBuilder,
}

impl AppState {
    /// Wire the in-memory collaborators around `catalog`
    pub fn new(catalog: InMemoryCatalog, config: &Config) -> Self {
        let catalog: SharedCatalog = Arc::new(RwLock::new(catalog));

        Self {
            submissions: Arc::new(CatalogSubmissionService::new(catalog.clone())),
            approvals: Arc::new(CatalogApprovalService::new(catalog.clone())),
            bookings: Arc::new(MockBookingService::new(config.booking.payment_base_url.clone())),
            chat: config.chat.link_builder(),
            catalog,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let catalog = if config.catalog.seed_fixtures {
            InMemoryCatalog::with_events(fixtures::sample_events())
        } else {
            InMemoryCatalog::new()
        };
        Self::new(catalog, config)
    }
}
