use std::sync::Arc;
use crate::domain::ports::{
    BadgeRepository, CertificateRepository, EventCatalog, Notifier, ProfileRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_catalog: Arc<dyn EventCatalog>,
    pub certificate_repo: Arc<dyn CertificateRepository>,
    pub badge_repo: Arc<dyn BadgeRepository>,
    pub profile_repo: Arc<dyn ProfileRepository>,
    pub notifier: Arc<dyn Notifier>,
}
