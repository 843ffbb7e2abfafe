use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::Notifier;
use crate::state::AppState;
use crate::infra::notify::tracing_notifier::TracingNotifier;
use crate::infra::repositories::{
    memory_badge_repo::MemoryBadgeRepo, memory_certificate_repo::MemoryCertificateRepo,
    memory_event_catalog::MemoryEventCatalog, memory_profile_repo::MemoryProfileRepo,
};
use crate::infra::seed;

pub fn bootstrap_state(config: &Config) -> AppState {
    bootstrap_state_with_notifier(config, Arc::new(TracingNotifier))
}

/// Same seeded repositories, caller-chosen toast sink.
pub fn bootstrap_state_with_notifier(config: &Config, notifier: Arc<dyn Notifier>) -> AppState {
    let events = seed::seed_events();
    let recent = seed::seed_recent_certificates().len();
    info!(events = events.len(), "Loading seeded catalog...");

    AppState {
        config: config.clone(),
        event_catalog: Arc::new(MemoryEventCatalog::new(events)),
        certificate_repo: Arc::new(MemoryCertificateRepo::new(seed::seed_certificates(), recent)),
        badge_repo: Arc::new(MemoryBadgeRepo::new(seed::seed_badges())),
        profile_repo: Arc::new(MemoryProfileRepo::new(
            seed::seed_doctor_profile(),
            seed::seed_credits_breakdown(),
            seed::seed_organizer_profile(),
        )),
        notifier,
    }
}
