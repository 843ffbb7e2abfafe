pub mod memory_badge_repo;
pub mod memory_certificate_repo;
pub mod memory_event_catalog;
pub mod memory_profile_repo;
