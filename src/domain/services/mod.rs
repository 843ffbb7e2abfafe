pub mod achievements;
pub mod credits;
pub mod event_page;
pub mod event_query;
pub mod navigation;
pub mod organizer_stats;
pub mod passbook;
