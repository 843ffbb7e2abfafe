use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use std::sync::Arc;

use crate::api::dtos::responses::{DiscoveryView, FilterOptions, OrganizerProfileView, Page, WizardView};
use crate::api::extractors::shell::ViewShell;
use crate::domain::models::{criteria::FilterCriteria, draft::EventDraft};
use crate::domain::services::{
    event_query::{result_label, run_query, NO_MATCHES_MESSAGE},
    organizer_stats::{hosted_events, organizer_stats},
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_event(page: ViewShell) -> Json<Page<WizardView>> {
    Json(page.render(WizardView::of(EventDraft::default())))
}

pub async fn discover_events(
    State(state): State<Arc<AppState>>,
    page: ViewShell,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<Page<DiscoveryView>>, AppError> {
    let catalog = state.event_catalog.list().await?;
    let events = run_query(&catalog, &criteria);

    Ok(Json(page.render(DiscoveryView {
        result_label: result_label(events.len()),
        empty_message: events.is_empty().then_some(NO_MATCHES_MESSAGE),
        options: FilterOptions::all(),
        criteria,
        events,
    })))
}

pub async fn organizer_profile(
    State(state): State<Arc<AppState>>,
    page: ViewShell,
) -> Result<Json<Page<OrganizerProfileView>>, AppError> {
    let profile = state.profile_repo.organizer().await?;
    let catalog = state.event_catalog.list().await?;
    let today = Local::now().date_naive();

    let events = hosted_events(&catalog, &profile, today);
    let stats = organizer_stats(&events, today);

    Ok(Json(page.render(OrganizerProfileView { profile, stats, events })))
}
