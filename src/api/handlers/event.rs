use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::responses::{ActionResponse, EventPageView, Page, ShareResponse};
use crate::api::extractors::{referrer::Referrer, shell::ViewShell};
use crate::background::notify_now;
use crate::domain::models::{event::Event, notification::Notification};
use crate::domain::services::{
    event_page::{agenda_empty_message, faculty_empty_message, long_date, time_range},
    navigation::{back_target, event_path},
};
use crate::error::AppError;
use crate::state::AppState;

async fn load_event(state: &AppState, id: &str, back_to: String) -> Result<Event, AppError> {
    state
        .event_catalog
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::EventNotFound { id: id.to_string(), back_to })
}

pub async fn event_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Referrer(from): Referrer,
    page: ViewShell,
) -> Result<Json<Page<EventPageView>>, AppError> {
    let back = back_target(from.as_deref());
    let event = load_event(&state, &id, back.clone()).await?;

    Ok(Json(page.render(EventPageView {
        long_date: long_date(&event),
        time_range: time_range(&event),
        venue: event.physical_venue().map(str::to_string),
        agenda_empty_message: agenda_empty_message(&event),
        faculty_empty_message: faculty_empty_message(&event),
        back,
        event,
    })))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AppError> {
    let event = load_event(&state, &id, back_target(None)).await?;
    info!(event_id = %event.id, "Registration requested");

    let notification = Notification::success("Registration request submitted!");
    notify_now(state.notifier.as_ref(), notification.clone()).await;
    Ok(Json(ActionResponse { notification }))
}

pub async fn share(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ShareResponse>, AppError> {
    let event = load_event(&state, &id, back_target(None)).await?;
    let path = event_path(&event.id);

    let notification = Notification::success("Link copied to clipboard!");
    notify_now(state.notifier.as_ref(), notification.clone()).await;
    Ok(Json(ShareResponse {
        url: format!("{}{}", state.config.public_base_url, path),
        path,
        notification,
    }))
}
