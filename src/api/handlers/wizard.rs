use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::RowEdit;
use crate::api::dtos::responses::{ActionResponse, PublishResponse, WizardView};
use crate::background::{notify_now, schedule_notification};
use crate::domain::models::{
    draft::EventDraft,
    event::{AgendaItem, FacultyMember},
    notification::Notification,
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn validate(Json(draft): Json<EventDraft>) -> Json<WizardView> {
    Json(WizardView::of(draft))
}

pub async fn publish(
    State(state): State<Arc<AppState>>,
    Json(mut draft): Json<EventDraft>,
) -> Result<Json<PublishResponse>, AppError> {
    draft.publish()?;
    info!(title = %draft.title, "Event published");

    let notification = Notification::success("Event published successfully!");
    notify_now(state.notifier.as_ref(), notification.clone()).await;
    Ok(Json(PublishResponse { draft, notification }))
}

pub async fn save_draft(
    State(state): State<Arc<AppState>>,
    Json(_draft): Json<EventDraft>,
) -> Json<ActionResponse> {
    let notification = Notification::success("Draft saved!");
    notify_now(state.notifier.as_ref(), notification.clone()).await;
    Json(ActionResponse { notification })
}

/// Acknowledges at once; the "generated" toast follows after the configured delay.
pub async fn generate_poster(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ActionResponse>) {
    let notification = Notification::success("Generating poster with AI...");
    notify_now(state.notifier.as_ref(), notification.clone()).await;

    schedule_notification(
        state.notifier.clone(),
        Notification::success("Poster generated! Check your downloads."),
        state.config.poster_delay,
    );

    (StatusCode::ACCEPTED, Json(ActionResponse { notification }))
}

fn row_missing(kind: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{kind} {id} not found in draft"))
}

pub async fn add_agenda_item(Json(mut draft): Json<EventDraft>) -> (StatusCode, Json<WizardView>) {
    draft.add_agenda_item();
    (StatusCode::CREATED, Json(WizardView::of(draft)))
}

pub async fn update_agenda_item(
    Path(row_id): Path<String>,
    Json(RowEdit { mut draft, row }): Json<RowEdit<AgendaItem>>,
) -> Result<Json<WizardView>, AppError> {
    let replaced = draft.update_agenda_item(&row_id, |item| {
        *item = AgendaItem { id: std::mem::take(&mut item.id), ..row };
    });
    if !replaced {
        return Err(row_missing("Agenda item", &row_id));
    }
    Ok(Json(WizardView::of(draft)))
}

pub async fn remove_agenda_item(
    Path(row_id): Path<String>,
    Json(mut draft): Json<EventDraft>,
) -> Result<Json<WizardView>, AppError> {
    if !draft.remove_agenda_item(&row_id) {
        return Err(row_missing("Agenda item", &row_id));
    }
    Ok(Json(WizardView::of(draft)))
}

pub async fn add_faculty(Json(mut draft): Json<EventDraft>) -> (StatusCode, Json<WizardView>) {
    draft.add_faculty();
    (StatusCode::CREATED, Json(WizardView::of(draft)))
}

pub async fn update_faculty(
    Path(row_id): Path<String>,
    Json(RowEdit { mut draft, row }): Json<RowEdit<FacultyMember>>,
) -> Result<Json<WizardView>, AppError> {
    let replaced = draft.update_faculty(&row_id, |member| {
        *member = FacultyMember { id: std::mem::take(&mut member.id), ..row };
    });
    if !replaced {
        return Err(row_missing("Faculty member", &row_id));
    }
    Ok(Json(WizardView::of(draft)))
}

pub async fn remove_faculty(
    Path(row_id): Path<String>,
    Json(mut draft): Json<EventDraft>,
) -> Result<Json<WizardView>, AppError> {
    if !draft.remove_faculty(&row_id) {
        return Err(row_missing("Faculty member", &row_id));
    }
    Ok(Json(WizardView::of(draft)))
}
