use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dtos::responses::{DoctorHomeView, Page};
use crate::api::extractors::shell::ViewShell;
use crate::domain::services::{
    achievements,
    credits::{credit_progress, credits_breakdown},
};
use crate::error::AppError;
use crate::state::AppState;

const BADGE_PREVIEW_LIMIT: usize = 4;

pub async fn doctor_home(
    State(state): State<Arc<AppState>>,
    page: ViewShell,
) -> Result<Json<Page<DoctorHomeView>>, AppError> {
    let profile = state.profile_repo.doctor().await?;
    let breakdown = state.profile_repo.credits_breakdown().await?;
    let recent_certificates = state.certificate_repo.list_recent().await?;
    let badges = state.badge_repo.list().await?;

    let view = DoctorHomeView {
        progress: credit_progress(&profile.credits),
        breakdown: credits_breakdown(breakdown, &profile.credits),
        next_actions: profile.next_actions.clone(),
        recent_certificates,
        badges: achievements::showcase(&badges, BADGE_PREVIEW_LIMIT),
        next_badge: achievements::next_badge(&badges),
        profile,
    };
    Ok(Json(page.render(view)))
}
