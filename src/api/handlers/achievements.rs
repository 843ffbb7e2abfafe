use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dtos::responses::{AchievementsView, Page};
use crate::api::extractors::shell::ViewShell;
use crate::domain::services::achievements::{group_badges, unlocked_count};
use crate::error::AppError;
use crate::state::AppState;

pub async fn achievements(
    State(state): State<Arc<AppState>>,
    page: ViewShell,
) -> Result<Json<Page<AchievementsView>>, AppError> {
    let badges = state.badge_repo.list().await?;

    Ok(Json(page.render(AchievementsView {
        unlocked: unlocked_count(&badges),
        total: badges.len(),
        groups: group_badges(&badges),
    })))
}
