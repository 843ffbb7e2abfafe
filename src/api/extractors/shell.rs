use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;

use crate::api::dtos::responses::Page;
use crate::domain::services::navigation::{shell_for_path, Shell};
use crate::state::AppState;

/// The route being rendered and the chrome that goes around it.
pub struct ViewShell {
    pub route: String,
    pub shell: Option<Shell>,
}

impl ViewShell {
    pub fn render<T: Serialize>(self, view: T) -> Page<T> {
        Page {
            route: self.route,
            shell: self.shell,
            view,
        }
    }
}

impl FromRequestParts<Arc<AppState>> for ViewShell {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let route = parts.uri.path().to_string();
        Ok(ViewShell {
            shell: shell_for_path(&route),
            route,
        })
    }
}
