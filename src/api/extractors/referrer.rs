use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::state::AppState;

/// The in-app path the visitor came from, passed as `?from=`.
pub struct Referrer(pub Option<String>);

impl FromRequestParts<Arc<AppState>> for Referrer {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let params: Query<HashMap<String, String>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        Ok(Referrer(params.get("from").filter(|f| !f.trim().is_empty()).cloned()))
    }
}
