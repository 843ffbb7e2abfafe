use axum::{
    body::Body,
    extract::Request,
    response::Redirect,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{achievements, event, health, home, organizer, passbook, wizard};
use crate::domain::services::navigation::{role_for_path, HOME_PATH};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Doctor
        .route("/", get(home::doctor_home))
        .route("/achievements", get(achievements::achievements))
        .route("/passbook", get(passbook::passbook))
        .route("/passbook/export", post(passbook::export_renewal_pack))

        // Organizer
        .route("/organizer/create", get(organizer::create_event))
        .route("/organizer/create/validate", post(wizard::validate))
        .route("/organizer/create/publish", post(wizard::publish))
        .route("/organizer/create/draft", post(wizard::save_draft))
        .route("/organizer/create/poster", post(wizard::generate_poster))
        .route("/organizer/create/agenda", post(wizard::add_agenda_item))
        .route("/organizer/create/agenda/{row_id}", put(wizard::update_agenda_item).delete(wizard::remove_agenda_item))
        .route("/organizer/create/faculty", post(wizard::add_faculty))
        .route("/organizer/create/faculty/{row_id}", put(wizard::update_faculty).delete(wizard::remove_faculty))
        .route("/organizer/events", get(organizer::discover_events))
        .route("/organizer/profile", get(organizer::organizer_profile))

        // Public
        .route("/event/{id}", get(event::event_page))
        .route("/event/{id}/register", post(event::register))
        .route("/event/{id}/share", post(event::share))

        .fallback(|| async { Redirect::temporary(HOME_PATH) })

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        role = %role_for_path(request.uri().path()),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
