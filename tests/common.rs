use cme_portal::{
    api::router::create_router,
    config::Config,
    domain::models::notification::Notification,
    domain::ports::Notifier,
    error::AppError,
    infra::factory::bootstrap_state_with_notifier,
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Records every toast instead of logging it.
#[derive(Default)]
pub struct MockNotifier {
    pub seen: Mutex<Vec<Notification>>,
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), AppError> {
        self.seen.lock().unwrap().push(notification);
        Ok(())
    }
}

impl MockNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|n| n.title.clone()).collect()
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub notifier: Arc<MockNotifier>,
}

#[allow(dead_code)]
pub const POSTER_DELAY: Duration = Duration::from_millis(20);

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let config = Config {
            port: 0,
            poster_delay: POSTER_DELAY,
            public_base_url: "https://cme.test".to_string(),
            ..Config::default()
        };

        let notifier = Arc::new(MockNotifier::default());
        let state = Arc::new(bootstrap_state_with_notifier(&config, notifier.clone()));
        let router = create_router(state.clone());

        Self { router, state, notifier }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> Response {
        self.send_json("POST", uri, payload).await
    }

    pub async fn send_json(&self, method: &str, uri: &str, payload: &Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// GET that must succeed; returns the parsed body.
    pub async fn get_ok(&self, uri: &str) -> Value {
        let response = self.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        parse_body(response).await
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub fn ids(events: &Value) -> Vec<String> {
    events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}
