//! Router-level test harness over in-memory stores.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use storage::{
    ContentStore,
    dto::{
        contact::ContactMessage,
        festival_event::{CategoryAllocation, FestivalEventDetail},
    },
    memory::MemoryRegistrationStore,
};
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::mail::{MailError, Mailer};
use crate::middleware::auth::ApiKeys;
use crate::routes;
use crate::state::AppState;

pub const TEST_API_KEY: &str = "test-key";

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<ContactMessage>>,
}

impl RecordingMailer {
    pub async fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError> {
        self.sent.lock().await.push(message.clone());
        Ok(())
    }
}

/// Science Quiz (juniors, 3 slots) and Debate (seniors, 2 slots).
pub fn festival_catalog() -> Vec<FestivalEventDetail> {
    vec![
        FestivalEventDetail {
            event_id: 1,
            name: "Science Quiz".to_string(),
            categories: vec![CategoryAllocation {
                category_id: 10,
                name: "Juniors".to_string(),
                min_class: 1,
                max_class: 5,
                max_participants: 3,
            }],
        },
        FestivalEventDetail {
            event_id: 2,
            name: "Debate".to_string(),
            categories: vec![CategoryAllocation {
                category_id: 20,
                name: "Seniors".to_string(),
                min_class: 6,
                max_class: 12,
                max_participants: 2,
            }],
        },
    ]
}

pub struct TestApp {
    router: Router,
    pub registrations: Arc<MemoryRegistrationStore>,
    pub content: Arc<ContentStore>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(MemoryRegistrationStore::new(festival_catalog()))
    }

    pub fn with_store(store: MemoryRegistrationStore) -> Self {
        let registrations = Arc::new(store);
        let content = Arc::new(ContentStore::new());
        let mailer = Arc::new(RecordingMailer::default());

        let state = AppState::new(registrations.clone(), content.clone(), mailer.clone());
        let router = routes::router(state, ApiKeys::from_comma_separated(TEST_API_KEY));

        Self {
            router,
            registrations,
            content,
            mailer,
        }
    }

    /// Same stores, but contact mail goes through the given mailer.
    pub fn with_mailer(mailer: Arc<dyn Mailer>) -> Self {
        let app = Self::new();
        let state = AppState::new(app.registrations.clone(), app.content.clone(), mailer);

        Self {
            router: routes::router(state, ApiKeys::from_comma_separated(TEST_API_KEY)),
            ..app
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body), None).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        api_key: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(key) = api_key {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", key));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}
