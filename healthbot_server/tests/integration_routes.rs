//! Integration tests for the HTTP routes.
//!
//! These tests verify that:
//! - `/chat` returns the formatted reply for a known disease
//! - Empty, missing and unreadable messages get their fixed replies
//! - An empty store answers with the data-unavailable notice
//! - `/health` reports the record count

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use healthbot_config::ServerConfig;
use healthbot_core::{Chatbot, DiseaseRecord, RecordStore, UnmatchedQuerySink};
use healthbot_server::ChatServer;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct MemorySink {
    queries: Mutex<Vec<String>>,
}

#[async_trait]
impl UnmatchedQuerySink for MemorySink {
    async fn record(&self, query: &str) -> anyhow::Result<()> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(())
    }
}

fn flu_store() -> RecordStore {
    RecordStore::new(vec![
        DiseaseRecord::try_new(Some("flu".to_string()))
            .unwrap()
            .with_description(Some("Viral infection".to_string()))
            .with_notes([Some("fever".to_string()), Some("cough".to_string()), None]),
    ])
}

fn app(bot: Chatbot) -> Router {
    ChatServer::new(Arc::new(bot), ServerConfig::default())
        .router()
        .unwrap()
}

async fn post_chat(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_chat_known_disease() {
    let (status, body) = post_chat(app(Chatbot::new(flu_store())), r#"{"message": "Flu"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "reply": "Viral infection\n\nSymptoms:\n• fever\n• cough" })
    );
}

#[tokio::test]
async fn test_chat_whitespace_message() {
    let (_, body) = post_chat(app(Chatbot::new(flu_store())), r#"{"message": "   "}"#).await;
    assert_eq!(body["reply"], "Please enter a valid message.");
}

#[tokio::test]
async fn test_chat_missing_message_field() {
    let (_, body) = post_chat(app(Chatbot::new(flu_store())), "{}").await;
    assert_eq!(body["reply"], "Please enter a valid message.");
}

#[tokio::test]
async fn test_chat_unreadable_body() {
    let (status, body) = post_chat(app(Chatbot::new(flu_store())), "not json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Server error occurred.");
}

#[tokio::test]
async fn test_chat_non_string_message() {
    let (_, body) = post_chat(app(Chatbot::new(flu_store())), r#"{"message": 42}"#).await;
    assert_eq!(body["reply"], "Server error occurred.");
}

#[tokio::test]
async fn test_chat_unknown_disease_is_recorded() {
    let sink = Arc::new(MemorySink::default());
    let bot = Chatbot::new(flu_store()).with_sink(sink.clone());

    let (_, body) = post_chat(app(bot), r#"{"message": " measles "}"#).await;

    assert_eq!(body["reply"], "Sorry, I don't have information on that disease.");
    assert_eq!(*sink.queries.lock().unwrap(), vec!["measles".to_string()]);
}

#[tokio::test]
async fn test_chat_empty_store() {
    let (_, body) = post_chat(app(Chatbot::new(RecordStore::empty())), r#"{"message": "flu"}"#).await;
    assert_eq!(body["reply"], "Medical database is not available right now.");
}

#[tokio::test]
async fn test_health_reports_record_count() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app(Chatbot::new(flu_store()))
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "running", "records": 1 }));
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/chat")
        .header(header::ORIGIN, "https://frontend.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app(Chatbot::new(flu_store()))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
