use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use healthbot_core::{ChatReply, Chatbot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shared state handed to every handler.
pub type AppState = Arc<Chatbot>;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    /// A missing field is treated like an empty message.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
}

/// `POST /chat`
///
/// Always answers with a reply. A body that cannot be read gets the generic
/// server error text instead of an HTTP error.
pub async fn chat(
    State(bot): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let reply = match payload {
        Ok(Json(request)) => {
            info!("Chat message ({} chars)", request.message.chars().count());
            debug!("Message: {}", request.message);
            let reply = bot.reply(&request.message).await;
            info!("Reply kind: {}", reply_kind(&reply));
            reply
        }
        Err(rejection) => {
            warn!("Chat error: {rejection}");
            ChatReply::ServerError
        }
    };

    Json(ChatResponse {
        reply: reply.into_text(),
    })
}

/// `GET /health`
pub async fn health(State(bot): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        records: bot.store().len(),
    })
}

const fn reply_kind(reply: &ChatReply) -> &'static str {
    match reply {
        ChatReply::InvalidInput => "invalid_input",
        ChatReply::DataUnavailable => "data_unavailable",
        ChatReply::NoMatch => "no_match",
        ChatReply::Found(_) => "found",
        ChatReply::ServerError => "server_error",
    }
}
