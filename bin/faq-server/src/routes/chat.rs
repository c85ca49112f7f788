//! `POST /chat`: answer one user message.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::entities::{ConversationStore, NewConversation};
use crate::error::ServerError;
use crate::middleware::ClientAddr;
use crate::schemas::chat::{ChatRequest, ChatResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(chat),
    components(schemas(ChatRequest, ChatResponse))
)]
pub struct ChatApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

/// Classify the message, gather website context when needed, ask the model,
/// and record the exchange.
///
/// Nothing is persisted when the model call fails.
#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Model reply", body = ChatResponse),
        (status = 400, description = "Missing, blank or oversized message"),
        (status = 500, description = "Model or database failure"),
    )
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    ClientAddr(user_ip): ClientAddr,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ServerError> {
    let Json(req) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let message = req.message.trim();
    if message.is_empty() {
        return Err(ServerError::BadRequest("message must not be empty".into()));
    }
    let max = state.config.max_message_bytes;
    if message.len() > max {
        return Err(ServerError::BadRequest(format!(
            "message exceeds the {max}-byte limit"
        )));
    }

    let prepared = faq_context::prepare(&state.site, message).await;
    let source = prepared.route.source();
    info!(
        source,
        with_context = prepared.website_context.is_some(),
        model = state.llm.model(),
        "answering message"
    );

    let reply = state.llm.complete(&prepared.prompt).await?;

    let record = state
        .store
        .save_conversation(NewConversation {
            user_message: message.to_owned(),
            ai_response: reply.clone(),
            user_ip,
        })
        .await?;
    info!(conversation_id = record.id, "conversation saved");

    Ok(Json(ChatResponse {
        response: reply,
        source: source.to_owned(),
    }))
}
