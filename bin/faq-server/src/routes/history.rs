//! `GET /history`: recent conversations, newest first.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::entities::ConversationStore;
use crate::error::ServerError;
use crate::schemas::chat::{ConversationResponse, HistoryQuery, HistoryResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(history),
    components(schemas(HistoryResponse, ConversationResponse))
)]
pub struct HistoryApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/history", get(history))
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "chat",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Recent conversations", body = HistoryResponse),
        (status = 400, description = "Invalid limit"),
        (status = 500, description = "Database failure"),
    )
)]
pub async fn history(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>, ServerError> {
    let Query(query) = query.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let limit = query
        .limit
        .unwrap_or(state.config.history_default_limit)
        .min(state.config.history_max_limit);

    let records = state.store.recent_conversations(limit).await?;
    Ok(Json(HistoryResponse {
        conversations: records.iter().map(|r| r.to_response()).collect(),
    }))
}
