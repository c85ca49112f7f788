use axum::Json;
use utoipa::OpenApi;

use crate::routes::{chat, health, history};

#[derive(OpenApi)]
#[openapi(info(
    title = "faq-server",
    description = "FAQ chatbot API",
    version = "0.1.0",
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(chat::ChatApi::openapi());
    root.merge(history::HistoryApi::openapi());
    root.merge(health::HealthApi::openapi());
    root
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(get_docs())
}
