//! Axum router construction.
//!
//! [`build`] assembles the complete application router:
//! - Middleware layers (CORS, per-request trace-ID span)
//! - Optional OpenAPI document (disable with `FAQ_ENABLE_OPENAPI=false`)
//! - The chat page, `/chat`, `/history` and `/health`

mod chat;
pub mod doc;
mod health;
mod history;
mod page;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::middleware::{cors, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(page::router())
        .merge(health::router())
        .merge(chat::router())
        .merge(history::router());

    if state.config.enable_openapi {
        app = app.route("/api-docs/openapi.json", get(doc::openapi_json));
    }

    app
        // Outermost layers execute first on the way in.
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(trace::trace_middleware))
                .layer(cors::cors_layer(&state.config)),
        )
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use faq_context::{Prompt, WebsiteContext};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::entities::{ConversationStore, SqliteStore};
    use crate::llm::{LanguageModel, LlmError};

    /// Echoes the user turn and records every prompt it receives.
    #[derive(Default)]
    struct StubModel {
        fail: bool,
        prompts: Mutex<Vec<Prompt>>,
    }

    #[async_trait]
    impl LanguageModel for StubModel {
        fn model(&self) -> &str {
            "stub"
        }

        async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.clone());
            if self.fail {
                return Err(LlmError::EmptyResponse);
            }
            Ok(format!("stub: {}", prompt.user))
        }
    }

    struct Harness {
        app: Router,
        store: Arc<SqliteStore>,
        model: Arc<StubModel>,
    }

    async fn harness_with(config: Config, model: StubModel) -> Harness {
        let store = Arc::new(SqliteStore::connect("sqlite::memory:").await.unwrap());
        // Nothing listens on the discard port, so website fetches fail fast.
        let site = WebsiteContext::builder("http://127.0.0.1:9")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let model = Arc::new(model);
        let state = Arc::new(AppState {
            config: Arc::new(config),
            store: Arc::clone(&store),
            site: Arc::new(site),
            llm: model.clone(),
        });
        Harness {
            app: build(state),
            store,
            model,
        }
    }

    async fn harness() -> Harness {
        harness_with(Config::from_lookup(|_| None), StubModel::default()).await
    }

    fn post_chat(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .header("x-forwarded-for", "203.0.113.5")
            .body(body.into())
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn faq_question_is_answered_and_saved() {
        let h = harness().await;
        let resp = h
            .app
            .clone()
            .oneshot(post_chat(json!({ "message": "  Quanto costa?  " }).to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["source"], "faq");
        assert_eq!(body["response"], "stub: Quanto costa?");

        let prompts = h.model.prompts.lock().unwrap().clone();
        assert!(prompts[0].system.contains("corrisponde alla FAQ \"Quanto costa?\""));

        let saved = h.store.recent_conversations(10).await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].user_message, "Quanto costa?");
        assert_eq!(saved[0].ai_response, "stub: Quanto costa?");
        assert_eq!(saved[0].user_ip.as_deref(), Some("203.0.113.5"));
    }

    #[tokio::test]
    async fn website_question_uses_fallback_when_site_is_down() {
        let h = harness().await;
        let resp = h
            .app
            .clone()
            .oneshot(post_chat(json!({ "message": "Avete posizioni aperte?" }).to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["source"], "website");

        let prompts = h.model.prompts.lock().unwrap().clone();
        assert!(prompts[0].system.contains("[FALLBACK - CAREERS]"));
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let h = harness().await;
        let resp = h
            .app
            .clone()
            .oneshot(post_chat(json!({ "message": "   " }).to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "message must not be empty");
        assert!(h.model.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let h = harness().await;
        for body in ["not json", "{}", r#"{"message": 42}"#] {
            let resp = h.app.clone().oneshot(post_chat(body)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert!(json_body(resp).await["error"].is_string());
        }
    }

    #[tokio::test]
    async fn oversized_message_is_rejected() {
        let config = Config::from_lookup(|key| (key == "FAQ_MAX_MESSAGE_BYTES").then(|| "16".to_owned()));
        let h = harness_with(config, StubModel::default()).await;
        let resp = h
            .app
            .clone()
            .oneshot(post_chat(json!({ "message": "a".repeat(17) }).to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn model_failure_returns_500_and_saves_nothing() {
        let model = StubModel {
            fail: true,
            ..StubModel::default()
        };
        let h = harness_with(Config::from_lookup(|_| None), model).await;
        let resp = h
            .app
            .clone()
            .oneshot(post_chat(json!({ "message": "Quanto costa?" }).to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json_body(resp).await["error"].is_string());
        assert!(h.store.recent_conversations(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_insert_returns_500_after_model_answered() {
        let h = harness().await;
        h.store.close().await;

        let resp = h
            .app
            .clone()
            .oneshot(post_chat(json!({ "message": "Quanto costa?" }).to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(resp).await["error"], "internal server error");
        assert_eq!(h.model.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cors_and_trace_headers_are_both_applied() {
        let h = harness().await;
        let req = Request::builder()
            .uri("/health")
            .header("origin", "https://alomana.com")
            .body(Body::empty())
            .unwrap();
        let resp = h.app.clone().oneshot(req).await.unwrap();

        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert!(resp.headers().contains_key("x-trace-id"));
    }

    #[tokio::test]
    async fn cors_restricts_to_configured_origins() {
        let config = Config::from_lookup(|key| {
            (key == "FAQ_CORS_ORIGINS").then(|| "https://alomana.com, https://www.alomana.com".to_owned())
        });
        let h = harness_with(config, StubModel::default()).await;
        let req = Request::builder()
            .uri("/health")
            .header("origin", "https://www.alomana.com")
            .body(Body::empty())
            .unwrap();
        let resp = h.app.clone().oneshot(req).await.unwrap();
        assert_eq!(
            resp.headers()["access-control-allow-origin"],
            "https://www.alomana.com"
        );

        let req = Request::builder()
            .uri("/health")
            .header("origin", "https://evil.example")
            .body(Body::empty())
            .unwrap();
        let resp = h.app.clone().oneshot(req).await.unwrap();
        assert!(!resp.headers().contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn history_is_limited_and_newest_first() {
        let config = Config::from_lookup(|key| (key == "FAQ_HISTORY_MAX_LIMIT").then(|| "3".to_owned()));
        let h = harness_with(config, StubModel::default()).await;
        for question in ["Che prodotto sviluppate?", "Dove siete?", "Come funziona?", "Quanto costa?"] {
            let resp = h
                .app
                .clone()
                .oneshot(post_chat(json!({ "message": question }).to_string()))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let body = json_body(h.app.clone().oneshot(get("/history?limit=2")).await.unwrap()).await;
        let conversations = body["conversations"].as_array().unwrap();
        assert_eq!(conversations.len(), 2);
        assert_eq!(conversations[0]["user_message"], "Quanto costa?");
        assert_eq!(conversations[1]["user_message"], "Come funziona?");

        // Caller-supplied limit is capped, and so is the default.
        for uri in ["/history?limit=50", "/history"] {
            let body = json_body(h.app.clone().oneshot(get(uri)).await.unwrap()).await;
            assert_eq!(body["conversations"].as_array().unwrap().len(), 3, "uri: {uri}");
        }
    }

    #[tokio::test]
    async fn invalid_history_limit_is_rejected() {
        let h = harness().await;
        let resp = h.app.clone().oneshot(get("/history?limit=-1")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_and_page_are_served() {
        let h = harness().await;
        let resp = h.app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["status"], "healthy");

        let resp = h.app.clone().oneshot(get("/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("/chat"));
    }

    #[tokio::test]
    async fn openapi_document_can_be_disabled() {
        let h = harness().await;
        let resp = h.app.clone().oneshot(get("/api-docs/openapi.json")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let doc = json_body(resp).await;
        assert!(doc["paths"]["/chat"].is_object());
        assert!(doc["paths"]["/history"].is_object());

        let config = Config::from_lookup(|key| (key == "FAQ_ENABLE_OPENAPI").then(|| "false".to_owned()));
        let h = harness_with(config, StubModel::default()).await;
        let resp = h.app.clone().oneshot(get("/api-docs/openapi.json")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn trace_id_is_reused_or_generated() {
        let h = harness().await;
        let id = "0f8fad5b-d9cb-469f-a165-70867728950e";
        let req = Request::builder()
            .uri("/health")
            .header("x-trace-id", id)
            .body(Body::empty())
            .unwrap();
        let resp = h.app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.headers()["x-trace-id"], id);

        let resp = h.app.clone().oneshot(get("/health")).await.unwrap();
        let generated = resp.headers()["x-trace-id"].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(generated).is_ok());
    }
}
