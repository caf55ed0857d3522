// Chat relay: POST /chat -> upstream chat completion API
// Stateless. The only shared state is the config and the HTTP client.

pub mod prompt;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use clap::Parser;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tower_http::cors::CorsLayer;

pub const DEFAULT_UPSTREAM_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";

#[derive(Parser, Debug, Clone)]
#[command(name = "chat-relay")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Relay portfolio chat messages to an upstream completion API")]
pub struct RelayConfig {
    /// Credential for the upstream completion provider
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Chat completion endpoint
    #[arg(long, env = "CHAT_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    #[arg(long, env = "CHAT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
}

impl RelayConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("message is required")]
    MissingMessage,
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(u16),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::MissingMessage => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Message is required" })),
            )
                .into_response(),
            other => {
                tracing::error!("[Relay] {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Upstream 2xx body, kept as the exact bytes received
#[derive(Debug)]
pub struct UpstreamReply {
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));
        let mut response = Response::new(Body::from(self.body));
        response.headers_mut().insert(CONTENT_TYPE, content_type);
        response
    }
}

pub struct RelayState {
    config: RelayConfig,
    http: reqwest::Client,
}

impl RelayState {
    pub fn new(config: RelayConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Forward one message; the upstream body comes back untouched
    pub async fn complete(&self, message: &str) -> Result<UpstreamReply, RelayError> {
        let body = json!({
            "model": self.config.model,
            "messages": prompt::build_messages(message),
        });

        let response = self
            .http
            .post(&self.config.upstream_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RelayError::UpstreamStatus(response.status().as_u16()));
        }
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await?;
        Ok(UpstreamReply { content_type, body })
    }
}

async fn chat(
    State(state): State<Arc<RelayState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<UpstreamReply, RelayError> {
    let message = payload
        .ok()
        .and_then(|Json(req)| req.message)
        .filter(|m| !m.trim().is_empty())
        .ok_or(RelayError::MissingMessage)?;

    tracing::info!("[Relay] forwarding message ({} chars)", message.chars().count());
    state.complete(&message).await
}

pub fn router(state: Arc<RelayState>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config(upstream: &str) -> RelayConfig {
        RelayConfig {
            api_key: "test-key".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            upstream_url: format!("{}/v1/chat/completions", upstream),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    async fn relay_for(upstream: &str) -> String {
        let state = Arc::new(RelayState::new(config(upstream), reqwest::Client::new()));
        serve(router(state)).await
    }

    #[tokio::test]
    async fn test_success_passes_upstream_body_through() {
        const RAW: &str = r#"{"id":"cmpl-1","choices":[{"message":{"content":"hi"}}],"model":"m","usage":{"cost":0.10}}"#;
        let upstream = Router::new().route(
            "/v1/chat/completions",
            post(|headers: axum::http::HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["authorization"], "Bearer test-key");
                assert_eq!(body["messages"][0]["role"], "system");
                assert_eq!(body["messages"][1]["content"], "hello");
                ([(header::CONTENT_TYPE, "application/json; charset=utf-8")], RAW)
            }),
        );
        let relay = relay_for(&serve(upstream).await).await;

        let response = reqwest::Client::new()
            .post(format!("{}/chat", relay))
            .json(&json!({"message": "hello"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["content-type"],
            "application/json; charset=utf-8"
        );
        assert_eq!(response.text().await.unwrap(), RAW);
    }

    #[test]
    fn test_reply_without_content_type_defaults_to_json() {
        let response = UpstreamReply {
            content_type: None,
            body: Bytes::from_static(b"{}"),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_server_error() {
        let upstream = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let relay = relay_for(&serve(upstream).await).await;

        let response = reqwest::Client::new()
            .post(format!("{}/chat", relay))
            .json(&json!({"message": "hello"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Server error"}));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_maps_to_server_error() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let relay = relay_for(&dead).await;

        let response = reqwest::Client::new()
            .post(format!("{}/chat", relay))
            .json(&json!({"message": "hello"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
    }

    #[tokio::test]
    async fn test_blank_message_rejected_without_upstream_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let upstream = Router::new().route(
            "/v1/chat/completions",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(json!({}))
                }
            }),
        );
        let relay = relay_for(&serve(upstream).await).await;
        let client = reqwest::Client::new();

        for body in [json!({"message": "   "}), json!({}), json!({"message": 7})] {
            let response = client
                .post(format!("{}/chat", relay))
                .json(&body)
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), 400);
            let body: Value = response.json().await.unwrap();
            assert_eq!(body, json!({"error": "Message is required"}));
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let relay = relay_for("http://127.0.0.1:9").await;
        let response = reqwest::Client::new()
            .request(reqwest::Method::OPTIONS, format!("{}/chat", relay))
            .header("Origin", "https://dayyan.dev")
            .header("Access-Control-Request-Method", "POST")
            .send()
            .await
            .unwrap();
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[test]
    fn test_config_from_flags() {
        let config = RelayConfig::try_parse_from([
            "chat-relay",
            "--api-key",
            "k",
            "--port",
            "8080",
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }
}
