use crate::response::{success, ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use notewise::models::completion::{CompletionRequest, CompletionResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SimpleChatRequest {
    message: String,
    #[serde(default)]
    model: Option<String>,
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<CompletionRequest>, JsonRejection>,
) -> ApiResult<CompletionResponse> {
    let Json(request) = payload?;
    let response = state.service.chat(request).await?;
    Ok(success(response))
}

// single user message, non streaming
async fn simple_chat(
    State(state): State<AppState>,
    payload: Result<Json<SimpleChatRequest>, JsonRejection>,
) -> ApiResult<CompletionResponse> {
    let Json(request) = payload?;
    if request.message.is_empty() {
        return Err(ApiError::invalid_params("message must not be empty"));
    }

    let model = request.model.as_deref().filter(|model| !model.is_empty());
    let response = state.service.simple_chat(&request.message, model).await?;
    Ok(success(response))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/chat", post(chat))
        .route("/api/v1/chat/simple", post(simple_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{body_json, completion_body, state_for};
    use axum::{body::Body, http::Request, http::StatusCode};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_chat_passthrough() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({"model": "test-model", "temperature": 0.2})))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("pong")))
            .expect(1)
            .mount(&server)
            .await;

        let app = routes(state_for(&server.uri(), Duration::from_secs(5)));
        let response = app
            .oneshot(post_json(
                "/api/v1/chat",
                json!({
                    "messages": [{"role": "user", "content": "ping"}],
                    "temperature": 0.2
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["choices"][0]["message"]["content"], "pong");
        assert_eq!(body["data"]["usage"]["total_tokens"], 7);
    }

    #[tokio::test]
    async fn test_chat_with_image_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "messages": [{
                    "role": "user",
                    "content": [
                        {"type": "text", "text": "What is this?"},
                        {"type": "image_url", "image_url": {"url": "https://example.com/a.png"}}
                    ]
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("A cat.")))
            .expect(1)
            .mount(&server)
            .await;

        let app = routes(state_for(&server.uri(), Duration::from_secs(5)));
        let response = app
            .oneshot(post_json(
                "/api/v1/chat",
                json!({
                    "messages": [{
                        "role": "user",
                        "content": [
                            {"type": "text", "text": "What is this?"},
                            {"type": "image_url", "image_url": {"url": "https://example.com/a.png"}}
                        ]
                    }]
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_messages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
            .expect(0)
            .mount(&server)
            .await;

        let app = routes(state_for(&server.uri(), Duration::from_secs(5)));
        let response = app
            .oneshot(post_json("/api/v1/chat", json!({"messages": []})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], 10002);
    }

    #[tokio::test]
    async fn test_chat_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let app = routes(state_for(&server.uri(), Duration::from_secs(5)));
        let response = app
            .oneshot(post_json(
                "/api/v1/chat",
                json!({"messages": [{"role": "user", "content": "hi"}]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["code"], 20001);
        assert!(body["message"].as_str().unwrap().contains("overloaded"));
    }

    #[tokio::test]
    async fn test_simple_chat() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "Tell me a joke"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("No.")))
            .expect(1)
            .mount(&server)
            .await;

        let app = routes(state_for(&server.uri(), Duration::from_secs(5)));
        let response = app
            .oneshot(post_json(
                "/api/v1/chat/simple",
                json!({"message": "Tell me a joke", "model": "gpt-4o-mini"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["data"]["choices"][0]["message"]["content"],
            "No."
        );
    }

    #[tokio::test]
    async fn test_simple_chat_blank_model_uses_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"model": "test-model"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let app = routes(state_for(&server.uri(), Duration::from_secs(5)));
        let response = app
            .oneshot(post_json(
                "/api/v1/chat/simple",
                json!({"message": "hi", "model": ""}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_simple_chat_requires_message() {
        let server = MockServer::start().await;
        let app = routes(state_for(&server.uri(), Duration::from_secs(5)));

        let response = app
            .oneshot(post_json("/api/v1/chat/simple", json!({"model": "m"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], 10002);
    }
}
