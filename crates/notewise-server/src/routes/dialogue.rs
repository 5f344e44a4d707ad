use crate::response::{success, ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::post,
    Json, Router,
};
use notewise::models::knowledge::{DialogueReply, DialogueTurn};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DialogueRequest {
    message: String,
    #[serde(default)]
    conversation_history: Vec<DialogueTurn>,
}

async fn dialogue(
    State(state): State<AppState>,
    Path(knowledge_point_id): Path<String>,
    payload: Result<Json<DialogueRequest>, JsonRejection>,
) -> ApiResult<DialogueReply> {
    let Json(request) = payload?;
    if request.message.trim().is_empty() {
        return Err(ApiError::invalid_params("message must not be empty"));
    }

    let reply = state
        .service
        .dialogue(
            &knowledge_point_id,
            &request.message,
            &request.conversation_history,
        )
        .await?;
    Ok(success(reply))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/knowledge-points/:knowledgePointId/dialogue",
            post(dialogue),
        )
        .with_state(state)
}
