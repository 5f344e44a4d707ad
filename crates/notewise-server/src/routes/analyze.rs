use crate::response::{success, ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        DefaultBodyLimit, State,
    },
    routing::post,
    Router,
};
use notewise::knowledge::{validate_upload, MAX_IMAGE_BYTES};
use notewise::models::knowledge::KnowledgeAnalysis;

const IMAGE_FIELD: &str = "image";

/// Room for the multipart framing around the largest accepted image
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES + 1024 * 1024;

async fn analyze_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<KnowledgeAnalysis> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let image = field.bytes().await?;
        validate_upload(&filename, image.len())?;

        let analysis = state.service.analyze_image(&image, &filename).await?;
        return Ok(success(analysis));
    }

    Err(ApiError::invalid_params(
        "an image file is required in the `image` form field",
    ))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze/image", post(analyze_image))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .with_state(state)
}
