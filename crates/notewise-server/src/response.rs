//! The `{code, message, data}` envelope every API route answers with.
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notewise::errors::PipelineError;
use serde::Serialize;

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = 10001;
pub const INVALID_PARAMS: i32 = 10002;
pub const AI_SERVICE_ERROR: i32 = 20001;
pub const AI_SERVICE_TIMEOUT: i32 = 20002;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn success<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        code: SUCCESS,
        message: "success".to_string(),
        data: Some(data),
    })
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: i32,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, code: i32, summary: &str, detail: impl AsRef<str>) -> Self {
        let detail = detail.as_ref();
        let message = if detail.is_empty() {
            summary.to_string()
        } else {
            format!("{}: {}", summary, detail)
        };
        Self {
            status,
            code,
            message,
        }
    }

    pub fn invalid_params(detail: impl AsRef<str>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            INVALID_PARAMS,
            "invalid parameters",
            detail,
        )
    }

    pub fn internal(detail: impl AsRef<str>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR,
            "internal server error",
            detail,
        )
    }

    fn from_rejection(status: StatusCode, detail: String) -> Self {
        if status.is_server_error() {
            Self::internal(detail)
        } else {
            Self::invalid_params(detail)
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match &err {
            PipelineError::InvalidRequest(detail) => Self::invalid_params(detail),
            _ if err.is_timeout() => Self::new(
                StatusCode::GATEWAY_TIMEOUT,
                AI_SERVICE_TIMEOUT,
                "AI service timeout",
                err.to_string(),
            ),
            _ => Self::new(
                StatusCode::BAD_GATEWAY,
                AI_SERVICE_ERROR,
                "AI service error",
                err.to_string(),
            ),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::from_rejection(err.status(), err.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, "{}", self.message);
        } else {
            tracing::debug!(code = self.code, "{}", self.message);
        }

        let body = ApiResponse::<()> {
            code: self.code,
            message: self.message,
            data: None,
        };
        (self.status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let Json(body) = success(json!({"answer": 42}));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"code": 0, "message": "success", "data": {"answer": 42}})
        );
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let body = ApiResponse::<()> {
            code: INVALID_PARAMS,
            message: "invalid parameters".to_string(),
            data: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"code": 10002, "message": "invalid parameters"})
        );
    }

    #[test]
    fn test_pipeline_error_mapping() {
        let err = ApiError::from(PipelineError::InvalidRequest("no messages".to_string()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, INVALID_PARAMS);
        assert_eq!(err.message, "invalid parameters: no messages");

        let err = ApiError::from(PipelineError::Upstream {
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.code, AI_SERVICE_ERROR);
        assert!(err.message.starts_with("AI service error: "));

        let err = ApiError::from(PipelineError::SchemaValidation {
            field: "prerequisites",
            expected: 5,
            actual: 4,
        });
        assert_eq!(err.code, AI_SERVICE_ERROR);
        assert!(err.message.ends_with("Expected 5 prerequisites, got 4"));
    }

    #[test]
    fn test_empty_detail() {
        let err = ApiError::internal("");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "internal server error");
    }
}
