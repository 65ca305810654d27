use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::feed::FeedError;
use crate::web::auth::PermissionError;

#[derive(Debug)]
pub enum ApiError {
    Permission(PermissionError),
    MalformedFeed(FeedError),
    NotFound(&'static str),
}

impl From<PermissionError> for ApiError {
    fn from(e: PermissionError) -> Self {
        ApiError::Permission(e)
    }
}

impl From<FeedError> for ApiError {
    fn from(e: FeedError) -> Self {
        ApiError::MalformedFeed(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Permission(e) => e.into_response(),
            ApiError::MalformedFeed(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message("malformed_feed", &e.to_string())),
            )
                .into_response(),
            ApiError::NotFound(what) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(what))).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: None,
        }
    }

    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
