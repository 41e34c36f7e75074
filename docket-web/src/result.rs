use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type Result<T> = ::std::result::Result<T, ApiError>;

/// The three ways a request can fail as far as the client is concerned.
///
/// Only `BadRequest` carries a body (`{"error": "<message>"}`); the other
/// variants are sent with an empty body and the client is expected to
/// re-query if it needs to learn more.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("resource not found")]
    NotFound,

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match *self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound      => StatusCode::NOT_FOUND,
            ApiError::Internal      => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            },

            err => err.status().into_response(),
        }
    }
}
