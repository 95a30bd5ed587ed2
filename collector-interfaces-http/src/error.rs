use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    BadRequest(String),
    Upstream(String),
    Internal(String),
}

impl From<collector_application::AppError> for HttpError {
    fn from(value: collector_application::AppError) -> Self {
        match value {
            collector_application::AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            collector_application::AppError::Upstream(msg) => HttpError::Upstream(msg),
            collector_application::AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, format!("bad request: {}", msg)),
            HttpError::Upstream(msg) => (StatusCode::BAD_GATEWAY, format!("vendor api: {}", msg)),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
