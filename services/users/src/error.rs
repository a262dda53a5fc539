use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Users service error variants.
///
/// Clients only ever see "not found" or a generic internal error; the detail
/// behind `Internal` is logged and never serialized.
#[derive(Debug, thiserror::Error)]
pub enum UsersServiceError {
    #[error("User not found")]
    UserNotFound,
    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for UsersServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // TraceLayer already records every status; only 500s carry detail worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, "internal error");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
