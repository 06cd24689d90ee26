use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("invalid id")]
    InvalidId(String),

    #[error("failed to read static asset {path}: {source}")]
    StaticAsset {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        match &self {
            TodoError::InvalidId(raw) => {
                tracing::debug!("Rejected todo id {:?}", raw);
                (StatusCode::BAD_REQUEST, "invalid id").into_response()
            }
            TodoError::StaticAsset { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::warn!("{}", self);
                (StatusCode::NOT_FOUND, "not found").into_response()
            }
            TodoError::StaticAsset { .. } => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
