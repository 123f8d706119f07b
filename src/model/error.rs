use axum::response::{IntoResponse, Response};
use reqwest::StatusCode;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AppError {
    #[error("request signature did not match the shared github secret")]
    BadCredentials,
    #[error("request body is not valid json")]
    BadRequest,
    #[error("malformed event payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("Not implemented {service}:{event}")]
    NotImplemented { service: String, event: String },
    #[error("error: {0}")]
    WrappedError(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadCredentials => (StatusCode::UNAUTHORIZED, "Bad Credentials".to_owned()),
            AppError::BadRequest | AppError::Payload(_) => {
                (StatusCode::BAD_REQUEST, "Bad Request".to_owned())
            }
            AppError::NotImplemented { .. } => (StatusCode::NOT_IMPLEMENTED, self.to_string()),
            AppError::WrappedError(_) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", self)),
        };
        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::WrappedError(err)
    }
}
