use crate::app::AppEnv;
use crate::common::{consts, crypt};
use crate::model::error::AppError;
use crate::model::EventResponse;
use crate::services::dispatcher::HandlerContext;
use axum::body::Bytes;
use axum::extract::State;
use http::{HeaderMap, StatusCode};
use std::sync::Arc;

#[tracing::instrument(level = "debug", skip(app, body))]
#[axum::debug_handler]
pub async fn github_handler(
    State(app): State<Arc<AppEnv>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<EventResponse, AppError> {
    let signature = headers
        .get(consts::X_HUB_SIGNATURE)
        .and_then(|h| h.to_str().ok());
    if !app.allow_unsigned
        && !crypt::hmac_sha1_verify(app.github_secret.as_bytes(), &body, signature)
    {
        return Err(AppError::BadCredentials);
    }

    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| AppError::BadRequest)?;

    let event = headers
        .get(consts::X_GITHUB_EVENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    let ctx = HandlerContext::new(payload, app.notifier.clone(), app.telegram_recipient.clone());
    match app
        .dispatcher
        .dispatch(consts::GITHUB_SERVICE, event, ctx)
        .await
    {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::error!("error while handling github {event:?} event: {err:?}");
            Err(err)
        }
    }
}

// inbound telegram updates are accepted and dropped for now
#[tracing::instrument(level = "debug")]
pub async fn telegram_handler() -> StatusCode {
    StatusCode::OK
}
