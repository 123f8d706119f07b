use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Deserialize;

pub mod error;

/// One Telegram message, built per handler invocation and sent once.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub text: String,
    pub chat_id: String,
    pub extra: Vec<(String, String)>,
}

impl OutboundMessage {
    pub fn new(text: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chat_id: chat_id.into(),
            extra: Vec::new(),
        }
    }
}

/// What the Telegram Bot API reports back for a method call.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiReply {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Status and body a handler hands back to the inbound HTTP caller.
#[derive(Debug, Clone)]
pub struct EventResponse {
    pub status: StatusCode,
    pub body: String,
}

impl EventResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    pub fn upstream_fail(description: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: format!("Fail: {description}"),
        }
    }
}

impl IntoResponse for EventResponse {
    fn into_response(self) -> Response {
        (self.status, self.body).into_response()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PingEvent {
    pub hook_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    pub commits: Vec<PushCommit>,
    pub repository: Repository,
    pub pusher: Pusher,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushCommit {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pusher {
    pub name: String,
}
