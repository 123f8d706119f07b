use crate::model::error::AppError;
use crate::model::{EventResponse, OutboundMessage, PingEvent, PushEvent};

use super::dispatcher::HandlerContext;
use super::i_notifier::INotifyService;

pub async fn ping<N: INotifyService>(ctx: HandlerContext<N>) -> Result<EventResponse, AppError> {
    let event: PingEvent = serde_json::from_value(ctx.payload)?;

    let message = OutboundMessage::new(format!("Ping of {}", event.hook_id), ctx.recipient);
    let reply = ctx.notifier.send_message(&message).await?;
    if reply.ok {
        Ok(EventResponse::ok("PONG"))
    } else {
        Ok(EventResponse::upstream_fail(
            reply.description.as_deref().unwrap_or("unknown error"),
        ))
    }
}

pub async fn push<N: INotifyService>(ctx: HandlerContext<N>) -> Result<EventResponse, AppError> {
    let event: PushEvent = serde_json::from_value(ctx.payload)?;

    let header = format!(
        "{} has pushed the following commits in {}:",
        event.pusher.name, event.repository.name
    );
    // commit ids cut down to the short 8-char form
    let body = event
        .commits
        .iter()
        .map(|commit| format!("- {:.8}", commit.id))
        .collect::<Vec<_>>()
        .join("\n");

    let message = OutboundMessage::new(format!("{header}\n{body}"), ctx.recipient);
    let reply = ctx.notifier.send_message(&message).await?;
    if reply.ok {
        Ok(EventResponse::ok("OK"))
    } else {
        Ok(EventResponse::upstream_fail(
            reply.description.as_deref().unwrap_or("unknown error"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::model::ApiReply;
    use crate::services::dispatcher::Dispatcher;

    #[derive(Debug, Clone, Default)]
    struct RecordingNotifier {
        ok: bool,
        description: Option<String>,
        sent: Arc<Mutex<Vec<OutboundMessage>>>,
    }

    impl RecordingNotifier {
        fn succeeding() -> Self {
            Self {
                ok: true,
                ..Default::default()
            }
        }

        fn failing(description: &str) -> Self {
            Self {
                ok: false,
                description: Some(description.to_owned()),
                sent: Default::default(),
            }
        }

        fn sent_messages(&self) -> Vec<OutboundMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl INotifyService for RecordingNotifier {
        async fn send_message(&self, message: &OutboundMessage) -> anyhow::Result<ApiReply> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(ApiReply {
                ok: self.ok,
                description: self.description.clone(),
            })
        }
    }

    async fn dispatch(
        notifier: &RecordingNotifier,
        event: &str,
        payload: serde_json::Value,
    ) -> Result<EventResponse, AppError> {
        let dispatcher = Dispatcher::with_builtin_handlers();
        let ctx = HandlerContext::new(payload, notifier.clone(), "chat-1");
        dispatcher.dispatch("github", event, ctx).await
    }

    #[tokio::test]
    async fn ping_reports_the_hook_id_and_pongs() {
        let notifier = RecordingNotifier::succeeding();
        let response = dispatch(&notifier, "ping", json!({"hook_id": 42}))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "PONG");
        let sent = notifier.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].text, "Ping of 42");
        assert_eq!(sent[0].chat_id, "chat-1");
    }

    #[tokio::test]
    async fn ping_surfaces_the_telegram_failure_description() {
        let notifier = RecordingNotifier::failing("boom");
        let response = dispatch(&notifier, "ping", json!({"hook_id": 42}))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, "Fail: boom");
    }

    #[tokio::test]
    async fn push_lists_truncated_commit_ids() {
        let notifier = RecordingNotifier::succeeding();
        let payload = json!({
            "commits": [{"id": "abcdefgh12"}, {"id": "xyz"}],
            "repository": {"name": "repo1"},
            "pusher": {"name": "alice"},
        });
        let response = dispatch(&notifier, "push", payload).await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "OK");
        assert_eq!(
            notifier.sent_messages()[0].text,
            "alice has pushed the following commits in repo1:\n- abcdefgh\n- xyz"
        );
    }

    #[tokio::test]
    async fn push_surfaces_the_telegram_failure_description() {
        let notifier = RecordingNotifier::failing("flood wait");
        let payload = json!({
            "commits": [{"id": "abcdefgh12"}],
            "repository": {"name": "repo1"},
            "pusher": {"name": "alice"},
        });
        let response = dispatch(&notifier, "push", payload).await.unwrap();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, "Fail: flood wait");
    }

    #[tokio::test]
    async fn payload_missing_required_fields_sends_nothing() {
        let notifier = RecordingNotifier::succeeding();
        let err = dispatch(&notifier, "push", json!({"commits": []}))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Payload(_)));
        assert!(notifier.sent_messages().is_empty());
    }
}
