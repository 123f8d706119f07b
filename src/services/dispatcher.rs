use std::collections::HashMap;

use futures::future::BoxFuture;

use crate::common::consts;
use crate::model::error::AppError;
use crate::model::EventResponse;

use super::github;
use super::i_notifier::INotifyService;

/// Everything a handler gets to work with for one inbound event.
#[derive(Debug, Clone)]
pub struct HandlerContext<N> {
    pub payload: serde_json::Value,
    pub notifier: N,
    pub recipient: String,
}

impl<N> HandlerContext<N> {
    pub fn new(payload: serde_json::Value, notifier: N, recipient: impl Into<String>) -> Self {
        Self {
            payload,
            notifier,
            recipient: recipient.into(),
        }
    }
}

pub type Handler<N> = fn(HandlerContext<N>) -> BoxFuture<'static, Result<EventResponse, AppError>>;

/// Immutable `(service, event)` -> handler mapping, populated once before
/// the server starts accepting requests and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dispatcher<N> {
    handlers: HashMap<(String, String), Handler<N>>,
}

impl<N> Dispatcher<N> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Last registration for a key wins silently.
    pub fn register(&mut self, service: &str, event: &str, handler: Handler<N>) {
        self.handlers
            .insert((service.to_owned(), event.to_owned()), handler);
    }

    pub async fn dispatch(
        &self,
        service: &str,
        event: &str,
        ctx: HandlerContext<N>,
    ) -> Result<EventResponse, AppError> {
        let Some(handler) = self.handlers.get(&(service.to_owned(), event.to_owned())) else {
            return Err(AppError::NotImplemented {
                service: service.to_owned(),
                event: event.to_owned(),
            });
        };
        handler(ctx).await
    }
}

impl<N> Default for Dispatcher<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: INotifyService> Dispatcher<N> {
    pub fn with_builtin_handlers() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(consts::GITHUB_SERVICE, "ping", |ctx| {
            Box::pin(github::ping(ctx))
        });
        dispatcher.register(consts::GITHUB_SERVICE, "push", |ctx| {
            Box::pin(github::push(ctx))
        });
        dispatcher
    }
}
