use anyhow::Context;

use crate::model::{ApiReply, OutboundMessage};

use super::i_notifier::INotifyService;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct TelegramServiceImpl {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl TelegramServiceImpl {
    pub fn new(client: reqwest::Client, token: impl Into<String>) -> Self {
        Self::with_api_base(client, TELEGRAM_API_BASE, token)
    }

    // tests point this at a local stub server instead of api.telegram.org
    pub fn with_api_base(
        client: reqwest::Client,
        api_base: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    async fn call_api(
        &self,
        function: &str,
        form: &[(&str, &str)],
    ) -> reqwest::Result<reqwest::Response> {
        let url = format!("{}/bot{}/{}", self.api_base, self.token, function);
        self.client.post(url).form(&form).send().await
    }

    /// Register `<server_url>/telegram` as the bot's webhook callback.
    pub async fn set_webhook(&self, server_url: &str) -> anyhow::Result<()> {
        let url = format!("{server_url}/telegram");
        self.call_api("setWebhook", &[("url", url.as_str())])
            .await
            .context("setWebhook call failed")?
            .error_for_status()
            .context("telegram rejected setWebhook")?;
        Ok(())
    }
}

impl INotifyService for TelegramServiceImpl {
    async fn send_message(&self, message: &OutboundMessage) -> anyhow::Result<ApiReply> {
        let mut form: Vec<(&str, &str)> = Vec::with_capacity(2 + message.extra.len());
        form.push(("text", message.text.as_str()));
        form.push(("chat_id", message.chat_id.as_str()));
        for (key, value) in &message.extra {
            form.push((key.as_str(), value.as_str()));
        }

        let reply = self
            .call_api("sendMessage", form.as_slice())
            .await
            .context("sendMessage call failed")?
            .json::<ApiReply>()
            .await
            .context("malformed sendMessage reply")?;
        Ok(reply)
    }
}
