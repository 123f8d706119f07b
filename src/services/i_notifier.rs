use crate::model::{ApiReply, OutboundMessage};

pub trait INotifyService: Send + Sync + 'static {
    fn send_message(
        &self,
        message: &OutboundMessage,
    ) -> impl Future<Output = anyhow::Result<ApiReply>> + Send;
}
