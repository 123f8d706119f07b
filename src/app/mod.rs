use crate::services::dispatcher::Dispatcher;
use crate::services::i_notifier::INotifyService;
use crate::services::telegram::TelegramServiceImpl;

#[derive(Debug, Clone)]
pub struct AppEnv<Notifier: INotifyService + Clone = TelegramServiceImpl> {
    pub dispatcher: Dispatcher<Notifier>,
    pub notifier: Notifier,
    pub github_secret: String,
    pub telegram_recipient: String,
    pub allow_unsigned: bool,
}

impl<Notifier> AppEnv<Notifier>
where
    Notifier: INotifyService + Clone,
{
    pub fn new(
        dispatcher: Dispatcher<Notifier>,
        notifier: Notifier,
        github_secret: impl Into<String>,
        telegram_recipient: impl Into<String>,
        allow_unsigned: bool,
    ) -> Self {
        Self {
            dispatcher,
            notifier,
            github_secret: github_secret.into(),
            telegram_recipient: telegram_recipient.into(),
            allow_unsigned,
        }
    }
}
