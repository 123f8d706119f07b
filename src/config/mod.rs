use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;

#[serde_inline_default]
#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde_inline_default("127.0.0.1".to_string())]
    pub app_host: String,
    #[serde_inline_default(8080)]
    pub app_port: u32,
    #[serde_inline_default("error".to_string())]
    pub rust_log: String,
    pub github_secret: String,
    pub server_url: String,
    pub telegram_token: String,
    pub telegram_id: String,
    // signature verification stays on unless explicitly switched off
    #[serde_inline_default(false)]
    pub allow_unsigned: bool,
}

static CONFIG: Lazy<Config> = Lazy::new(|| load_config().unwrap());

fn load_config() -> Result<Config> {
    // a missing .env file is fine, the process environment may carry everything
    let _ = dotenvy::dotenv();
    envy::from_env::<Config>()
        .map_err(|e| anyhow!(e))
        .context(format!(
            "at {} line {} column {}",
            file!(),
            line!(),
            column!(),
        ))
}

pub fn get() -> &'static Lazy<Config> {
    &CONFIG
}
