use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use relay_svc::app::AppEnv;
use relay_svc::services::dispatcher::Dispatcher;
use relay_svc::services::telegram::TelegramServiceImpl;
use relay_svc::{config, http::router};
use tokio::signal;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let cnf = Lazy::force(config::get());
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_span_events(FmtSpan::CLOSE))
        .init();

    let telegram = TelegramServiceImpl::new(reqwest::Client::new(), cnf.telegram_token.clone());
    telegram
        .set_webhook(&cnf.server_url)
        .await
        .context("failed to register the telegram webhook")?;

    if cnf.allow_unsigned {
        tracing::warn!("signature verification is off, serving unsigned github events");
    }

    let app = AppEnv::new(
        Dispatcher::with_builtin_handlers(),
        telegram,
        cnf.github_secret.clone(),
        cnf.telegram_id.clone(),
        cnf.allow_unsigned,
    );
    let router = router::new(app).await;

    tracing::info!("starting axum server");
    let socket_addr = format!("{}:{}", cnf.app_host, cnf.app_port);
    let sock = tokio::net::TcpSocket::new_v4()?;
    sock.set_reuseport(true)?;
    sock.bind(socket_addr.parse()?)?;
    let listener = sock.listen(10000)?;

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let ctrl_c = async {
                signal::ctrl_c()
                    .await
                    .expect("failed to install C-c handler");
            };

            let sigterm = async {
                signal::unix::signal(signal::unix::SignalKind::terminate())
                    .expect("failed to install sigterm handler")
                    .recv()
                    .await
            };

            tokio::select! {
                _ = ctrl_c => {
                tracing::info!("ctrl-c hit, graceful shutdown...")
                },
                _ = sigterm => {
                tracing::info!("SIGTERM received, graceful shutdown...")
                },
            };
        })
        .await
        .context("axum server failed")?;
    tracing::info!("process terminated");
    Ok(())
}
