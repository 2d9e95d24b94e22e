use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hwbot::{
    client::{ClientConfig, HomeworkApi},
    config::AppConfig,
    notify::TelegramNotifier,
    poller::StatusPoller,
};

const ONLINE_MESSAGE: &str = "Hi, I'm up and watching your homework!";

#[derive(Debug, Parser)]
#[command(name = "hwbot", about, version)]
struct Args {
    /// Seconds between poll cycles
    #[arg(long)]
    interval: Option<u64>,

    /// Move the from_date cursor forward after each successful cycle
    /// instead of re-requesting the startup window forever
    #[arg(long)]
    advance_cursor: bool,

    /// Override the homework statuses endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Override the Telegram Bot API base URL
    #[arg(long)]
    telegram_api_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // The one fatal condition: refuse to start, but exit cleanly.
            error!(error = %e, "cannot start without credentials");
            return Ok(());
        }
    };

    if let Some(secs) = args.interval {
        config.poll_interval = std::time::Duration::from_secs(secs);
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint.into();
    }
    if let Some(url) = args.telegram_api_url {
        config.telegram_api_url = url.into();
    }
    config.advance_cursor |= args.advance_cursor;

    info!(version = env!("CARGO_PKG_VERSION"), "hwbot starting up");

    let api = HomeworkApi::new(ClientConfig::from(&config))?;
    let notifier = TelegramNotifier::new(&config)?;

    notifier.send(ONLINE_MESSAGE).await?;

    StatusPoller::new(
        api,
        notifier,
        config.poll_interval,
        config.advance_cursor,
    )
    .run()
    .await;

    Ok(())
}
