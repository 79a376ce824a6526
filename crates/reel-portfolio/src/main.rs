use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reel_portfolio::{
    catalog::VideoCatalog,
    config::Config,
    sources::{GoogleSheetsSource, RowSource},
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "reel-portfolio")]
#[command(version)]
#[command(about = "Video portfolio catalog and embed resolution service")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.log_level == "trace" {
        format!("reel_portfolio={},tower_http=trace", cli.log_level)
    } else {
        format!("reel_portfolio={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Reel Portfolio v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    if config.sheets.credentials().is_none() {
        info!("Google Sheets credentials not configured, serving the bundled dataset");
    }

    let source: Arc<dyn RowSource> = Arc::new(GoogleSheetsSource::from_config(&config.sheets)?);
    let catalog = Arc::new(VideoCatalog::new(source, config.sheets.cache_ttl));
    info!(
        "Video catalog initialized (cache ttl {})",
        humantime::format_duration(config.sheets.cache_ttl)
    );

    let server = WebServer::new(config, catalog)?;
    info!("Starting web server on {}", server.addr());
    server.serve().await?;

    Ok(())
}
