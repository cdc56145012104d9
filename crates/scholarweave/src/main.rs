//! ScholarWeave API - Entry Point

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholarweave::{config::Config, server::GatewayServer};

#[derive(Parser, Debug)]
#[command(name = "scholarweave")]
#[command(about = "HTTP gateway for OpenAlex paper search and lookup")]
#[command(version)]
struct Cli {
    /// Host to bind
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to bind
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// OpenAlex API base URL
    #[arg(long = "openalex-url", env = "OPENALEX_API_URL")]
    openalex_url: Option<String>,

    /// Contact email for the OpenAlex polite pool
    #[arg(long, env = "OPENALEX_MAILTO")]
    mailto: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long = "timeout-secs", env = "OPENALEX_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    /// Overlay explicit flags on the environment configuration.
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = self.openalex_url {
            config.openalex_api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(mailto) = self.mailto {
            config.mailto = Some(mailto);
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        config
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting ScholarWeave API");

    let config = cli.apply(Config::from_env()?);
    GatewayServer::new(config)?.run().await
}
