use anyhow::Result;
use bbox_exporter::{config::Config, server};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/Default.toml")]
    config: String,

    /// Bbox API endpoint, must be https (overrides config)
    #[arg(long, env = "BBOX_ENDPOINT")]
    bbox: Option<String>,

    /// Bbox administration password (overrides config)
    #[arg(long, env = "BBOX_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Port to listen on for metrics (overrides config)
    #[arg(short, long, env = "EXPORTER_PORT")]
    port: Option<u16>,

    /// Address to bind to (overrides config)
    #[arg(short, long, env = "EXPORTER_ADDR")]
    addr: Option<String>,

    /// Path under which to expose metrics (overrides config)
    #[arg(long)]
    metrics_path: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first, --debug picks the default filter
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Bbox Prometheus Exporter v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration
    let mut config = Config::load(&args.config)?;

    // Override with CLI arguments if provided
    if let Some(endpoint) = args.bbox {
        config.bbox.endpoint = endpoint;
    }
    if let Some(password) = args.password {
        config.bbox.password = secrecy::SecretString::new(password.into());
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(addr) = args.addr {
        config.server.addr = addr;
    }
    if let Some(metrics_path) = args.metrics_path {
        config.server.metrics_path = metrics_path;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    info!("Configuration loaded successfully");
    info!("Bbox endpoint: {}", config.bbox.endpoint);
    info!(
        "Metrics endpoint: http://{}:{}{}",
        config.server.addr, config.server.port, config.server.metrics_path
    );

    // Start the metrics server
    if let Err(e) = server::start(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
