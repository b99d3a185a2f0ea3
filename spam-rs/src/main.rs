//! spam-rs: spam classification server

use spam_rs::api::ApiServer;
use spam_rs::config::{Config, LoggingConfig};
use spam_rs::SpamManager;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("spam_rs={level},tower_http={level}", level = logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        "compact" => registry.with(tracing_subscriber::fmt::layer().compact()).init(),
        _ => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SPAM_RS_CONFIG").ok());
    let config = match &config_path {
        Some(path) => Config::from_file(Path::new(path))?,
        None => Config::default(),
    };

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => info!("Configuration loaded from {}", path),
        None => info!("No config file specified, using defaults"),
    }
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Model directory: {}", config.storage.model_dir);

    let manager = Arc::new(SpamManager::from_config(&config)?);
    let [normal, spam] = manager.corpus().label_counts();
    info!("  Corpus: {} samples ({} normal, {} spam)", manager.corpus().len(), normal, spam);

    manager.warm_up().await;

    let server = ApiServer::new(manager, config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}
