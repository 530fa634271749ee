//! fairverify HTTP verification service

use clap::Parser;
use fairverify::{
    api::ApiServer,
    config::{ConfigBuilder, ConfigLoader},
    errors::VerifierResult,
    logging::init_logging,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fairverify-api")]
#[command(about = "Provably fair verification API", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API server host (overrides configuration)
    #[arg(long)]
    host: Option<String>,

    /// API server port (overrides configuration)
    #[arg(long)]
    port: Option<u16>,

    /// Allowed CORS origins (comma-separated, use * for all)
    #[arg(long)]
    cors_origins: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> VerifierResult<()> {
    let args = Args::parse();

    let loader = match &args.config {
        Some(path) => ConfigLoader::new().with_path(path),
        None => ConfigLoader::new(),
    };
    let loaded = loader.load()?;

    // command line flags win over file and environment
    let mut api = loaded.api;
    if let Some(host) = args.host {
        api.host = host;
    }
    if let Some(port) = args.port {
        api.port = port;
    }
    if let Some(origins) = args.cors_origins {
        api.cors_origins = origins.split(',').map(|s| s.trim().to_string()).collect();
    }
    if let Some(timeout) = args.timeout {
        api.request_timeout_secs = timeout;
    }

    let config = ConfigBuilder::new().api(api).logging(loaded.logging).build();
    loader.validate(&config)?;

    init_logging(&config.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting fairverify-api");

    ApiServer::new(config.api).run().await
}
