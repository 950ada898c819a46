use std::io;

use tracing_subscriber::EnvFilter;

use cloudinary_probe::config::ProbeConfig;
use cloudinary_probe::probe::run_probe;
use cloudinary_probe::report::ProbeReport;
use cloudinary_probe::services::cloudinary::CloudinaryClient;

#[tokio::main]
async fn main() {
    // The probe's own output is the UI; keep tracing quiet unless asked for.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = ProbeConfig::from_env().expect("Failed to load configuration from environment");

    let client = CloudinaryClient::new(&config);
    let mut report = ProbeReport::new(io::stdout());

    run_probe(&config, &client, &mut report).await;
}
