//! Live probe against the real provider.
//!
//! Requires CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY and
//! CLOUDINARY_API_SECRET in the environment (or a .env file).
//!
//! Run with: cargo test --test live_test -- --ignored --nocapture

use cloudinary_probe::config::ProbeConfig;
use cloudinary_probe::probe::run_probe;
use cloudinary_probe::report::ProbeReport;
use cloudinary_probe::services::cloudinary::CloudinaryClient;

#[tokio::test]
#[ignore] // Requires real provider credentials
async fn live_probe_round_trip() {
    let config = ProbeConfig::from_env().expect("Failed to load config");
    let client = CloudinaryClient::new(&config);

    let mut report = ProbeReport::new(Vec::new());
    run_probe(&config, &client, &mut report).await;

    let output = String::from_utf8(report.into_inner()).expect("probe output is UTF-8");
    print!("{output}");
    assert!(output.contains("✨ All checks completed"));
}
