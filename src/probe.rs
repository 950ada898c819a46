//! The four-stage connectivity check sequence.

use std::io::Write;

use chrono::Utc;

use crate::config::ProbeConfig;
use crate::report::{kilobytes, ProbeReport};
use crate::services::media::{MediaStorage, UploadOptions};

/// Publicly reachable sample image used by the upload check.
pub const SAMPLE_IMAGE_URL: &str = "https://via.placeholder.com/300x200.png?text=Test+Image";

/// Folder/namespace the sample asset is uploaded under.
pub const TEST_FOLDER: &str = "probe/test";

/// Run the full check sequence: configuration, connection, upload, delete.
///
/// Strictly sequential. A connection failure skips upload and delete; an
/// upload failure skips delete. Collaborator failures are reported at the
/// point of occurrence and never propagated. The completion marker prints
/// regardless of outcome.
pub async fn run_probe<S, W>(config: &ProbeConfig, store: &S, report: &mut ProbeReport<W>)
where
    S: MediaStorage + ?Sized,
    W: Write,
{
    report.banner("Testing media storage integration...");

    check_configuration(config, report);
    run_checks(store, report).await;

    report.blank();
    report.done("All checks completed");
}

/// Stage 1: credential presence. No error path; secrets display as a boolean
/// marker only.
fn check_configuration<W: Write>(config: &ProbeConfig, report: &mut ProbeReport<W>) {
    report.section("📋 Testing configuration:");
    report.presence("Cloud name", config.cloud_name_set());
    report.presence("API key", config.api_key_set());
    report.presence("API secret", config.api_secret_set());
}

/// Stages 2-4. Early returns implement the skip rules; the caller prints the
/// completion marker afterwards.
async fn run_checks<S, W>(store: &S, report: &mut ProbeReport<W>)
where
    S: MediaStorage + ?Sized,
    W: Write,
{
    report.blank();
    report.section("🔌 Testing connection:");
    let ping = match store.ping().await {
        Ok(ping) => ping,
        Err(e) => {
            report.fail(&format!("Connection failed: {e}"));
            return;
        }
    };
    report.pass("Connection successful");
    report.detail("Status", &ping.status);
    report.detail(
        "Rate limit",
        &format!("{}/{}", ping.rate_limit_remaining, ping.rate_limit_allowed),
    );

    report.blank();
    report.section("⬆️  Testing upload (sample image):");
    let options = UploadOptions {
        folder: TEST_FOLDER.to_string(),
        public_id: test_public_id(),
    };
    let upload = match store.upload(SAMPLE_IMAGE_URL, &options).await {
        Ok(upload) => upload,
        Err(e) => {
            report.fail(&format!("Upload failed: {e}"));
            return;
        }
    };
    report.pass("Upload successful");
    report.detail("URL", &upload.secure_url);
    report.detail("Public ID", &upload.public_id);
    report.detail("Format", &upload.format);
    report.detail("Size", &format!("{} KB", kilobytes(upload.bytes)));

    report.blank();
    report.section("🗑️  Testing delete:");
    match store.delete(&upload.public_id).await {
        Ok(outcome) if outcome.is_ok() => report.pass("Delete successful"),
        // The provider may legitimately answer "not found"; a soft failure,
        // not a probe bug.
        Ok(outcome) => report.warn(&format!("Delete returned: {}", outcome.result)),
        Err(e) => report.fail(&format!("Delete failed: {e}")),
    }
}

/// Time-based id so repeated runs do not collide on the provider side.
fn test_public_id() -> String {
    format!("test_image_{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_id_is_time_based() {
        let id = test_public_id();
        let digits = id.strip_prefix("test_image_").expect("test_image_ prefix");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
