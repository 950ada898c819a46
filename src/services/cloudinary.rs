use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::config::ProbeConfig;
use crate::models::media::{DeleteResult, PingResult, UploadResult};
use crate::services::media::{MediaStorage, MediaStoreError, UploadOptions};

/// Response header carrying the remaining rate-limit budget.
const RATE_LIMIT_REMAINING_HEADER: &str = "x-featureratelimit-remaining";

/// Response header carrying the allowed rate-limit budget.
const RATE_LIMIT_ALLOWED_HEADER: &str = "x-featureratelimit-limit";

/// Thin client for the provider's ping/upload/destroy endpoints.
///
/// Authenticates every request with HTTP basic auth; the provider's
/// parameter-signature scheme is out of scope for a connectivity probe.
pub struct CloudinaryClient {
    http: Client,
    base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryClient {
    /// Build a client from the probe configuration. Missing credentials
    /// become empty strings so the health check fails at the provider
    /// instead of here.
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cloud_name: config.cloud_name.clone().unwrap_or_default(),
            api_key: config.api_key.clone().unwrap_or_default(),
            api_secret: config.api_secret.clone().unwrap_or_default(),
        }
    }

    fn endpoint(&self, op: &str) -> String {
        format!("{}/v1_1/{}/{}", self.base_url, self.cloud_name, op)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.api_key, Some(&self.api_secret))
    }
}

/// Pull a human-readable message out of a failed response. The provider
/// reports `{"error": {"message": ...}}`; fall back to the HTTP status.
async fn error_message(response: Response) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("HTTP {status}"),
    }
}

fn header_count(response: &Response, name: &str) -> u64 {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

fn is_auth_status(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

#[async_trait]
impl MediaStorage for CloudinaryClient {
    async fn ping(&self) -> Result<PingResult, MediaStoreError> {
        let url = self.endpoint("ping");
        debug!(%url, "pinging provider");

        let response = self
            .authed(self.http.get(&url))
            .send()
            .await
            .map_err(|e| MediaStoreError::Connectivity(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(if is_auth_status(status) {
                MediaStoreError::Auth(message)
            } else {
                MediaStoreError::Connectivity(message)
            });
        }

        // Headers must be read before the body consumes the response.
        let rate_limit_remaining = header_count(&response, RATE_LIMIT_REMAINING_HEADER);
        let rate_limit_allowed = header_count(&response, RATE_LIMIT_ALLOWED_HEADER);

        #[derive(Deserialize)]
        struct PingBody {
            status: String,
        }

        let body: PingBody = response
            .json()
            .await
            .map_err(|e| MediaStoreError::Connectivity(e.to_string()))?;

        Ok(PingResult {
            status: body.status,
            rate_limit_remaining,
            rate_limit_allowed,
        })
    }

    async fn upload(
        &self,
        source_url: &str,
        options: &UploadOptions,
    ) -> Result<UploadResult, MediaStoreError> {
        let url = self.endpoint("image/upload");
        debug!(%url, public_id = %options.public_id, "uploading sample asset");

        let params = [
            ("file", source_url),
            ("folder", options.folder.as_str()),
            ("public_id", options.public_id.as_str()),
        ];

        let response = self
            .authed(self.http.post(&url))
            .form(&params)
            .send()
            .await
            .map_err(|e| MediaStoreError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MediaStoreError::Upload(error_message(response).await));
        }

        response
            .json()
            .await
            .map_err(|e| MediaStoreError::Upload(e.to_string()))
    }

    async fn delete(&self, public_id: &str) -> Result<DeleteResult, MediaStoreError> {
        let url = self.endpoint("image/destroy");
        debug!(%url, %public_id, "deleting asset");

        let response = self
            .authed(self.http.post(&url))
            .form(&[("public_id", public_id)])
            .send()
            .await
            .map_err(|e| MediaStoreError::Connectivity(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(if is_auth_status(status) {
                MediaStoreError::Auth(message)
            } else {
                MediaStoreError::Connectivity(message)
            });
        }

        response
            .json()
            .await
            .map_err(|e| MediaStoreError::Connectivity(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProbeConfig {
        ProbeConfig {
            cloud_name: Some("demo".to_string()),
            api_key: Some("key".to_string()),
            api_secret: Some("secret".to_string()),
            api_base_url: "https://api.cloudinary.com/".to_string(),
        }
    }

    #[test]
    fn endpoint_includes_cloud_name_and_trims_trailing_slash() {
        let client = CloudinaryClient::new(&config());
        assert_eq!(
            client.endpoint("ping"),
            "https://api.cloudinary.com/v1_1/demo/ping"
        );
        assert_eq!(
            client.endpoint("image/upload"),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }

    #[test]
    fn missing_credentials_become_empty_strings() {
        let client = CloudinaryClient::new(&ProbeConfig {
            cloud_name: None,
            api_key: None,
            api_secret: None,
            api_base_url: "https://api.cloudinary.com".to_string(),
        });
        assert_eq!(client.endpoint("ping"), "https://api.cloudinary.com/v1_1//ping");
    }
}
