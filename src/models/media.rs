use serde::Deserialize;

/// Health-check response from the provider.
///
/// The status comes from the response body; the rate-limit counters are
/// reported via response headers and composed in by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct PingResult {
    pub status: String,
    #[serde(default)]
    pub rate_limit_remaining: u64,
    #[serde(default)]
    pub rate_limit_allowed: u64,
}

/// Metadata the provider assigns to an uploaded asset.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResult {
    pub secure_url: String,
    /// Provider-assigned identifier; must be passed back verbatim to delete
    /// the asset.
    pub public_id: String,
    pub format: String,
    pub bytes: u64,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResult {
    /// `"ok"` on success; anything else (e.g. `"not found"`) is a soft
    /// failure, not an error.
    pub result: String,
}

impl DeleteResult {
    /// The provider's success sentinel.
    pub const OK: &'static str = "ok";

    pub fn is_ok(&self) -> bool {
        self.result == Self::OK
    }
}
