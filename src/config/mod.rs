use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// Cloud name identifying the provider account (CLOUDINARY_CLOUD_NAME).
    pub cloud_name: Option<String>,

    /// API key (CLOUDINARY_API_KEY).
    pub api_key: Option<String>,

    /// API secret (CLOUDINARY_API_SECRET). Never displayed or logged.
    pub api_secret: Option<String>,

    /// Provider endpoint override (CLOUDINARY_API_BASE_URL), so tests and
    /// staging can point the client elsewhere.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    "https://api.cloudinary.com".to_string()
}

impl ProbeConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed("CLOUDINARY_").from_env()
    }

    pub fn cloud_name_set(&self) -> bool {
        is_set(&self.cloud_name)
    }

    pub fn api_key_set(&self) -> bool {
        is_set(&self.api_key)
    }

    pub fn api_secret_set(&self) -> bool {
        is_set(&self.api_secret)
    }
}

/// An empty value counts as unset: `CLOUDINARY_API_KEY=` in a .env file still
/// reaches us as `Some("")`.
fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_counts_as_unset() {
        assert!(!is_set(&None));
        assert!(!is_set(&Some(String::new())));
        assert!(is_set(&Some("demo".to_string())));
    }

    #[test]
    fn presence_helpers() {
        let config = ProbeConfig {
            cloud_name: Some("demo".to_string()),
            api_key: Some(String::new()),
            api_secret: None,
            api_base_url: default_api_base_url(),
        };
        assert!(config.cloud_name_set());
        assert!(!config.api_key_set());
        assert!(!config.api_secret_set());
    }
}
