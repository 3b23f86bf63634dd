use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

/// Remote image-search service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the image-search service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable holding the API key. When set and non-empty,
    /// the value is sent as the `key` query parameter.
    #[serde(default = "default_key_env_var")]
    pub key_env_var: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Gallery behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Records per page. Next is disabled when the current page holds fewer.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Quiet period before a typed category commits, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Category shown on first start, before any snapshot exists.
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_base_url() -> String {
    "https://pixabay.com/api".to_string()
}

fn default_key_env_var() -> String {
    "PIXGRID_API_KEY".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    9
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_category() -> String {
    "sport".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            key_env_var: default_key_env_var(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            default_category: default_category(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}
