use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Where the catalog is fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Product listing endpoint, expected to return a JSON array.
    #[serde(default = "default_source_url")]
    pub url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Table presentation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rows per page at startup (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Sizes cycled through with `+` / `-`.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

/// Image reference resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Hosts whose URLs are treated as placeholders and skipped.
    #[serde(default = "default_blocklist")]
    pub blocklist: Vec<String>,
}

/// Log output. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when no env filter is set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_source_url() -> String {
    "https://api.escuelajs.co/api/v1/products".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 20, 50]
}

fn default_blocklist() -> Vec<String> {
    [
        "placeimg.com",
        "placeholder.com",
        "placehold.co",
        "via.placeholder",
        "dummyimage.com",
        "placekitten.com",
    ]
    .iter()
    .map(|host| host.to_string())
    .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            blocklist: default_blocklist(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Resolved log file path: the configured one, or
    /// `<cache_dir>/product-browser/product-browser.log`.
    pub fn file_path(&self) -> PathBuf {
        if let Some(path) = &self.file {
            return path.clone();
        }
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("product-browser").join("product-browser.log")
    }
}
