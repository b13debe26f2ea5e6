use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the song page scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum seconds to wait for the page's action button to appear
    #[serde(default = "default_wait_time")]
    pub wait_time_secs: u64,

    /// Seconds to let scripted updates render after the reveal click
    #[serde(default = "default_settle")]
    pub settle_secs: u64,

    /// Directory downloaded audio files are written to
    #[serde(default = "default_download_dir")]
    pub download_dir: String,

    /// Timeout for a single file download, in seconds
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            wait_time_secs: default_wait_time(),
            settle_secs: default_settle(),
            download_dir: default_download_dir(),
            download_timeout_secs: default_download_timeout(),
        }
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default wait budget for the page action button
fn default_wait_time() -> u64 {
    5
}

/// Default settle delay after the reveal click
fn default_settle() -> u64 {
    5
}

/// Default download directory
fn default_download_dir() -> String {
    "downloads".to_string()
}

/// Default per-download timeout
fn default_download_timeout() -> u64 {
    10
}
