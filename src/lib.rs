// Re-export modules
pub mod config;
pub mod download;
pub mod error;
pub mod media;
pub mod parsers;
pub mod records;
pub mod scrapers;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::ScrapeError;
pub use records::{PageRecord, SongInfo};

use config::ScraperConfig;

/// Builder for scraping a batch of song pages into PageRecords
pub struct SongPages {
    urls: Vec<String>,
    config: ScraperConfig,
}

impl SongPages {
    /// Create a new builder over the given page URLs
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            config: ScraperConfig::default(),
        }
    }

    /// Set the wait budget for the page action button
    pub fn with_wait_time(mut self, secs: u64) -> Self {
        self.config.wait_time_secs = secs;
        self
    }

    /// Set the settle delay applied after the reveal click
    pub fn with_settle(mut self, secs: u64) -> Self {
        self.config.settle_secs = secs;
        self
    }

    /// Set the WebDriver endpoint to connect to
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Use the given configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = ScraperConfig::from_file(path)?;
        Ok(self)
    }

    /// Run the batch and collect the records in input order.
    ///
    /// URLs are processed strictly sequentially, one browser session
    /// per URL. URLs whose extraction fails are logged and omitted.
    pub async fn collect(mut self) -> Vec<PageRecord> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        scrapers::song::scrape_song_pages(&self.config, &self.urls).await
    }
}
