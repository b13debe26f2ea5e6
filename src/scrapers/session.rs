use crate::error::ScrapeError;
use fantoccini::error::NewSessionError;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;

/// WebDriver endpoints probed when the configured one is unreachable.
const FALLBACK_WEBDRIVER_URLS: [&str; 3] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // Selenium / geckodriver default
    "http://127.0.0.1:4444", // IP form for hosts without localhost
];

/// Establishes a fresh WebDriver session for one extraction.
///
/// Tries the configured endpoint first, then the well-known local
/// driver endpoints. The returned session is exclusively owned by the
/// caller, which must close it on every exit path.
pub async fn connect(webdriver_url: &str) -> Result<Client, ScrapeError> {
    let mut last_err = match try_connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::warn!("failed to connect to WebDriver at {}: {}", webdriver_url, e);
            e
        }
    };

    for url in FALLBACK_WEBDRIVER_URLS {
        if url == webdriver_url {
            continue;
        }

        ::log::info!("trying fallback WebDriver URL: {}", url);
        match try_connect(url).await {
            Ok(client) => {
                ::log::debug!("connected to fallback WebDriver at {}", url);
                return Ok(client);
            }
            Err(e) => {
                // Keep the most recent failure for the error report
                last_err = e;
            }
        }
    }

    ::log::error!("failed to connect to any WebDriver server");
    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(ScrapeError::Session(last_err))
}

async fn try_connect(url: &str) -> Result<Client, NewSessionError> {
    ClientBuilder::native()
        .capabilities(headless_capabilities())
        .connect(url)
        .await
}

/// Browser capabilities for a headless, sandbox-free, fixed-viewport
/// session.
fn headless_capabilities() -> serde_json::map::Map<String, serde_json::Value> {
    let mut caps = serde_json::map::Map::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({
            "args": [
                "--headless=new",
                "--disable-gpu",
                "--no-sandbox",
                "--disable-dev-shm-usage",
                "--window-size=1920,1080",
            ]
        }),
    );
    caps
}
