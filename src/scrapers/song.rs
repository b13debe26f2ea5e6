use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::parsers;
use crate::records::PageRecord;
use crate::scrapers::session;
use fantoccini::{Client, Locator};
use std::time::Duration;
use url::Url;

/// Primary action button whose click reveals the page's audio surface.
const ACTION_BUTTON_SELECTOR: &str = r#"a.c-btn.c-btn--primary[data-btn-icon="q"]"#;

/// Scrapes one song page into a PageRecord.
///
/// A fresh WebDriver session is acquired for the call and released on
/// every exit path, success or failure.
pub async fn scrape_song_page(
    config: &ScraperConfig,
    url: &str,
) -> Result<PageRecord, ScrapeError> {
    if Url::parse(url).is_err() {
        return Err(ScrapeError::Precondition(format!(
            "not a valid page URL: {}",
            url
        )));
    }

    let client = session::connect(&config.webdriver_url).await?;
    let result = extract(&client, config, url).await;

    if let Err(e) = client.close().await {
        ::log::warn!("failed to close WebDriver session for {}: {}", url, e);
    }

    result
}

/// Extraction body, separated from [`scrape_song_page`] so the session
/// is released no matter how this returns.
async fn extract(
    client: &Client,
    config: &ScraperConfig,
    url: &str,
) -> Result<PageRecord, ScrapeError> {
    ::log::debug!("SCRAPE: {}", url);
    client.goto(url).await?;

    // A wait timeout here converts to ScrapeError::Timeout: the page
    // never rendered its action button within the budget.
    let button = client
        .wait()
        .at_most(Duration::from_secs(config.wait_time_secs))
        .for_element(Locator::Css(ACTION_BUTTON_SELECTOR))
        .await?;

    let displayed = button.is_displayed().await?;
    let enabled = button.is_enabled().await?;
    ::log::debug!("action button displayed: {}, enabled: {}", displayed, enabled);

    if displayed && enabled {
        reveal_audio_surface(client).await?;
    } else {
        ::log::info!("action button not interactable on {}, parsing as-is", url);
    }

    // Let scripted updates triggered by the click render before
    // reading the page source.
    tokio::time::sleep(Duration::from_secs(config.settle_secs)).await;

    let html = client.source().await?;
    parsers::song::parse(&html).ok_or(ScrapeError::Parse)
}

/// Scrolls the action button into view and clicks it from script,
/// bypassing the occlusion checks a native click would enforce.
async fn reveal_audio_surface(client: &Client) -> Result<(), ScrapeError> {
    let script = format!(
        "var button = document.querySelector('{}'); \
         if (button) {{ button.scrollIntoView(true); button.click(); }}",
        ACTION_BUTTON_SELECTOR
    );
    client.execute(&script, vec![]).await?;
    Ok(())
}

/// Scrapes a batch of song page URLs strictly in order.
///
/// Each URL owns its own browser session for the duration of its
/// extraction; nothing is shared between URLs. Failed URLs are logged
/// with their failure kind and omitted, so the output preserves the
/// input order of the URLs that succeeded.
pub async fn scrape_song_pages(config: &ScraperConfig, urls: &[String]) -> Vec<PageRecord> {
    let mut records = Vec::with_capacity(urls.len());

    for url in urls {
        match scrape_song_page(config, url).await {
            Ok(record) => {
                ::log::info!("scraped {}", url);
                records.push(record);
            }
            Err(e) => {
                ::log::warn!("skipping {}: {}", url, e);
            }
        }
    }

    records
}
