use clap::Parser;
use saavn_scrape::SongPages;
use saavn_scrape::config::ScraperConfig;
use saavn_scrape::download;
use saavn_scrape::records::PageRecord;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    println!("Note: scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let mut config = match &args.config {
        Some(path) => match ScraperConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("failed to load config {}: {}", path, e);
                return;
            }
        },
        None => ScraperConfig::default(),
    };

    // Apply command-line overrides
    if let Some(wait_time) = args.wait_time {
        config.wait_time_secs = wait_time;
    }
    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    }

    ::log::info!("scraping {} page(s)", args.urls.len());
    let start_time = std::time::Instant::now();

    let records = SongPages::new(args.urls.clone())
        .with_config(config.clone())
        .collect()
        .await;

    let duration = start_time.elapsed();
    ::log::info!(
        "scraped {} of {} page(s) in {:.2} seconds",
        records.len(),
        args.urls.len(),
        duration.as_secs_f64()
    );

    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{}", json),
        Err(e) => ::log::error!("failed to serialize records: {}", e),
    }

    if args.download {
        download_audio(&records, &config).await;
    }
}

/// Downloads the derived audio file for each record that has one,
/// continuing past individual failures.
async fn download_audio(records: &[PageRecord], config: &ScraperConfig) {
    let dir = std::path::Path::new(&config.download_dir);

    for record in records {
        let url = &record.song_info.downloadable_url;
        if url.is_empty() {
            ::log::debug!("no downloadable audio for '{}'", record.album_title);
            continue;
        }

        match download::download_file(url, dir, config.download_timeout_secs).await {
            Ok(path) => {
                println!("Downloaded '{}' to {}", record.album_title, path.display());
            }
            Err(e) => {
                ::log::warn!("download failed for {}: {}", url, e);
            }
        }
    }
}
