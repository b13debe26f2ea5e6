use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "saavn-scrape")]
#[command(about = "Scrapes JioSaavn song pages into structured records")]
#[command(version)]
pub struct Args {
    /// Song page URLs to scrape, processed in order
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Path to a JSON configuration file
    #[arg(short = 'f', long)]
    pub config: Option<String>,

    /// Maximum seconds to wait for the page action button (default 5)
    #[arg(short, long)]
    pub wait_time: Option<u64>,

    /// WebDriver endpoint to connect to
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Also download the derived audio file for each scraped record
    #[arg(short, long)]
    pub download: bool,
}
