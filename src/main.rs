use crate::config::ScrapeConfig;
use crate::scrape::OlxScraper;

mod config;
mod scrape;

#[cfg(test)]
mod tests;

fn main() {
    println!("Starting OLX scraper...");

    let config = ScrapeConfig::default();

    let scraper = match OlxScraper::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Scraper init failed: {e}");
            return;
        }
    };

    let summary = scraper.run();
    if let Some(file) = &summary.output_file {
        println!("Done: {} listings in {file}", summary.saved);
    }
}
