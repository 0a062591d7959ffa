// scraper.rs
use crate::config::ScrapeConfig;
use crate::scrape::extractor::ListingExtractor;
use crate::scrape::fetcher::PageFetcher;
use crate::scrape::writer;
use crate::scrape::ScraperError;
use chrono::Local;
use std::path::Path;

/// What one run did.
pub struct RunSummary {
    pub saved: usize,
    pub skipped: usize,
    pub output_file: Option<String>,
}

pub struct OlxScraper {
    config: ScrapeConfig,
    fetcher: PageFetcher,
    extractor: ListingExtractor,
}

impl OlxScraper {
    pub fn new(config: ScrapeConfig) -> Result<Self, ScraperError> {
        let fetcher = PageFetcher::new(&config)?;
        let extractor = ListingExtractor::new(&config.base_origin()?)?;

        Ok(Self {
            config,
            fetcher,
            extractor,
        })
    }

    /// One full pass: fetch the results page, extract listings, write the
    /// JSON file. Nothing here fails the process; the worst outcome is an
    /// empty run and diagnostics on stderr.
    pub fn run(&self) -> RunSummary {
        println!("📄 Fetching {}", self.config.search_url);

        let mut listings = Vec::new();
        let mut skipped = 0;

        if let Some(html) = self.fetcher.fetch_page(&self.config.search_url) {
            let outcome = self.extractor.extract(&html);
            println!(
                "✅ Extracted {} listings ({} skipped)",
                outcome.listings.len(),
                outcome.skipped
            );
            listings = outcome.listings;
            skipped = outcome.skipped;
        }

        if listings.is_empty() && !self.config.write_empty_results {
            println!("No listings found or an error occurred.");
            return RunSummary {
                saved: 0,
                skipped,
                output_file: None,
            };
        }

        let filename = writer::output_filename(&self.config.output_prefix, Local::now());
        if writer::save_listings(&listings, Path::new(&filename)) {
            RunSummary {
                saved: listings.len(),
                skipped,
                output_file: Some(filename),
            }
        } else {
            RunSummary {
                saved: 0,
                skipped,
                output_file: None,
            }
        }
    }
}
