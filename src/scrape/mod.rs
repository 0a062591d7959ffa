mod extractor;
mod fetcher;
mod models;
mod scraper;
mod scraper_error;
mod selectors;
mod writer;

pub use extractor::{ExtractionOutcome, ListingExtractor};
pub use fetcher::PageFetcher;
pub use models::Listing;
pub use scraper::{OlxScraper, RunSummary};
pub use scraper_error::ScraperError;
pub use selectors::SelectorChain;
pub use writer::{output_filename, save_listings, try_save};
