// config.rs
use crate::scrape::ScraperError;
use std::time::Duration;
use url::Url;

/// Run parameters for one scrape. The search term and output prefix live
/// here instead of as globals so the pipeline entry point receives them
/// explicitly.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub search_url: String,
    pub output_prefix: String,
    pub request_timeout: Duration,
    /// Politeness pause before the request, uniform random in this range.
    pub delay_millis: (u64, u64),
    /// Write a `[]` file when a run produces no listings, instead of
    /// skipping the write.
    pub write_empty_results: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            search_url: "https://www.olx.in/items/q-car-cover".to_string(),
            output_prefix: "olx_car_covers".to_string(),
            request_timeout: Duration::from_secs(10),
            delay_millis: (1000, 3000),
            write_empty_results: false,
        }
    }
}

impl ScrapeConfig {
    /// Origin of the scraped site, e.g. "https://www.olx.in".
    /// Relative listing links are resolved against this.
    pub fn base_origin(&self) -> Result<String, ScraperError> {
        let url =
            Url::parse(&self.search_url).map_err(|e| ScraperError::Config(e.to_string()))?;
        Ok(url.origin().ascii_serialization())
    }
}
