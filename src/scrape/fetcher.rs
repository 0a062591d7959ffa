// fetcher.rs
use crate::config::ScrapeConfig;
use crate::scrape::ScraperError;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetches a results page with a browser-like header set and a short
/// random pause beforehand. All transport failures stop here.
pub struct PageFetcher {
    client: Client,
    delay_millis: (u64, u64),
}

impl PageFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self {
            client,
            delay_millis: config.delay_millis,
        })
    }

    /// One GET, markup or nothing. Network errors, timeouts and non-2xx
    /// statuses are all logged here and collapse to `None`.
    pub fn fetch_page(&self, url: &str) -> Option<String> {
        self.politeness_pause();

        match self.try_fetch(url) {
            Ok(html) => Some(html),
            Err(e) => {
                eprintln!("❌ Error fetching data: {e}");
                None
            }
        }
    }

    pub fn try_fetch(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        if !status.is_success() {
            let snippet: String = text.chars().take(200).collect();
            return Err(ScraperError::Network(format!("HTTP {status}: {snippet}")));
        }

        #[cfg(all(debug_assertions, not(test)))]
        {
            if let Err(e) = std::fs::write("olx_debug.html", &text) {
                eprintln!("⚠️ Could not write olx_debug.html: {e}");
            }
        }

        Ok(text)
    }

    // Not rate limiting, just avoids hammering the server with
    // back-to-back runs.
    fn politeness_pause(&self) {
        let (lo, hi) = self.delay_millis;
        if hi == 0 {
            return;
        }
        let wait = rand::thread_rng().gen_range(lo..=hi);
        std::thread::sleep(Duration::from_millis(wait));
    }
}
