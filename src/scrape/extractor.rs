// extractor.rs
use crate::scrape::models::Listing;
use crate::scrape::selectors::SelectorChain;
use crate::scrape::ScraperError;
use scraper::{ElementRef, Html};

// Listing card containers. data-cy is the current markup; the class
// selectors match the two previous rollouts of the results page.
const CONTAINER_SELECTORS: &[&str] = &[
    r#"div[data-cy="l-card"]"#,
    "li.EIR5N",
    "div.css-1sw7q4x",
];

const TITLE_SELECTORS: &[&str] = &["h6", r#"span[data-aut-id="itemTitle"]"#];
const PRICE_SELECTORS: &[&str] = &[
    r#"p[data-testid="ad-price"]"#,
    r#"span[data-aut-id="itemPrice"]"#,
];
const LOCATION_SELECTORS: &[&str] = &[
    r#"p[data-testid="location-date"]"#,
    r#"span[data-aut-id="item-location"]"#,
];
const LINK_SELECTORS: &[&str] = &["a[href]", "a"];

/// What one pass over the markup produced: the listings that had all four
/// fields, and how many candidates were dropped for missing one.
pub struct ExtractionOutcome {
    pub listings: Vec<Listing>,
    pub skipped: usize,
}

pub struct ListingExtractor {
    containers: SelectorChain,
    title: SelectorChain,
    price: SelectorChain,
    location: SelectorChain,
    link: SelectorChain,
    base_origin: String,
}

impl ListingExtractor {
    pub fn new(base_origin: &str) -> Result<Self, ScraperError> {
        Ok(Self {
            containers: SelectorChain::parse(CONTAINER_SELECTORS)?,
            title: SelectorChain::parse(TITLE_SELECTORS)?,
            price: SelectorChain::parse(PRICE_SELECTORS)?,
            location: SelectorChain::parse(LOCATION_SELECTORS)?,
            link: SelectorChain::parse(LINK_SELECTORS)?,
            base_origin: base_origin.trim_end_matches('/').to_string(),
        })
    }

    /// Pull every listing out of a results page. One malformed card never
    /// aborts the batch; it is logged, counted and skipped.
    pub fn extract(&self, html: &str) -> ExtractionOutcome {
        let document = Html::parse_document(html);
        let cards = self.containers.select_all(&document);

        let mut listings = Vec::new();
        let mut skipped = 0;

        for card in &cards {
            match self.extract_card(card) {
                Some(listing) => listings.push(listing),
                None => skipped += 1,
            }
        }

        ExtractionOutcome { listings, skipped }
    }

    fn extract_card(&self, card: &ElementRef<'_>) -> Option<Listing> {
        let title = self.text_field(card, &self.title, "title")?;
        let price = self.text_field(card, &self.price, "price")?;
        let location = self.text_field(card, &self.location, "location")?;

        let href = match self
            .link
            .select_within(card)
            .and_then(|a| a.value().attr("href"))
        {
            Some(href) => href,
            None => {
                eprintln!("⚠️ Skipping listing: missing link");
                return None;
            }
        };

        Some(Listing {
            title,
            price,
            location,
            link: self.absolute_link(href),
        })
    }

    fn text_field(
        &self,
        card: &ElementRef<'_>,
        chain: &SelectorChain,
        name: &str,
    ) -> Option<String> {
        match chain.select_within(card) {
            Some(el) => Some(el.text().collect::<String>().trim().to_string()),
            None => {
                eprintln!("⚠️ Skipping listing: missing {name}");
                None
            }
        }
    }

    // Site-relative hrefs get the origin prepended; anything else is
    // passed through verbatim.
    fn absolute_link(&self, href: &str) -> String {
        if href.starts_with('/') {
            format!("{}{}", self.base_origin, href)
        } else {
            href.to_string()
        }
    }
}
