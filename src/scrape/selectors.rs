// selectors.rs
use crate::scrape::ScraperError;
use scraper::{ElementRef, Html, Selector};

/// An ordered list of selectors tried in sequence; the first one that
/// matches anything wins. Listing markup on the site changes between
/// rollouts, so every lookup carries the current selector plus the ones
/// it replaced.
pub struct SelectorChain {
    selectors: Vec<Selector>,
}

impl SelectorChain {
    /// Compile every selector up front so a typo fails at construction,
    /// not in the middle of a scrape.
    pub fn parse(sources: &[&str]) -> Result<Self, ScraperError> {
        let selectors = sources
            .iter()
            .map(|source| {
                Selector::parse(source)
                    .map_err(|e| ScraperError::InvalidSelector(format!("{source}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { selectors })
    }

    /// All elements matched by the first selector in the chain that
    /// matches at all, in document order. Empty if none match.
    pub fn select_all<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        for selector in &self.selectors {
            let matches: Vec<_> = document.select(selector).collect();
            if !matches.is_empty() {
                return matches;
            }
        }
        Vec::new()
    }

    /// First element matched inside `element` by the first selector in
    /// the chain that matches at all.
    pub fn select_within<'a>(&self, element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| element.select(selector).next())
    }
}
