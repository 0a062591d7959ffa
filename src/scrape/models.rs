use serde::{Deserialize, Serialize};

/// One classifieds listing as it appears on the search-results page.
/// `link` is always absolute; relative hrefs are resolved during extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price: String,
    pub location: String,
    pub link: String,
}
