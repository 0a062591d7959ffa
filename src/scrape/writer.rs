// writer.rs
use crate::scrape::models::Listing;
use crate::scrape::ScraperError;
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// `<prefix>_<YYYYMMDD>_<HHMMSS>.json`, local time.
pub fn output_filename(prefix: &str, timestamp: DateTime<Local>) -> String {
    format!("{}_{}.json", prefix, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Serialize the listings as one JSON array: 4-space indent, non-ASCII
/// left unescaped.
pub fn try_save(listings: &[Listing], path: &Path) -> Result<(), ScraperError> {
    let file = File::create(path).map_err(|e| ScraperError::Io(e.to_string()))?;
    let writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    listings
        .serialize(&mut ser)
        .map_err(|e| ScraperError::JsonWrite(e.to_string()))?;

    let mut writer = ser.into_inner();
    writer.flush().map_err(|e| ScraperError::Io(e.to_string()))?;

    Ok(())
}

/// Write the listings, logging the outcome either way. Returns whether
/// the file was written.
pub fn save_listings(listings: &[Listing], path: &Path) -> bool {
    match try_save(listings, path) {
        Ok(()) => {
            println!(
                "💾 Successfully saved {} listings to {}",
                listings.len(),
                path.display()
            );
            true
        }
        Err(e) => {
            eprintln!("❌ Error saving to file: {e}");
            false
        }
    }
}
