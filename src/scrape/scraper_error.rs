use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    InvalidSelector(String),
    JsonWrite(String),
    Io(String),
    Config(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::InvalidSelector(msg) => write!(f, "Invalid selector: {msg}"),
            ScraperError::JsonWrite(msg) => write!(f, "JSON write error: {msg}"),
            ScraperError::Io(msg) => write!(f, "I/O error: {msg}"),
            ScraperError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl Error for ScraperError {}
