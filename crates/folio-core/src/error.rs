use thiserror::Error;

/// Errors from loading config and content or resolving sections
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Content parsing error: {0}")]
    ContentParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Section not found: {0}")]
    SectionNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
