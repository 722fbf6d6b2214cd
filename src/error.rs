use thiserror::Error;

#[derive(Error, Debug)]
pub enum IciError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("no text to analyze: {0}")]
    EmptyInput(String),

    #[error("criterion {key} is not numeric: {value}")]
    NonNumericCriterion { key: String, value: String },

    #[error("invalid score map: {0}")]
    InvalidScoreMap(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("unsupported document format '{format}': {path}")]
    Unsupported { path: String, format: String },

    #[error("document could not be decoded ({reason}): {path}")]
    Corrupt { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, IciError>;
