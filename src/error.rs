use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),
}

pub type Result<T> = std::result::Result<T, ReporterError>;
