pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sink rejected capture with http status {0}")]
    Rejected(reqwest::StatusCode),

    #[error("format capture timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}
