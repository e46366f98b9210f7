use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no page URL configured; set [watch].page_url or pass --page-url")]
    MissingPageUrl,

    #[error("no snapshot source configured; set [watch].snapshot or pass --snapshot")]
    MissingSnapshot,

    #[error("read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("read snapshot {}: {source}", path.display())]
    ReadSnapshot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("fetch snapshot: {0}")]
    FetchSnapshot(#[from] reqwest::Error),
}
