use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubgrabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fingerprint error: {0}")]
    Fingerprint(#[source] std::io::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SubgrabError>;
