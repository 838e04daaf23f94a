use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlankError {
    #[error("invalid group key '{0}'")]
    InvalidGroupKey(String),

    #[error("invalid sort key '{0}'")]
    InvalidSortKey(String),

    #[error("invalid preference key '{0}' (expected 'group' or 'sort')")]
    InvalidPrefKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlankError>;
