use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewstateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config encoding error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    #[error("Invalid viewport snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Unknown viewport: {0}")]
    UnknownViewport(String),

    #[error("Unsupported snapshot format: {0}")]
    UnsupportedSnapshot(String),
}

pub type Result<T> = std::result::Result<T, ViewstateError>;
