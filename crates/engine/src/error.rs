use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{label}': {source}")]
    Read {
        label: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
