use thiserror::Error;

/// Unified error type for modver operations
#[derive(Error, Debug)]
pub enum ModverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Module graph error: {0}")]
    Graph(String),

    #[error("Commit fetch failed: {0}")]
    Fetch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in modver
pub type Result<T> = std::result::Result<T, ModverError>;

impl ModverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ModverError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ModverError::Version(msg.into())
    }

    /// Create a module graph error with context
    pub fn graph(msg: impl Into<String>) -> Self {
        ModverError::Graph(msg.into())
    }

    /// Create a commit fetch error with context
    pub fn fetch(msg: impl Into<String>) -> Self {
        ModverError::Fetch(msg.into())
    }
}
