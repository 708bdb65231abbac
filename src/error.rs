//! Error types for deplock
//!
//! Uses `thiserror` for library errors. Every failure the core can hit is
//! fatal for the invocation; drift is never an error (see `DiffReport`).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deplock operations
pub type DeplockResult<T> = Result<T, DeplockError>;

/// Main error type for deplock operations
#[derive(Error, Debug)]
pub enum DeplockError {
    /// Two entities in one set share a coordinate
    #[error("duplicate entry for '{coordinate}'")]
    DuplicateCoordinate { coordinate: String },

    /// A lock record references an artifact key that is not declared
    #[error("artifact not found: {key}")]
    UnknownArtifact { key: String },

    /// Lock file content is structurally invalid
    #[error("malformed lock file {file}: {message}")]
    MalformedLock { file: PathBuf, message: String },

    /// Lock file was written by an incompatible format version
    #[error("lock file format version '{found}' is not supported (expected '{expected}')")]
    LockVersionMismatch { found: String, expected: String },

    /// No lock file where one is required
    #[error("lock file not found: {path} - run 'deplock lock' first")]
    LockNotFound { path: PathBuf },

    /// Profile declared without any activation criteria
    #[error("missing activation criteria for profile {profile}")]
    MissingActivation { profile: String },

    /// Two profiles share an id
    #[error("profile '{profile}' is declared more than once")]
    DuplicateProfile { profile: String },

    /// Profile activation cannot be emulated on this host
    #[error("unsupported activation for profile {profile}: {message}")]
    UnsupportedActivation { profile: String, message: String },

    /// Coordinate pattern in a filter rule could not be parsed
    #[error("invalid coordinate pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Coordinate string could not be parsed
    #[error("invalid coordinate '{value}': {message}")]
    InvalidCoordinate { value: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Project descriptor could not be parsed
    #[error("invalid descriptor {file}: {message}")]
    InvalidDescriptor { file: PathBuf, message: String },

    /// Resolver could not produce a graph for an environment
    #[error("failed resolving dependencies for {environment}: {message}")]
    Resolution { environment: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DeplockError {
    /// Whether this error stems from declared configuration rather than I/O or resolution
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DeplockError::MissingActivation { .. }
                | DeplockError::DuplicateProfile { .. }
                | DeplockError::UnsupportedActivation { .. }
                | DeplockError::InvalidPattern { .. }
                | DeplockError::InvalidConfig { .. }
        )
    }
}
