//! Config-layer error types.

/// Errors raised while loading or exporting a settings snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The snapshot is not valid JSON, or a value is neither a bool nor an int.
    #[error("failed to parse settings snapshot: {0}")]
    Parse(#[source] serde_json::Error),

    /// The current values could not be rendered.
    #[error("failed to serialise settings snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A top-level snapshot entry is not an object of key/value pairs.
    #[error("settings section `{0}` is not an object")]
    InvalidSection(String),
}
