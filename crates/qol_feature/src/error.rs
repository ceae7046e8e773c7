//! Registry error types.

/// Errors raised while assembling a [`FeatureRegistry`](crate::FeatureRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two features share a name, and therefore a config section.
    #[error("feature `{0}` is registered more than once")]
    DuplicateFeature(String),
}
