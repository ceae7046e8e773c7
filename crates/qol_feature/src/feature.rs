//! The [`Feature`] trait.

use qol_config::FeatureIdentity;

use crate::host::GameHost;

/// A toggleable gameplay modification driven once per host tick.
///
/// Features bind their configuration when constructed and keep it for the
/// rest of the process. A disabled feature still receives [`Feature::update`]
/// and is expected to return without touching the host.
pub trait Feature: FeatureIdentity {
    /// Whether the feature was enabled in the settings store at construction.
    fn is_enabled(&self) -> bool;

    /// Run one tick of the feature against the host.
    fn update(&mut self, host: &mut dyn GameHost);
}
