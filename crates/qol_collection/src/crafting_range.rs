//! Crafting range — lets crafting stations pull materials from farther away.

use qol_config::{ConfigBinder, FeatureIdentity, FeatureType};
use qol_feature::{Feature, GameHost};
use tracing::info;

/// Extends the distance and chest count crafting stations draw from.
#[derive(Debug)]
pub struct CraftingRange {
    enabled: bool,
    max_range: i32,
    max_chests: i32,
    /// Whether the range has been pushed to the host.
    applied: bool,
}

impl CraftingRange {
    /// Config section and feature name.
    pub const NAME: &'static str = "CraftingRange";

    /// Bind configuration and build the feature.
    pub fn new(binder: &mut ConfigBinder<'_>) -> Self {
        let mut feature = Self {
            enabled: false,
            max_range: 25,
            max_chests: 10,
            applied: false,
        };
        feature.enabled = binder.bind_enabled(&feature);
        feature.max_range = binder.bind_ranged_int(
            &feature,
            "MaxRange",
            1,
            100,
            25,
            "Maximum distance, in tiles, at which nearby chests supply crafting materials.",
        );
        feature.max_chests = binder.bind_ranged_int(
            &feature,
            "MaxChests",
            1,
            50,
            10,
            "Maximum number of nearby chests crafting may draw from.",
        );
        feature
    }

    /// Configured range in tiles.
    #[must_use]
    pub fn max_range(&self) -> i32 {
        self.max_range
    }

    /// Configured chest limit.
    #[must_use]
    pub fn max_chests(&self) -> i32 {
        self.max_chests
    }
}

impl FeatureIdentity for CraftingRange {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn display_name(&self) -> &str {
        "Crafting Range"
    }

    fn description(&self) -> &str {
        "Crafting uses materials from chests within the configured range."
    }

    fn feature_type(&self) -> FeatureType {
        FeatureType::Client
    }
}

impl Feature for CraftingRange {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn update(&mut self, host: &mut dyn GameHost) {
        if !self.enabled || self.applied {
            return;
        }
        host.set_crafting_range(self.max_range, self.max_chests);
        self.applied = true;
        info!(
            feature = Self::NAME,
            range = self.max_range,
            max_chests = self.max_chests,
            "crafting range applied"
        );
    }
}
