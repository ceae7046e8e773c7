//! Quick stash — pushes inventory items into nearby chests on demand.

use qol_config::{ConfigBinder, FeatureIdentity, FeatureType};
use qol_feature::{Feature, GameHost};
use tracing::info;

/// Stashes inventory items into nearby chests whenever its trigger fires.
#[derive(Debug)]
pub struct QuickStash {
    enabled: bool,
    max_range: i32,
    max_chests: i32,
}

impl QuickStash {
    /// Config section and feature name.
    pub const NAME: &'static str = "QuickStash";

    /// Bind configuration and build the feature.
    pub fn new(binder: &mut ConfigBinder<'_>) -> Self {
        let mut feature = Self {
            enabled: false,
            max_range: 25,
            max_chests: 10,
        };
        feature.enabled = binder.bind_enabled(&feature);
        feature.max_range = binder.bind_ranged_int(
            &feature,
            "MaxRange",
            1,
            100,
            25,
            "Maximum distance, in tiles, of chests that receive stashed items.",
        );
        feature.max_chests = binder.bind_ranged_int(
            &feature,
            "MaxChests",
            1,
            50,
            10,
            "Maximum number of chests a single stash fills.",
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

impl FeatureIdentity for QuickStash {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn display_name(&self) -> &str {
        "Quick Stash"
    }

    fn description(&self) -> &str {
        "Moves items that already exist in nearby chests into those chests."
    }

    fn feature_type(&self) -> FeatureType {
        FeatureType::Client
    }
}

impl Feature for QuickStash {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn update(&mut self, host: &mut dyn GameHost) {
        if !self.enabled || !host.trigger_pressed(Self::NAME) {
            return;
        }
        let stacks = host.stash_to_nearby_chests(self.max_range, self.max_chests);
        info!(feature = Self::NAME, stacks, "stashed items");
    }
}
