//! No death penalty — keeps the inventory when the player dies.

use qol_config::{ConfigBinder, FeatureIdentity, FeatureType};
use qol_feature::{Feature, GameHost};
use tracing::info;

/// Turns off the host's death penalty.
#[derive(Debug)]
pub struct NoDeathPenalty {
    enabled: bool,
    applied: bool,
}

impl NoDeathPenalty {
    /// Config section and feature name.
    pub const NAME: &'static str = "NoDeathPenalty";

    /// Bind configuration and build the feature.
    pub fn new(binder: &mut ConfigBinder<'_>) -> Self {
        let mut feature = Self {
            enabled: false,
            applied: false,
        };
        feature.enabled = binder.bind_enabled(&feature);
        feature
    }
}

impl FeatureIdentity for NoDeathPenalty {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn display_name(&self) -> &str {
        "No Death Penalty"
    }

    fn description(&self) -> &str {
        "Players keep their items when they die."
    }

    fn feature_type(&self) -> FeatureType {
        FeatureType::Server
    }
}

impl Feature for NoDeathPenalty {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn update(&mut self, host: &mut dyn GameHost) {
        if !self.enabled || self.applied {
            return;
        }
        host.set_death_penalty(false);
        self.applied = true;
        info!(feature = Self::NAME, "death penalty disabled");
    }
}
