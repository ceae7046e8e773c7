//! Quick summon — casts the summoning tome from a configured equipment slot.

use qol_config::{ConfigBinder, FeatureIdentity, FeatureType};
use qol_feature::{Feature, GameHost};
use tracing::info;

use crate::config;

/// Uses the summoning tome in a fixed equipment slot when triggered.
#[derive(Debug)]
pub struct QuickSummon {
    enabled: bool,
    equipment_slot_index: i32,
}

impl QuickSummon {
    /// Config section and feature name.
    pub const NAME: &'static str = "QuickSummon";

    /// Bind configuration and build the feature.
    pub fn new(binder: &mut ConfigBinder<'_>) -> Self {
        let mut feature = Self {
            enabled: false,
            equipment_slot_index: 0,
        };
        feature.enabled = config::apply_is_enabled(binder, &feature);
        feature.equipment_slot_index = config::apply_equipment_slot_index(binder, &feature);
        feature
    }

    /// Zero-based equipment slot holding the summoning tome.
    #[must_use]
    pub fn equipment_slot_index(&self) -> i32 {
        self.equipment_slot_index
    }
}

impl FeatureIdentity for QuickSummon {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn display_name(&self) -> &str {
        "Quick Summon"
    }

    fn description(&self) -> &str {
        "Summons minions with the tome in the configured slot without equipping it."
    }

    fn feature_type(&self) -> FeatureType {
        FeatureType::Client
    }
}

impl Feature for QuickSummon {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn update(&mut self, host: &mut dyn GameHost) {
        if !self.enabled || !host.trigger_pressed(Self::NAME) {
            return;
        }
        host.summon_from_slot(self.equipment_slot_index);
        info!(
            feature = Self::NAME,
            slot = self.equipment_slot_index,
            "summoned from slot"
        );
    }
}
