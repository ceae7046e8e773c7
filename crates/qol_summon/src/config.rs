//! Config bindings for [`QuickSummon`].

use qol_config::{ConfigBinder, FeatureIdentity};

use crate::quick_summon::QuickSummon;

/// Key of the summoning tome slot entry.
pub const EQUIPMENT_SLOT_INDEX_KEY: &str = "EquipmentSlotIndex";

/// Declare and read `<feature>.IsEnabled`.
pub fn apply_is_enabled(binder: &mut ConfigBinder<'_>, feature: &dyn FeatureIdentity) -> bool {
    binder.bind_enabled(feature)
}

/// Declare and read `QuickSummon.EquipmentSlotIndex`, a slot in `0..=9`.
pub fn apply_equipment_slot_index(binder: &mut ConfigBinder<'_>, feature: &QuickSummon) -> i32 {
    binder.bind_ranged_int(
        feature,
        EQUIPMENT_SLOT_INDEX_KEY,
        0,
        9,
        0,
        "Set the summoning tome slot index. It's the count/number of the slot minus 1.",
    )
}
