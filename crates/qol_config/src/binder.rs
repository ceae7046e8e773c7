//! Feature-facing config binding.
//!
//! [`ConfigBinder`] turns a feature's tunable parameters into store entries
//! keyed by the feature's name, and hands back the value in effect. It only
//! declares and reads; nothing flows from a feature back into the store.

use tracing::warn;

use crate::definition::{AcceptableValues, ConfigDefinition, ConfigDescription, FeatureIdentity};
use crate::store::SettingsStore;
use crate::value::ConfigValue;

/// The key every feature's on/off toggle lives under.
pub const IS_ENABLED_KEY: &str = "IsEnabled";

/// Declares feature parameters against a [`SettingsStore`].
pub struct ConfigBinder<'a> {
    store: &'a mut dyn SettingsStore,
}

impl<'a> ConfigBinder<'a> {
    /// Create a binder over `store`.
    pub fn new(store: &'a mut dyn SettingsStore) -> Self {
        Self { store }
    }

    /// Declare `<feature>.IsEnabled` (default `false`) and return its value.
    pub fn bind_enabled(&mut self, feature: &dyn FeatureIdentity) -> bool {
        let description = ConfigDescription::new(format!(
            "Enable the '{}' ({}) feature? {}",
            feature.display_name(),
            feature.feature_type(),
            feature.description()
        ))
        .with_acceptable(AcceptableValues::toggle());
        let definition = ConfigDefinition::new(feature.name(), IS_ENABLED_KEY);

        let value = self
            .store
            .bind(definition.clone(), ConfigValue::Bool(false), description);
        value.as_bool().unwrap_or_else(|| {
            warn!(entry = %definition, found = %value.kind(), "store returned non-bool toggle");
            false
        })
    }

    /// Declare `<feature>.<param_name>` constrained to `min..=max` and return
    /// its value. A `default` outside the range is clamped into it.
    pub fn bind_ranged_int(
        &mut self,
        feature: &dyn FeatureIdentity,
        param_name: &str,
        min: i32,
        max: i32,
        default: i32,
        description: &str,
    ) -> i32 {
        let definition = ConfigDefinition::new(feature.name(), param_name);
        let (low, high) = (min.min(max), min.max(max));
        let clamped = default.clamp(low, high);
        if clamped != default {
            warn!(entry = %definition, default, clamped, "default outside declared range");
        }
        let default = clamped;
        let description = ConfigDescription::new(description)
            .with_acceptable(AcceptableValues::range(low, high));

        let value = self
            .store
            .bind(definition.clone(), ConfigValue::Int(default), description);
        value.as_int().unwrap_or_else(|| {
            warn!(entry = %definition, found = %value.kind(), "store returned non-int value");
            default
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::FeatureType;
    use crate::store::MemoryStore;

    struct Lamp;

    impl FeatureIdentity for Lamp {
        fn name(&self) -> &str {
            "Lamp"
        }

        fn display_name(&self) -> &str {
            "Lamp Feature"
        }

        fn description(&self) -> &str {
            "Does nothing."
        }

        fn feature_type(&self) -> FeatureType {
            FeatureType::Server
        }
    }

    /// A store that ignores declarations and always answers with one value.
    struct FixedStore(ConfigValue);

    impl SettingsStore for FixedStore {
        fn bind(
            &mut self,
            _definition: ConfigDefinition,
            _default: ConfigValue,
            _description: ConfigDescription,
        ) -> ConfigValue {
            self.0
        }

        fn get(&self, _definition: &ConfigDefinition) -> Option<ConfigValue> {
            Some(self.0)
        }
    }

    #[test]
    fn test_bind_enabled_defaults_to_false() {
        let mut store = MemoryStore::new();
        let enabled = ConfigBinder::new(&mut store).bind_enabled(&Lamp);
        assert!(!enabled);
    }

    #[test]
    fn test_bind_enabled_reads_stored_value() {
        let mut store =
            MemoryStore::new().with_value(ConfigDefinition::new("Lamp", IS_ENABLED_KEY), true);
        assert!(ConfigBinder::new(&mut store).bind_enabled(&Lamp));
    }

    #[test]
    fn test_bind_enabled_declares_described_toggle() {
        let mut store = MemoryStore::new();
        ConfigBinder::new(&mut store).bind_enabled(&Lamp);

        let entries = store.entries();
        assert_eq!(entries.len(), 1);
        let entry = entries[0];
        assert_eq!(entry.definition, &ConfigDefinition::new("Lamp", IS_ENABLED_KEY));
        assert_eq!(entry.default, ConfigValue::Bool(false));
        assert_eq!(
            entry.description.text,
            "Enable the 'Lamp Feature' (Server) feature? Does nothing."
        );
        assert_eq!(
            entry.description.acceptable,
            Some(AcceptableValues::toggle())
        );
    }

    #[test]
    fn test_bind_ranged_int_default_and_stored() {
        let mut store = MemoryStore::new();
        let value = ConfigBinder::new(&mut store).bind_ranged_int(&Lamp, "Slot", 0, 9, 0, "slot");
        assert_eq!(value, 0);

        let mut store = MemoryStore::new().with_value(ConfigDefinition::new("Lamp", "Slot"), 5);
        let value = ConfigBinder::new(&mut store).bind_ranged_int(&Lamp, "Slot", 0, 9, 0, "slot");
        assert_eq!(value, 5);
    }

    #[test]
    fn test_bind_ranged_int_declares_range() {
        let mut store = MemoryStore::new();
        ConfigBinder::new(&mut store).bind_ranged_int(&Lamp, "Slot", 0, 9, 0, "slot");
        assert_eq!(
            store.entries()[0].description.acceptable,
            Some(AcceptableValues::Range { min: 0, max: 9 })
        );
    }

    #[test]
    fn test_bind_ranged_int_clamps_default_into_range() {
        let mut store = MemoryStore::new();
        let value = ConfigBinder::new(&mut store).bind_ranged_int(&Lamp, "Slot", 0, 9, 15, "slot");
        assert_eq!(value, 9);
        assert_eq!(store.entries()[0].default, ConfigValue::Int(9));

        let mut store = MemoryStore::new();
        let value = ConfigBinder::new(&mut store).bind_ranged_int(&Lamp, "Slot", 1, 9, -2, "slot");
        assert_eq!(value, 1);
    }

    #[test]
    fn test_wrong_kind_from_store_falls_back_to_default() {
        let mut store = FixedStore(ConfigValue::Int(1));
        assert!(!ConfigBinder::new(&mut store).bind_enabled(&Lamp));

        let mut store = FixedStore(ConfigValue::Bool(true));
        let value = ConfigBinder::new(&mut store).bind_ranged_int(&Lamp, "Slot", 0, 9, 3, "slot");
        assert_eq!(value, 3);
    }
}
