//! The settings store abstraction and its in-memory implementation.
//!
//! The store owns every entry. Features never write to it; they only declare
//! entries through [`SettingsStore::bind`] and read back whatever value the
//! store settles on. What happens to a stored value that does not fit the
//! declaration is the store's business.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::definition::{AcceptableValues, ConfigDefinition, ConfigDescription};
use crate::error::ConfigError;
use crate::value::ConfigValue;

/// A host-provided key-value settings store.
pub trait SettingsStore {
    /// Declare an entry and return its current value.
    ///
    /// The first declaration of a definition wins; later declarations of the
    /// same key reuse the original default and constraint. Returns the stored
    /// value if one exists (after the store's recovery policy), otherwise
    /// `default`.
    fn bind(
        &mut self,
        definition: ConfigDefinition,
        default: ConfigValue,
        description: ConfigDescription,
    ) -> ConfigValue;

    /// Returns the current value of an entry, declared or not.
    fn get(&self, definition: &ConfigDefinition) -> Option<ConfigValue>;
}

#[derive(Debug, Clone)]
struct Declaration {
    default: ConfigValue,
    description: ConfigDescription,
}

/// A declared entry, as listed by [`MemoryStore::entries`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigEntry<'a> {
    /// The entry key.
    pub definition: &'a ConfigDefinition,
    /// The declared default.
    pub default: ConfigValue,
    /// The declared description and constraint.
    pub description: &'a ConfigDescription,
    /// The value currently in effect.
    pub value: ConfigValue,
}

/// An in-memory settings store.
///
/// Values may be seeded before any feature declares them, mirroring a config
/// file written by a previous session or edited by hand. When an entry is
/// declared, a seeded value of the wrong kind resets to the default, and a
/// value outside the constraint is coerced by [`AcceptableValues::coerce`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Current values, keyed by definition.
    values: HashMap<ConfigDefinition, ConfigValue>,
    /// Declarations, ordered for stable listing.
    declared: BTreeMap<ConfigDefinition, Declaration>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a previously stored value. It is not validated until declared.
    #[must_use]
    pub fn with_value(
        mut self,
        definition: ConfigDefinition,
        value: impl Into<ConfigValue>,
    ) -> Self {
        self.values.insert(definition, value.into());
        self
    }

    /// Load a snapshot of the form `{ "<section>": { "<key>": <bool|int> } }`.
    ///
    /// Entries whose value is neither a bool nor an `i32` are skipped with a
    /// warning, so they fall back to their declared default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, and
    /// [`ConfigError::InvalidSection`] when a section is not an object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let root: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(ConfigError::Parse)?;

        let mut store = Self::new();
        for (section, entries) in root {
            let serde_json::Value::Object(entries) = entries else {
                return Err(ConfigError::InvalidSection(section));
            };
            for (key, raw) in entries {
                let definition = ConfigDefinition::new(section.clone(), key);
                match ConfigValue::deserialize(&raw) {
                    Ok(value) => {
                        store.values.insert(definition, value);
                    }
                    Err(_) => {
                        warn!(entry = %definition, %raw, "skipping unsupported stored value");
                    }
                }
            }
        }

        debug!(values = store.values.len(), "loaded settings snapshot");
        Ok(store)
    }

    /// Render every current value as a pretty-printed snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if rendering fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let mut sections: BTreeMap<&str, BTreeMap<&str, ConfigValue>> = BTreeMap::new();
        for (definition, value) in &self.values {
            sections
                .entry(definition.section.as_str())
                .or_default()
                .insert(definition.key.as_str(), *value);
        }
        serde_json::to_string_pretty(&sections).map_err(ConfigError::Serialize)
    }

    /// Declared entries in `(section, key)` order.
    #[must_use]
    pub fn entries(&self) -> Vec<ConfigEntry<'_>> {
        self.declared
            .iter()
            .map(|(definition, declaration)| ConfigEntry {
                definition,
                default: declaration.default,
                description: &declaration.description,
                value: self
                    .values
                    .get(definition)
                    .copied()
                    .unwrap_or(declaration.default),
            })
            .collect()
    }

    /// Number of declared entries.
    #[must_use]
    pub fn declared_count(&self) -> usize {
        self.declared.len()
    }
}

/// Apply the recovery policy to a stored value.
fn recover(
    definition: &ConfigDefinition,
    stored: ConfigValue,
    default: ConfigValue,
    acceptable: Option<&AcceptableValues>,
) -> ConfigValue {
    if stored.kind() != default.kind() {
        warn!(
            entry = %definition,
            expected = %default.kind(),
            found = %stored.kind(),
            "stored value has wrong type, resetting to default"
        );
        return default;
    }

    let Some(acceptable) = acceptable else {
        return stored;
    };
    let recovered = acceptable.coerce(stored, default);
    if recovered != stored {
        warn!(
            entry = %definition,
            stored = %stored,
            recovered = %recovered,
            acceptable = %acceptable,
            "stored value not acceptable"
        );
    }
    recovered
}

impl SettingsStore for MemoryStore {
    fn bind(
        &mut self,
        definition: ConfigDefinition,
        default: ConfigValue,
        description: ConfigDescription,
    ) -> ConfigValue {
        let declaration = self
            .declared
            .entry(definition.clone())
            .or_insert_with(|| Declaration {
                default,
                description,
            });
        let default = declaration.default;
        let acceptable = declaration.description.acceptable.clone();

        let current = match self.values.get(&definition) {
            Some(stored) => recover(&definition, *stored, default, acceptable.as_ref()),
            None => default,
        };

        debug!(entry = %definition, value = %current, "bound config entry");
        self.values.insert(definition, current);
        current
    }

    fn get(&self, definition: &ConfigDefinition) -> Option<ConfigValue> {
        self.values.get(definition).copied()
    }
}
