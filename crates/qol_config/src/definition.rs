//! Config entry keys, constraints, and descriptions.
//!
//! An entry is addressed by a [`ConfigDefinition`]: the owning feature's name
//! as the section, and the parameter name as the key. Each entry carries a
//! [`ConfigDescription`] that optionally constrains the values it accepts.

use std::fmt;

use crate::value::ConfigValue;

/// Where a feature runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureType {
    /// Runs on the game client only.
    Client,
    /// Runs on the server only.
    Server,
    /// Must be installed on both sides.
    ClientAndServer,
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => f.write_str("Client"),
            Self::Server => f.write_str("Server"),
            Self::ClientAndServer => f.write_str("Client and Server"),
        }
    }
}

/// The descriptive metadata of a feature, as needed to declare its entries.
pub trait FeatureIdentity {
    /// Unique identifier, used as the config section.
    fn name(&self) -> &str;

    /// Human-readable name.
    fn display_name(&self) -> &str;

    /// One-sentence summary of what the feature does.
    fn description(&self) -> &str;

    /// Where the feature runs.
    fn feature_type(&self) -> FeatureType;
}

/// The key of a config entry: `(section, key)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigDefinition {
    /// Section, by convention the owning feature's name.
    pub section: String,
    /// Parameter name within the section.
    pub key: String,
}

impl ConfigDefinition {
    /// Create a definition for `section.key`.
    #[must_use]
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ConfigDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.key)
    }
}

/// The set of values an entry accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptableValues {
    /// Only the listed values.
    List(Vec<ConfigValue>),
    /// Any integer in `min..=max`.
    Range {
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },
}

impl AcceptableValues {
    /// The `{true, false}` list used for toggles.
    #[must_use]
    pub fn toggle() -> Self {
        Self::List(vec![ConfigValue::Bool(true), ConfigValue::Bool(false)])
    }

    /// A closed integer range. Bounds given in the wrong order are swapped.
    #[must_use]
    pub fn range(min: i32, max: i32) -> Self {
        Self::Range {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Returns `true` if `value` satisfies the constraint.
    #[must_use]
    pub fn accepts(&self, value: &ConfigValue) -> bool {
        match self {
            Self::List(values) => values.contains(value),
            Self::Range { min, max } => value.as_int().is_some_and(|v| (*min..=*max).contains(&v)),
        }
    }

    /// Bring `value` into the acceptable set.
    ///
    /// Ranges clamp integers to the nearest bound. Anything else that is not
    /// accepted falls back to `default`.
    #[must_use]
    pub fn coerce(&self, value: ConfigValue, default: ConfigValue) -> ConfigValue {
        if self.accepts(&value) {
            return value;
        }
        match (self, value) {
            (Self::Range { min, max }, ConfigValue::Int(v)) => {
                ConfigValue::Int(v.clamp(*min, *max))
            }
            _ => default,
        }
    }
}

impl fmt::Display for AcceptableValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(values) => {
                let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "one of [{}]", rendered.join(", "))
            }
            Self::Range { min, max } => write!(f, "from {min} to {max}"),
        }
    }
}

/// Human-readable text plus an optional value constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDescription {
    /// Text shown next to the entry in the host's config UI or file.
    pub text: String,
    /// Values the entry accepts, if constrained.
    pub acceptable: Option<AcceptableValues>,
}

impl ConfigDescription {
    /// An unconstrained description.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            acceptable: None,
        }
    }

    /// Attach a value constraint.
    #[must_use]
    pub fn with_acceptable(mut self, acceptable: AcceptableValues) -> Self {
        self.acceptable = Some(acceptable);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_display() {
        let def = ConfigDefinition::new("QuickSummon", "EquipmentSlotIndex");
        assert_eq!(def.to_string(), "QuickSummon.EquipmentSlotIndex");
    }

    #[test]
    fn test_range_accepts_bounds_inclusive() {
        let range = AcceptableValues::range(0, 9);
        assert!(range.accepts(&ConfigValue::Int(0)));
        assert!(range.accepts(&ConfigValue::Int(9)));
        assert!(!range.accepts(&ConfigValue::Int(10)));
        assert!(!range.accepts(&ConfigValue::Bool(true)));
    }

    #[test]
    fn test_range_swaps_reversed_bounds() {
        assert_eq!(
            AcceptableValues::range(9, 0),
            AcceptableValues::Range { min: 0, max: 9 }
        );
    }

    #[test]
    fn test_range_coerce_clamps() {
        let range = AcceptableValues::range(0, 9);
        let coerce = |v| range.coerce(ConfigValue::Int(v), ConfigValue::Int(0));
        assert_eq!(coerce(15), ConfigValue::Int(9));
        assert_eq!(coerce(-4), ConfigValue::Int(0));
        assert_eq!(coerce(5), ConfigValue::Int(5));
    }

    #[test]
    fn test_list_coerce_resets_to_default() {
        let list = AcceptableValues::List(vec![ConfigValue::Int(1), ConfigValue::Int(2)]);
        assert_eq!(
            list.coerce(ConfigValue::Int(3), ConfigValue::Int(1)),
            ConfigValue::Int(1)
        );
    }

    #[test]
    fn test_toggle_accepts_both_booleans() {
        let toggle = AcceptableValues::toggle();
        assert!(toggle.accepts(&ConfigValue::Bool(true)));
        assert!(toggle.accepts(&ConfigValue::Bool(false)));
        assert!(!toggle.accepts(&ConfigValue::Int(1)));
    }

    #[test]
    fn test_feature_type_display() {
        assert_eq!(FeatureType::Client.to_string(), "Client");
        assert_eq!(
            FeatureType::ClientAndServer.to_string(),
            "Client and Server"
        );
    }
}
