//! Typed setting values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a [`ConfigValue`], used when reporting mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKind {
    /// A boolean toggle.
    Bool,
    /// A signed integer.
    Int,
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
        }
    }
}

/// A value held by the settings store.
///
/// Serialised untagged so snapshots read naturally: `true`, `5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Int(i32),
}

impl ConfigValue {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ConfigKind {
        match self {
            Self::Bool(_) => ConfigKind::Bool,
            Self::Int(_) => ConfigKind::Int,
        }
    }

    /// Returns the boolean, if this is a [`ConfigValue::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer, if this is a [`ConfigValue::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Bool(_) => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}
