//! # qol_config
//!
//! Declarative config binding for QOL features.
//!
//! This crate provides:
//!
//! - [`definition`] — entry keys, value constraints, descriptions, and the
//!   [`FeatureIdentity`] metadata used to describe entries.
//! - [`value`] — typed setting values.
//! - [`store`] — the [`SettingsStore`] abstraction and [`MemoryStore`].
//! - [`binder`] — [`ConfigBinder`], the feature-facing declare/read API.
//! - [`error`] — snapshot load/export errors.

pub mod binder;
pub mod definition;
pub mod error;
pub mod store;
pub mod value;

pub use binder::{ConfigBinder, IS_ENABLED_KEY};
pub use definition::{
    AcceptableValues, ConfigDefinition, ConfigDescription, FeatureIdentity, FeatureType,
};
pub use error::ConfigError;
pub use store::{ConfigEntry, MemoryStore, SettingsStore};
pub use value::{ConfigKind, ConfigValue};
