//! # qol_feature
//!
//! Feature runtime primitives.
//!
//! This crate provides:
//!
//! - [`Feature`] trait — what every gameplay modification implements.
//! - [`GameHost`] — the host operations a feature may request, plus
//!   [`RecordingHost`] for headless runs.
//! - [`LazySlot`] — construct-once storage for typed feature accessors.
//! - [`FeatureRegistry`] — fixed, ordered, per-tick dispatch.

pub mod error;
pub mod feature;
pub mod host;
pub mod registry;
pub mod slot;

pub use error::RegistryError;
pub use feature::Feature;
pub use host::{GameHost, HostCall, RecordingHost};
pub use registry::FeatureRegistry;
pub use slot::LazySlot;
