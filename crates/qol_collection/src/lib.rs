//! # qol_collection
//!
//! The QOL collection feature set and the [`FeatureManager`] that owns it.
//!
//! ## Usage
//!
//! ```rust
//! use qol_collection::FeatureManager;
//! use qol_config::MemoryStore;
//! use qol_feature::RecordingHost;
//!
//! let mut manager = FeatureManager::new(RecordingHost::new(), MemoryStore::new());
//!
//! // Called by the host once per tick.
//! manager.update_all();
//!
//! assert_eq!(manager.crafting_range().max_range(), 25);
//! assert_eq!(manager.constructed(), 3);
//! ```

pub mod crafting_range;
pub mod manager;
pub mod no_death_penalty;
pub mod quick_stash;

pub use crafting_range::CraftingRange;
pub use manager::FeatureManager;
pub use no_death_penalty::NoDeathPenalty;
pub use quick_stash::QuickStash;
