//! # qol_summon
//!
//! The quick summon feature: one keypress casts the summoning tome sitting in
//! a configured equipment slot.
//!
//! - [`QuickSummon`] — the feature itself.
//! - [`config`] — its config entry bindings.

pub mod config;
pub mod quick_summon;

pub use quick_summon::QuickSummon;
