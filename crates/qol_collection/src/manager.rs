//! Feature manager: the context object that owns the collection's features.
//!
//! The manager is built once at startup around the host and the settings
//! store, and handed to whatever drives the host tick. Each feature sits in
//! its own [`LazySlot`]: it binds its configuration the first time it is
//! accessed, and every later access returns that same instance.
//!
//! Dispatch order is fixed: CraftingRange, QuickStash, NoDeathPenalty.

use qol_config::{ConfigBinder, SettingsStore};
use qol_feature::{Feature, GameHost, LazySlot};
use tracing::debug;

use crate::crafting_range::CraftingRange;
use crate::no_death_penalty::NoDeathPenalty;
use crate::quick_stash::QuickStash;

/// Owns the host, the settings store, and every feature in the collection.
#[derive(Debug)]
pub struct FeatureManager<H, S> {
    host: H,
    settings: S,
    crafting_range: LazySlot<CraftingRange>,
    quick_stash: LazySlot<QuickStash>,
    no_death_penalty: LazySlot<NoDeathPenalty>,
}

/// Build a feature, binding its configuration against `settings`.
fn construct<F: Feature>(
    settings: &mut dyn SettingsStore,
    name: &str,
    build: impl FnOnce(&mut ConfigBinder<'_>) -> F,
) -> F {
    let feature = build(&mut ConfigBinder::new(settings));
    debug!(
        feature = name,
        enabled = feature.is_enabled(),
        "feature constructed"
    );
    feature
}

fn crafting_range_in<'a>(
    slot: &'a mut LazySlot<CraftingRange>,
    settings: &mut dyn SettingsStore,
) -> &'a mut CraftingRange {
    slot.get_or_init(|| construct(settings, CraftingRange::NAME, CraftingRange::new))
}

fn quick_stash_in<'a>(
    slot: &'a mut LazySlot<QuickStash>,
    settings: &mut dyn SettingsStore,
) -> &'a mut QuickStash {
    slot.get_or_init(|| construct(settings, QuickStash::NAME, QuickStash::new))
}

fn no_death_penalty_in<'a>(
    slot: &'a mut LazySlot<NoDeathPenalty>,
    settings: &mut dyn SettingsStore,
) -> &'a mut NoDeathPenalty {
    slot.get_or_init(|| construct(settings, NoDeathPenalty::NAME, NoDeathPenalty::new))
}

impl<H: GameHost, S: SettingsStore> FeatureManager<H, S> {
    /// Create a manager. No feature is built until it is first needed.
    #[must_use]
    pub fn new(host: H, settings: S) -> Self {
        Self {
            host,
            settings,
            crafting_range: LazySlot::new(),
            quick_stash: LazySlot::new(),
            no_death_penalty: LazySlot::new(),
        }
    }

    /// The crafting range feature.
    pub fn crafting_range(&mut self) -> &mut CraftingRange {
        crafting_range_in(&mut self.crafting_range, &mut self.settings)
    }

    /// The quick stash feature.
    pub fn quick_stash(&mut self) -> &mut QuickStash {
        quick_stash_in(&mut self.quick_stash, &mut self.settings)
    }

    /// The no death penalty feature.
    pub fn no_death_penalty(&mut self) -> &mut NoDeathPenalty {
        no_death_penalty_in(&mut self.no_death_penalty, &mut self.settings)
    }

    /// Run one host tick across every feature, in dispatch order.
    ///
    /// Features that have not been accessed yet are built first.
    pub fn update_all(&mut self) {
        let features: [&mut dyn Feature; 3] = [
            crafting_range_in(&mut self.crafting_range, &mut self.settings),
            quick_stash_in(&mut self.quick_stash, &mut self.settings),
            no_death_penalty_in(&mut self.no_death_penalty, &mut self.settings),
        ];

        for feature in features {
            feature.update(&mut self.host);
        }
    }

    /// Number of features built so far.
    #[must_use]
    pub fn constructed(&self) -> usize {
        [
            self.crafting_range.is_initialized(),
            self.quick_stash.is_initialized(),
            self.no_death_penalty.is_initialized(),
        ]
        .into_iter()
        .filter(|built| *built)
        .count()
    }

    /// The host features act on.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, for driving input between ticks.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The settings store features bind against.
    #[must_use]
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Tear the manager down, returning the host and settings store.
    #[must_use]
    pub fn into_parts(self) -> (H, S) {
        (self.host, self.settings)
    }
}
