//! Host capabilities available to features.
//!
//! The host owns input, world state, and rendering. Features only ask it to
//! do things through [`GameHost`]; how each request is carried out is up to
//! the host.

use std::collections::HashSet;

/// The game-side operations a feature may request.
pub trait GameHost {
    /// Whether the input bound to `feature` fired during this tick.
    fn trigger_pressed(&self, feature: &str) -> bool;

    /// Extend the distance and chest count the crafting UI draws from.
    fn set_crafting_range(&mut self, range: i32, max_chests: i32);

    /// Move matching inventory items into nearby chests. Returns the number of
    /// stacks moved.
    fn stash_to_nearby_chests(&mut self, range: i32, max_chests: i32) -> usize;

    /// Turn the death penalty on or off.
    fn set_death_penalty(&mut self, enabled: bool);

    /// Use the summoning tome in the given equipment slot.
    fn summon_from_slot(&mut self, slot_index: i32);
}

/// One request made to a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// [`GameHost::set_crafting_range`].
    SetCraftingRange { range: i32, max_chests: i32 },
    /// [`GameHost::stash_to_nearby_chests`].
    StashToNearbyChests { range: i32, max_chests: i32 },
    /// [`GameHost::set_death_penalty`].
    SetDeathPenalty { enabled: bool },
    /// [`GameHost::summon_from_slot`].
    SummonFromSlot { slot_index: i32 },
}

/// A host that records every request in order instead of acting on a game.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Features whose trigger reports pressed on every tick.
    pressed: HashSet<String>,
    /// Stack count reported by each stash request.
    stash_result: usize,
    /// Requests in the order they were made.
    calls: Vec<HostCall>,
}

impl RecordingHost {
    /// Create a host with no pressed triggers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `feature`'s trigger as pressed.
    #[must_use]
    pub fn with_pressed(mut self, feature: impl Into<String>) -> Self {
        self.pressed.insert(feature.into());
        self
    }

    /// Report `stacks` moved for every stash request.
    #[must_use]
    pub fn with_stash_result(mut self, stacks: usize) -> Self {
        self.stash_result = stacks;
        self
    }

    /// Press or release `feature`'s trigger.
    pub fn set_pressed(&mut self, feature: &str, pressed: bool) {
        if pressed {
            self.pressed.insert(feature.to_string());
        } else {
            self.pressed.remove(feature);
        }
    }

    /// Requests recorded so far.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Drain the recorded requests.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl GameHost for RecordingHost {
    fn trigger_pressed(&self, feature: &str) -> bool {
        self.pressed.contains(feature)
    }

    fn set_crafting_range(&mut self, range: i32, max_chests: i32) {
        self.calls.push(HostCall::SetCraftingRange { range, max_chests });
    }

    fn stash_to_nearby_chests(&mut self, range: i32, max_chests: i32) -> usize {
        self.calls.push(HostCall::StashToNearbyChests { range, max_chests });
        self.stash_result
    }

    fn set_death_penalty(&mut self, enabled: bool) {
        self.calls.push(HostCall::SetDeathPenalty { enabled });
    }

    fn summon_from_slot(&mut self, slot_index: i32) {
        self.calls.push(HostCall::SummonFromSlot { slot_index });
    }
}
