//! Fixed-timestep tick loop standing in for the game's frame callback.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

/// Drives a per-tick callback at a fixed rate for a bounded number of ticks.
#[derive(Debug)]
pub struct TickLoop {
    tick_id: u64,
    tick_duration: Duration,
    max_ticks: u64,
}

impl TickLoop {
    /// Create a loop ticking every `tick_duration` for `max_ticks` ticks.
    #[must_use]
    pub fn new(tick_duration: Duration, max_ticks: u64) -> Self {
        Self {
            tick_id: 0,
            tick_duration,
            max_ticks,
        }
    }

    /// Returns the number of ticks run so far.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Run `on_tick` once per tick until `max_ticks` is reached.
    pub fn run(&mut self, mut on_tick: impl FnMut(u64)) {
        info!(
            interval_ms = self.tick_duration.as_millis() as u64,
            max_ticks = self.max_ticks,
            "starting tick loop"
        );

        while self.tick_id < self.max_ticks {
            let start = Instant::now();
            self.tick_id += 1;

            debug!(tick_id = self.tick_id, "tick start");
            on_tick(self.tick_id);

            if self.tick_id == self.max_ticks {
                break;
            }

            let elapsed = start.elapsed();
            if elapsed < self.tick_duration {
                std::thread::sleep(self.tick_duration - elapsed);
            } else if !self.tick_duration.is_zero() {
                warn!(
                    tick_id = self.tick_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = self.tick_duration.as_millis() as u64,
                    "tick exceeded time budget"
                );
            }
        }

        info!(ticks = self.tick_id, "tick loop complete");
    }
}
