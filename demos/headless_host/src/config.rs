//! Headless host configuration.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

/// Interval used when the configured rate cannot be turned into a duration.
const FALLBACK_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Configuration for a headless host run.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Target ticks per second.
    pub tick_rate: f64,
    /// Number of ticks to run before exiting.
    pub max_ticks: u64,
    /// Settings snapshot to load; an empty store is used when absent.
    pub settings_path: Option<PathBuf>,
    /// Features whose trigger is held down for the whole run.
    pub pressed: Vec<String>,
    /// Print the settled settings snapshot to stdout on exit.
    pub dump_settings: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            max_ticks: 3,
            settings_path: None,
            pressed: Vec::new(),
            dump_settings: false,
        }
    }
}

impl HostConfig {
    /// Load settings from `path`.
    #[must_use]
    pub fn with_settings(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    /// Hold `feature`'s trigger down for the whole run.
    #[must_use]
    pub fn with_pressed(mut self, feature: impl Into<String>) -> Self {
        self.pressed.push(feature.into());
        self
    }

    /// Time per tick. Rates that yield no representable interval (zero,
    /// negative, infinite, NaN, or so small the interval overflows) fall back
    /// to 60 Hz.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        match Duration::try_from_secs_f64(1.0 / self.tick_rate) {
            Ok(interval) if self.tick_rate.is_finite() && self.tick_rate > 0.0 => interval,
            _ => {
                warn!(tick_rate = self.tick_rate, "unusable tick rate");
                FALLBACK_INTERVAL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = HostConfig::default()
            .with_settings("qol.json")
            .with_pressed("QuickStash");
        assert_eq!(config.settings_path, Some(PathBuf::from("qol.json")));
        assert_eq!(config.pressed, vec!["QuickStash".to_string()]);
        assert_eq!(config.max_ticks, 3);
    }

    #[test]
    fn test_tick_interval_from_rate() {
        let config = HostConfig {
            tick_rate: 4.0,
            ..HostConfig::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_tick_interval_falls_back_for_unusable_rates() {
        for tick_rate in [0.0, -5.0, 1e-300, f64::INFINITY, f64::NAN] {
            let config = HostConfig {
                tick_rate,
                ..HostConfig::default()
            };
            assert_eq!(config.tick_interval(), FALLBACK_INTERVAL, "{tick_rate}");
        }
    }
}
