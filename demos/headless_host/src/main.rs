//! # headless_host
//!
//! Stands in for the game: loads a settings snapshot, builds both feature
//! sets against it, and calls their tick entry points at a fixed rate. Every
//! request the features make is recorded and logged instead of touching a
//! real game.
//!
//! ```text
//! headless_host --settings qol.json --ticks 5 --trigger QuickStash --dump-settings
//! ```

mod config;
mod tick;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use qol_collection::FeatureManager;
use qol_config::{ConfigBinder, MemoryStore};
use qol_feature::{Feature, FeatureRegistry, RecordingHost};
use qol_summon::QuickSummon;

use config::HostConfig;
use tick::TickLoop;

#[derive(Parser)]
#[command(name = "headless_host", about = "Drive QOL features without a game")]
struct Args {
    /// JSON settings snapshot, `{ "<Feature>": { "<Key>": value } }`
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 3)]
    ticks: u64,

    /// Ticks per second
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f64,

    /// Feature whose trigger is held down for the whole run (repeatable)
    #[arg(long = "trigger")]
    triggers: Vec<String>,

    /// Print the settled settings snapshot on exit
    #[arg(long)]
    dump_settings: bool,
}

impl From<Args> for HostConfig {
    fn from(args: Args) -> Self {
        let mut config = Self {
            tick_rate: args.tick_rate,
            max_ticks: args.ticks,
            dump_settings: args.dump_settings,
            ..Self::default()
        };
        if let Some(path) = args.settings {
            config = config.with_settings(path);
        }
        for feature in args.triggers {
            config = config.with_pressed(feature);
        }
        config
    }
}

fn load_settings(config: &HostConfig) -> Result<MemoryStore> {
    let Some(path) = &config.settings_path else {
        info!("no settings snapshot given, using defaults");
        return Ok(MemoryStore::new());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let store = MemoryStore::from_json(&json)
        .with_context(|| format!("parsing settings from {}", path.display()))?;
    info!(path = %path.display(), "settings loaded");
    Ok(store)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("headless_host=info".parse()?))
        .init();

    let config = HostConfig::from(Args::parse());
    let mut settings = load_settings(&config)?;

    let mut host = RecordingHost::new();
    for feature in &config.pressed {
        host.set_pressed(feature, true);
    }

    // The summon set is independent of the collection and dispatched through
    // a plain registry.
    let summon: Vec<Box<dyn Feature>> =
        vec![Box::new(QuickSummon::new(&mut ConfigBinder::new(&mut settings)))];
    let mut summon_registry = FeatureRegistry::new(summon)?;

    let mut manager = FeatureManager::new(host, settings);

    let mut tick_loop = TickLoop::new(config.tick_interval(), config.max_ticks);
    tick_loop.run(|tick_id| {
        manager.update_all();
        summon_registry.update_all(manager.host_mut());

        for call in manager.host_mut().take_calls() {
            info!(tick_id, ?call, "host request");
        }
    });

    let (_host, settings) = manager.into_parts();
    info!(
        ticks = tick_loop.tick_id(),
        entries = settings.declared_count(),
        "host run finished"
    );
    for entry in settings.entries() {
        debug!(
            entry = %entry.definition,
            value = %entry.value,
            default = %entry.default,
            description = %entry.description.text,
            "config entry"
        );
    }

    if config.dump_settings {
        println!("{}", settings.to_json()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE_SETTINGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/qol.json");

    #[test]
    fn test_args_into_config() {
        let args = Args::try_parse_from([
            "headless_host",
            "--settings",
            "run.json",
            "--ticks",
            "5",
            "--trigger",
            "QuickStash",
            "--trigger",
            "QuickSummon",
            "--dump-settings",
        ])
        .unwrap();
        let config = HostConfig::from(args);

        assert_eq!(config.settings_path, Some(PathBuf::from("run.json")));
        assert_eq!(config.max_ticks, 5);
        assert_eq!(config.pressed, vec!["QuickStash", "QuickSummon"]);
        assert!(config.dump_settings);
    }

    #[test]
    fn test_args_defaults() {
        let config = HostConfig::from(Args::try_parse_from(["headless_host"]).unwrap());
        assert_eq!(config.settings_path, None);
        assert_eq!(config.max_ticks, 3);
        assert!(config.pressed.is_empty());
        assert!(!config.dump_settings);
    }

    #[test]
    fn test_load_settings_without_path_is_empty() {
        let store = load_settings(&HostConfig::default()).unwrap();
        assert_eq!(store.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_load_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig::default().with_settings(dir.path().join("absent.json"));

        let err = load_settings(&config).unwrap_err();
        assert!(err.to_string().starts_with("reading settings from"));
    }

    #[test]
    fn test_load_settings_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "QuickStash": "#).unwrap();
        let config = HostConfig::default().with_settings(file.path());

        let err = load_settings(&config).unwrap_err();
        assert!(err.to_string().starts_with("parsing settings from"));
    }

    #[test]
    fn test_sample_settings_settle() {
        let config = HostConfig::default().with_settings(SAMPLE_SETTINGS);
        let mut settings = load_settings(&config).unwrap();

        let summon = QuickSummon::new(&mut ConfigBinder::new(&mut settings));
        assert!(summon.is_enabled());
        assert_eq!(summon.equipment_slot_index(), 9);

        let mut manager = FeatureManager::new(RecordingHost::new(), settings);
        let crafting = manager.crafting_range();
        assert!(crafting.is_enabled());
        assert_eq!((crafting.max_range(), crafting.max_chests()), (40, 20));
        assert!(manager.quick_stash().is_enabled());
        assert!(!manager.no_death_penalty().is_enabled());
    }
}
