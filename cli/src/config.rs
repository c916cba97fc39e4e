//! Environment configuration

use std::env;
use std::path::PathBuf;

use pkengine_dex::ChartKind;
use pkengine_engine::{DEFAULT_GATE_COUNT, DEFAULT_LEVEL_CAP, Progression};

pub const DATA_DIR_VAR: &str = "PKENGINE_DATA_DIR";
pub const TYPE_CHART_VAR: &str = "PKENGINE_TYPE_CHART";
pub const BADGES_VAR: &str = "PKENGINE_BADGES";
pub const LEVEL_CAP_VAR: &str = "PKENGINE_LEVEL_CAP";

pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub chart: ChartKind,
    pub progression: Progression,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            chart: ChartKind::default(),
            progression: Progression::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; bad values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let chart = match lookup(TYPE_CHART_VAR) {
            Some(raw) => ChartKind::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(var = TYPE_CHART_VAR, value = %raw, "Unknown type chart, using partial");
                ChartKind::default()
            }),
            None => ChartKind::default(),
        };

        let badges = number_or(&lookup, BADGES_VAR, DEFAULT_GATE_COUNT);
        let level_cap = number_or(&lookup, LEVEL_CAP_VAR, DEFAULT_LEVEL_CAP);

        Self {
            data_dir,
            chart,
            progression: Progression::new(badges, level_cap),
        }
    }
}

fn number_or<F>(lookup: &F, key: &str, default: i32) -> i32
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(var = key, value = %raw, default, "Not a number, using default");
            default
        }
    }
}
