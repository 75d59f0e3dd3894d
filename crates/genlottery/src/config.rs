//! Optional TOML configuration merged with `GENLOTTERY_*` env vars.
//!
//! Supplies the defaults the CLI flags fall back to: the game type, the
//! line count, and an override for the save directory. A missing config
//! file is normal — built-in defaults apply.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use genlottery_core::{DEFAULT_LINES, LotteryType};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Game used when `--type` is not given.
    #[serde(default)]
    pub default_type: LotteryType,

    /// Line count used when `--lines` is not given.
    #[serde(default = "default_lines")]
    pub default_lines: usize,

    /// Overrides the `~/lottery-db` save directory.
    #[serde(default)]
    pub save_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_type: LotteryType::default(),
            default_lines: default_lines(),
            save_dir: None,
        }
    }
}

fn default_lines() -> usize {
    DEFAULT_LINES
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "genlottery").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("genlottery");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Load the config from file + environment.
pub fn load_config() -> Result<Config, Box<figment::Error>> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("GENLOTTERY_"));

    let config: Config = figment.extract().map_err(Box::new)?;
    Ok(config)
}

/// Load config, falling back to defaults when the file is absent or bad.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}
