//! Configuration loading using Figment
//!
//! Sources in precedence order (later sources override earlier ones):
//! 1. Default values
//! 2. `~/.config/taskboard/config.{toml,yaml,json}`
//! 3. `./.taskboard.{toml,yaml,json}`
//! 4. `TASKBOARD_*` environment variables
//!
//! Command line flags are applied on top by [`TaskboardConfig::apply_cli`].

use crate::cli::{Cli, StartArg};
use crate::error::ConfigError;
use crate::prompt::ConfirmPolicy;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taskboard::defaults::StartBoard;
use tracing::{debug, trace};

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Settings for one CLI invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskboardConfig {
    /// Recorded on every activity entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    pub start: StartBoard,
    pub confirm_deletes: ConfirmPolicy,
    pub output: OutputFormat,
}

impl TaskboardConfig {
    /// Load from the user's config directory, the current directory and
    /// the environment
    pub fn load() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|_| ConfigError::CurrentDirectoryNotFound)?;
        Self::load_from(user_config_dir().as_deref(), &cwd)
    }

    /// Load using explicit locations for the user and project files
    pub fn load_from(user_dir: Option<&Path>, project_dir: &Path) -> Result<Self, ConfigError> {
        debug!("Building figment configuration with precedence order");

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(dir) = user_dir {
            figment = merge_files(figment, &dir.join("config"));
        }
        figment = merge_files(figment, &project_dir.join(".taskboard"));
        figment = figment.merge(Env::prefixed("TASKBOARD_"));

        let config: Self = figment.extract()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Let command line flags override the loaded values
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(actor) = &cli.actor {
            self.actor = Some(actor.clone());
        }
        if let Some(start) = cli.start {
            self.start = start.into();
        }
        if cli.yes {
            self.confirm_deletes = ConfirmPolicy::Yes;
        }
        if cli.json {
            self.output = OutputFormat::Json;
        }
    }
}

impl From<StartArg> for StartBoard {
    fn from(arg: StartArg) -> Self {
        match arg {
            StartArg::Sample => StartBoard::Sample,
            StartArg::Default => StartBoard::Default,
            StartArg::Empty => StartBoard::Empty,
        }
    }
}

/// `~/.config/taskboard`
fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("taskboard"))
}

/// Merge `<stem>.toml`, `<stem>.yaml` and `<stem>.json`; missing files are skipped
fn merge_files(figment: Figment, stem: &Path) -> Figment {
    trace!(stem = %stem.display(), "loading config files");
    figment
        .merge(Toml::file(stem.with_extension("toml")))
        .merge(Yaml::file(stem.with_extension("yaml")))
        .merge(Json::file(stem.with_extension("json")))
}
