//! Configuration management for `helpdesk`.
//!
//! Configuration is loaded from YAML files with support for:
//! - User config (~/.config/helpdesk/config.yaml)
//! - Workspace config (.helpdesk/config.yaml)
//! - Environment variable overrides
//! - CLI overrides
//!
//! Later layers win, so a workspace file overrides the user's defaults.
//! Relative paths from any layer are resolved against the workspace root,
//! which lets a user-level `data_file` name a per-workspace location.

use std::fs;
use std::path::{Path, PathBuf};

use helpdesk_lib::{Result, TicketError};
use serde::Deserialize;

/// Directory holding workspace config and the default snapshot.
pub const WORKSPACE_DIR: &str = ".helpdesk";

/// Default snapshot file, relative to the workspace root.
pub const DEFAULT_DATA_FILE: &str = ".helpdesk/tickets.json";

/// Default description preview length in list views.
pub const DEFAULT_PREVIEW_WIDTH: usize = 100;

const PREVIEW_WIDTH_ENV: &str = "HELPDESK_PREVIEW_WIDTH";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Snapshot file the store reads and writes.
    pub data_file: PathBuf,
    /// Max description characters shown on list cards.
    pub preview_width: usize,
    /// Append logs here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Config {
    #[must_use]
    pub fn defaults(root: &Path) -> Self {
        Self {
            data_file: root.join(DEFAULT_DATA_FILE),
            preview_width: DEFAULT_PREVIEW_WIDTH,
            log_file: None,
        }
    }

    fn apply(&mut self, layer: ConfigFile, root: &Path) {
        if let Some(path) = layer.data_file {
            self.data_file = root.join(path);
        }
        if let Some(width) = layer.preview_width {
            self.preview_width = width;
        }
        if let Some(path) = layer.log_file {
            self.log_file = Some(root.join(path));
        }
    }
}

/// One YAML layer; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    data_file: Option<PathBuf>,
    preview_width: Option<usize>,
    log_file: Option<PathBuf>,
}

/// Values passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
}

/// Path of the workspace config file under `root`.
#[must_use]
pub fn workspace_config_path(root: &Path) -> PathBuf {
    root.join(WORKSPACE_DIR).join("config.yaml")
}

/// Path of the per-user config file, if a home can be determined.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("helpdesk").join("config.yaml"))
}

/// Load configuration for a workspace rooted at `root`.
///
/// # Errors
///
/// Returns `Config` if a config file is malformed or an environment value
/// cannot be parsed.
pub fn load(root: &Path, cli: &CliOverrides) -> Result<Config> {
    load_layers(root, user_config_path().as_deref(), |key| std::env::var(key).ok(), cli)
}

/// Load configuration from explicit sources.
///
/// # Errors
///
/// Returns `Config` if a config file is malformed or an environment value
/// cannot be parsed.
pub fn load_layers<E>(
    root: &Path,
    user_config: Option<&Path>,
    env: E,
    cli: &CliOverrides,
) -> Result<Config>
where
    E: Fn(&str) -> Option<String>,
{
    let mut config = Config::defaults(root);

    if let Some(path) = user_config {
        if let Some(layer) = read_layer(path)? {
            config.apply(layer, root);
        }
    }
    if let Some(layer) = read_layer(&workspace_config_path(root))? {
        config.apply(layer, root);
    }

    if let Some(raw) = env(PREVIEW_WIDTH_ENV) {
        config.preview_width = raw.trim().parse().map_err(|_| {
            TicketError::Config(format!("{PREVIEW_WIDTH_ENV} must be a number, got '{raw}'"))
        })?;
    }

    if let Some(ref path) = cli.data_file {
        config.data_file = root.join(path);
    }

    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}

fn read_layer(path: &Path) -> Result<Option<ConfigFile>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TicketError::Io(e)),
    };
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_yaml::from_str(&text)
        .map(Some)
        .map_err(|e| TicketError::Config(format!("{}: {e}", path.display())))
}
