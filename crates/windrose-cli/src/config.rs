//! Locating and reading the rose configuration file.
//!
//! A configuration file holds a `[rose]` table with the geometry parameters
//! and a `[style]` table with palette overrides. Both tables are optional.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use windrose::{RoseError, config::AppConfig};

/// Path of the per-project configuration, relative to the working directory.
const PROJECT_CONFIG: &str = "windrose/config.toml";

/// Problems with the configuration file itself, before any geometry is checked.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rose configuration `{}` does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read rose configuration `{}`: {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("invalid [rose] or [style] table in `{}`: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

impl From<ConfigError> for RoseError {
    fn from(err: ConfigError) -> Self {
        RoseError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    CommandLine,
    Project,
    User,
}

/// Resolves the configuration for this run.
///
/// An explicit `--config` path must exist. Otherwise the first existing file
/// among `windrose/config.toml` and the user's config directory is read, and
/// with neither present the default rose is drawn.
///
/// # Errors
///
/// Returns [`RoseError::Config`] if the chosen file is missing, unreadable, or
/// does not describe a rose.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, RoseError> {
    let found = match explicit_path {
        Some(path) => Some((path.as_ref().to_path_buf(), Origin::CommandLine)),
        None => discover(),
    };

    let Some((path, origin)) = found else {
        debug!("No rose configuration found, drawing the default rose");
        return Ok(AppConfig::default());
    };

    info!(path = path.display().to_string(), origin:?; "Reading rose configuration");
    Ok(read_config(&path)?)
}

/// The first implicit configuration file that exists.
fn discover() -> Option<(PathBuf, Origin)> {
    let project = PathBuf::from(PROJECT_CONFIG);
    let user = ProjectDirs::from("com", "windrose", "windrose")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if user.is_none() {
        debug!("No user configuration directory on this platform");
    }

    [(Some(project), Origin::Project), (user, Origin::User)]
        .into_iter()
        .filter_map(|(path, origin)| path.map(|path| (path, origin)))
        .find(|(path, origin)| {
            let exists = path.is_file();
            debug!(path = path.display().to_string(), origin:?, exists; "Checked configuration location");
            exists
        })
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    toml::from_str(&content).map_err(|err| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })
}
