//! File-based settings discovery and layered loading.
//!
//! Settings are resolved from, lowest priority first:
//!
//! 1. [`Settings::default`]
//! 2. one configuration file (`docblock.toml`, `.docblockrc.json`, or the
//!    `docblockr` field of `package.json`)
//! 3. `DOCBLOCK_*` environment variables (`DOCBLOCK_ALIGN_TAGS=shallow`)

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Json, Serialized, Toml},
    Figment,
};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::settings::Settings;

/// TOML configuration file name.
pub const TOML_FILE: &str = "docblock.toml";
/// JSON configuration file name.
pub const JSON_FILE: &str = ".docblockrc.json";
/// Field holding settings inside `package.json`.
pub const PACKAGE_JSON_FIELD: &str = "docblockr";
/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "DOCBLOCK_";

/// A configuration file and the format it is read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Toml(PathBuf),
    Json(PathBuf),
    PackageJson(PathBuf),
}

impl ConfigSource {
    /// Pick the format for an explicitly given path from its name.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return Self::PackageJson(path);
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml(path),
            _ => Self::Json(path),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Toml(p) | Self::Json(p) | Self::PackageJson(p) => p,
        }
    }
}

/// Searches a directory for a docblock configuration file.
///
/// # Example
///
/// ```no_run
/// use docblock_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let settings = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. docblock.toml
    /// 2. .docblockrc.json
    /// 3. package.json (docblockr field)
    pub fn find(&self) -> Option<ConfigSource> {
        let toml_path = self.root.join(TOML_FILE);
        if toml_path.is_file() {
            return Some(ConfigSource::Toml(toml_path));
        }

        let json_path = self.root.join(JSON_FILE);
        if json_path.is_file() {
            return Some(ConfigSource::Json(json_path));
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| field.is_object())
                    {
                        return Some(ConfigSource::PackageJson(pkg_path));
                    }
                }
            }
        }

        None
    }

    /// Load settings from the discovered file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<Settings> {
        let source = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        extract(Some(&source))
    }
}

/// Resolve settings for a front-end.
///
/// An explicit path must exist; otherwise `root` is searched and, when
/// nothing is found there, defaults plus environment overrides are used.
pub fn load_settings(explicit: Option<&Path>, root: &Path) -> Result<Settings> {
    let source = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(ConfigSource::from_path(path))
        }
        None => ConfigDiscovery::new(root).find(),
    };
    extract(source.as_ref())
}

fn extract(source: Option<&ConfigSource>) -> Result<Settings> {
    let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

    match source {
        Some(ConfigSource::Toml(path)) => figment = figment.merge(Toml::file(path)),
        Some(ConfigSource::Json(path)) => figment = figment.merge(Json::file(path)),
        Some(ConfigSource::PackageJson(path)) => {
            figment = figment.merge(Figment::from(Json::file(path)).focus(PACKAGE_JSON_FIELD))
        }
        None => {}
    }

    if let Some(source) = source {
        debug!(path = %source.path().display(), "loading docblock settings");
    }

    // DOCBLOCK_ALIGN_TAGS, DOCBLOCK_RETURNTAG, ... map onto camelCase keys
    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .lowercase(false)
            .map(|key| match Settings::canonical_key(key.as_str()) {
                Some(canonical) => canonical.into(),
                None => key.as_str().to_string().into(),
            }),
    );

    Ok(figment.extract()?)
}
