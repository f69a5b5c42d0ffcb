//! TOML configuration file loading
//!
//! The file supplies defaults; command-line flags override them. An explicitly
//! named file must exist, while the default location is optional.
//!
//! ```toml
//! base_path = "/srv/site"
//! application = "default"
//! providers = ["FieldTypeServiceProvider", "BlockServiceProvider"]
//! binding = "singleton"
//! exclude = ["legacy-*"]
//!
//! [paths]
//! shared = "/opt/streams/shared"
//!
//! [logging]
//! level = "debug"
//! format = "ext"
//! ```

use crate::addon::api::{AddonSettings, BindingMode};
use crate::app::cli::args::{parse_comma_separated, Args};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "streams.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

impl crate::core::error_handling::ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ConfigError::NotFound { .. } => Some("check the --config-file path"),
            ConfigError::Parse { .. } => Some("the configuration file is not valid TOML"),
            ConfigError::Invalid { message } => Some(message.as_str()),
            ConfigError::Read { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_path: Option<PathBuf>,
    pub application: Option<String>,
    pub providers: Option<Vec<String>>,
    pub binding: Option<BindingMode>,
    pub namespace_root: Option<String>,
    pub exclude: Vec<String>,
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub core: Option<PathBuf>,
    pub shared: Option<PathBuf>,
    pub application: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
    pub file: Option<PathBuf>,
}

/// `<config dir>/Streams/streams.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Streams").join(CONFIG_FILE_NAME))
}

/// Load the explicit file, or the default file when it exists.
/// Returns `None` when no file applies.
pub fn load_config(explicit: Option<&Path>) -> ConfigResult<Option<FileConfig>> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    log::trace!("Loading configuration from {}", path.display());
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    parse_config(&contents, &path).map(Some)
}

pub fn parse_config(contents: &str, path: &Path) -> ConfigResult<FileConfig> {
    toml::from_str::<FileConfig>(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge file values and command-line flags into bootstrap settings.
/// Flags win; exclude patterns from both sources are combined.
pub fn resolve_settings(args: &Args, file: &FileConfig) -> ConfigResult<AddonSettings> {
    let mut settings = AddonSettings::default();

    if let Some(base) = args.base_path.clone().or_else(|| file.base_path.clone()) {
        settings.base_path = base;
    }
    settings.application = args
        .application
        .clone()
        .or_else(|| file.application.clone());

    settings.core_path = args.core_path.clone().or_else(|| file.paths.core.clone());
    settings.shared_path = args
        .shared_path
        .clone()
        .or_else(|| file.paths.shared.clone());
    settings.application_path = args
        .application_path
        .clone()
        .or_else(|| file.paths.application.clone());

    if let Some(root) = args
        .namespace_root
        .clone()
        .or_else(|| file.namespace_root.clone())
    {
        if root.trim_matches('\\').is_empty() {
            return Err(ConfigError::Invalid {
                message: "namespace_root must not be empty".to_string(),
            });
        }
        settings.namespace_root = root;
    }

    settings.binding = match &args.binding {
        Some(name) => BindingMode::from_name(name).ok_or_else(|| ConfigError::Invalid {
            message: format!("unknown binding mode '{}'", name),
        })?,
        None => file.binding.unwrap_or_default(),
    };

    let cli_providers = args.provider_list();
    if !cli_providers.is_empty() {
        settings.providers = cli_providers;
    } else if let Some(providers) = &file.providers {
        settings.providers = parse_comma_separated(providers);
    }

    let mut exclude = parse_comma_separated(&file.exclude);
    for pattern in args.exclude_list() {
        if !exclude.contains(&pattern) {
            exclude.push(pattern);
        }
    }
    settings.exclude = exclude;

    Ok(settings)
}
