use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::paths;
use crate::table::Dialect;
use crate::translation::{DEFAULT_ENDPOINT, LanguagePair, SourceLanguage, validate_language};

/// Configuration problems detected before any translation starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: '{key}' (pass --{key} or set it in the config file)")]
    Missing { key: &'static str },

    #[error("Input file and output file are the same: {}", .0.display())]
    SamePath(PathBuf),

    #[error(
        "Project ID is required for the Advanced API (pass --project or set 'project' in the config file)"
    )]
    MissingProject,

    #[error("Invalid value for '{key}': {message}")]
    Invalid { key: &'static str, message: String },

    #[error("Failed to read config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default settings in the `[gootrago]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Source language code or `auto`.
    pub source: Option<String>,
    /// Target language code.
    pub target: Option<String>,
    /// Use the Advanced (v3) API.
    pub advanced: Option<bool>,
    /// Google Cloud project ID.
    pub project: Option<String>,
    /// Service account or ADC credentials file.
    pub credentials: Option<PathBuf>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// API base URL.
    pub endpoint: Option<String>,
    pub csv_delimiter: Option<String>,
    pub csv_comment: Option<String>,
}

impl Defaults {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gootrago: Defaults,
}

/// Which Cloud Translation API serves the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiMode {
    Basic,
    Advanced { project_id: String },
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub languages: LanguagePair,
    pub mode: ApiMode,
    pub credentials: Option<PathBuf>,
    pub api_key: Option<String>,
    pub endpoint: String,
}

/// CLI overrides; they take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source: Option<String>,
    pub target: Option<String>,
    pub advanced: bool,
    /// Forces the Basic API over `advanced` from any source.
    pub basic: bool,
    pub project: Option<String>,
    pub credentials: Option<PathBuf>,
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// # Errors
///
/// Returns an error if the target language is missing, a language code is
/// invalid, input and output are the same file, or the Advanced API is
/// selected without a project.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, ConfigError> {
    let defaults = &config_file.gootrago;

    if same_file(&options.input, &options.output) {
        return Err(ConfigError::SamePath(options.input.clone()));
    }

    let target = options
        .target
        .as_ref()
        .or(defaults.target.as_ref())
        .cloned()
        .ok_or(ConfigError::Missing { key: "target" })?;
    validate_language(&target).map_err(|e| ConfigError::Invalid {
        key: "target",
        message: e.to_string(),
    })?;

    let source = options
        .source
        .as_deref()
        .or(defaults.source.as_deref())
        .map_or(Ok(SourceLanguage::Auto), SourceLanguage::parse)
        .map_err(|e| ConfigError::Invalid {
            key: "source",
            message: e.to_string(),
        })?;

    let advanced =
        !options.basic && (options.advanced || defaults.advanced.unwrap_or(false));
    let mode = if advanced {
        let project_id = options
            .project
            .as_ref()
            .or(defaults.project.as_ref())
            .filter(|p| !p.trim().is_empty())
            .cloned()
            .ok_or(ConfigError::MissingProject)?;
        ApiMode::Advanced { project_id }
    } else {
        ApiMode::Basic
    };

    let credentials = options
        .credentials
        .as_ref()
        .or(defaults.credentials.as_ref())
        .cloned();
    if let Some(path) = &credentials
        && !path.is_file()
    {
        return Err(ConfigError::Invalid {
            key: "credentials",
            message: format!("file not found: {}", path.display()),
        });
    }

    let endpoint = options
        .endpoint
        .as_ref()
        .or(defaults.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
        return Err(ConfigError::Invalid {
            key: "endpoint",
            message: format!("expected an http(s) URL, got '{endpoint}'"),
        });
    }

    Ok(ResolvedConfig {
        input: options.input.clone(),
        output: options.output.clone(),
        languages: LanguagePair { source, target },
        mode,
        credentials,
        api_key: options.api_key.clone().or_else(|| defaults.get_api_key()),
        endpoint,
    })
}

/// CSV-specific CLI overrides.
#[derive(Debug, Clone, Default)]
pub struct CsvResolveOptions {
    pub columns: Vec<String>,
    pub delimiter: Option<String>,
    pub comment: Option<String>,
    pub header: bool,
}

/// Resolved CSV settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub dialect: Dialect,
    /// Raw column references; empty means whole rows.
    pub columns: Vec<String>,
    /// Copy the first row through untranslated.
    pub header: bool,
}

/// Resolves CSV settings, falling back to the config file for the dialect.
pub fn resolve_csv_options(
    options: &CsvResolveOptions,
    config_file: &ConfigFile,
) -> Result<CsvOptions, ConfigError> {
    let defaults = &config_file.gootrago;

    let delimiter = options
        .delimiter
        .as_deref()
        .or(defaults.csv_delimiter.as_deref())
        .map(|value| parse_csv_char("csv-delimiter", value))
        .transpose()?
        .flatten()
        .unwrap_or(b',');

    let comment = options
        .comment
        .as_deref()
        .or(defaults.csv_comment.as_deref())
        .map(|value| parse_csv_char("csv-comment", value))
        .transpose()?
        .flatten();

    if comment == Some(delimiter) {
        return Err(ConfigError::Invalid {
            key: "csv-comment",
            message: "comment character must differ from the delimiter".to_string(),
        });
    }

    Ok(CsvOptions {
        dialect: Dialect { delimiter, comment },
        columns: options.columns.clone(),
        header: options.header,
    })
}

/// Takes the first character of `value`; `\t` is accepted as an escape for tab.
///
/// An empty value means "not set".
fn parse_csv_char(key: &'static str, value: &str) -> Result<Option<u8>, ConfigError> {
    if value.is_empty() {
        return Ok(None);
    }
    if value == "\\t" {
        return Ok(Some(b'\t'));
    }

    let invalid = |message: String| ConfigError::Invalid { key, message };

    let Some(ch) = value.chars().next() else {
        return Ok(None);
    };
    if !ch.is_ascii() {
        return Err(invalid(format!("'{ch}' is not an ASCII character")));
    }
    if matches!(ch, '"' | '\r' | '\n') {
        return Err(invalid(format!("{ch:?} cannot be used")));
    }
    Ok(Some(ch as u8))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigManager {
    /// Uses `explicit` when given, otherwise `$XDG_CONFIG_HOME/gootrago/config.toml`
    /// or `~/.config/gootrago/config.toml`.
    pub fn new(explicit: Option<PathBuf>) -> anyhow::Result<Self> {
        Ok(match explicit {
            Some(config_path) => Self {
                config_path,
                explicit: true,
            },
            None => Self {
                config_path: paths::config_dir()?.join("config.toml"),
                explicit: false,
            },
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the file; a missing default file yields the empty configuration.
    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !self.explicit => {
                tracing::debug!(path = %self.config_path.display(), "no config file");
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        let config_file = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })?;

        crate::status!("Using config file: {}", self.config_path.display());

        Ok(config_file)
    }
}
