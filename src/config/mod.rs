//! Configuration file loading and CLI/file merging.

mod manager;

pub use manager::{
    ApiMode, ConfigError, ConfigFile, ConfigManager, CsvOptions, CsvResolveOptions, Defaults,
    ResolveOptions, ResolvedConfig, resolve_config, resolve_csv_options,
};
