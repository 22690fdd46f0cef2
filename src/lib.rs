//! # gootrago - Google Translate for files
//!
//! `gootrago` translates a text file or the rows of a CSV file with the
//! Google Cloud Translation Basic (v2) or Advanced (v3) API and writes the
//! result to a new file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a text file to Ukrainian
//! gootrago -i notes.txt -o notes.uk.txt -t uk
//!
//! # Translate columns A and C of a CSV file with the Advanced API
//! gootrago csv -i items.csv -o items.es.csv -t es -l A,C -a -p my-project
//!
//! # Keep the header row as is
//! gootrago csv -i items.csv -o items.es.csv -t es --header
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/gootrago/config.toml`:
//!
//! ```toml
//! [gootrago]
//! target = "uk"
//! advanced = true
//! project = "my-project"
//! # Basic API key read from this environment variable, falling back to `api_key`
//! api_key_env = "GOOGLE_TRANSLATE_API_KEY"
//! csv_delimiter = ";"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and CLI/file merging.
pub mod config;

/// Exit codes for failures.
pub mod exit;

/// File system utilities.
pub mod fs;

/// Input file reading.
pub mod input;

/// Global output configuration (quiet mode, colors, diagnostics).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Column references, CSV I/O and row translation.
pub mod table;

/// Google Cloud Translation clients and language codes.
pub mod translation;

/// Terminal UI components (progress ticker, colors).
pub mod ui;
