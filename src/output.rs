//! Process-wide output settings and stderr helpers.
//!
//! Translations only ever go to the output file, so everything printed by
//! the CLI is a status message, a diagnostic, or an error.
//!
//! ## Routing
//!
//! - Status messages and the progress ticker go to stderr
//! - Warnings and errors always go to stderr, even with `--quiet`
//! - `NO_COLOR` disables styling (<https://no-color.org/>)
//! - Debug diagnostics use `tracing`, enabled with `-v` or `RUST_LOG`

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress status messages and the progress ticker.
    pub quiet: bool,
    /// Emit debug diagnostics for this crate.
    pub verbose: bool,
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Stores the settings for the rest of the run. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Installs the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` for this
/// crate and everything else stays at `warn`.
pub fn init_tracing() {
    let default_directive = if config().verbose {
        concat!(env!("CARGO_CRATE_NAME"), "=debug,warn")
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!is_no_color())
        .with_target(false)
        .try_init();
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a run summary to stderr (respects quiet mode).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning to stderr, even in quiet mode.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
