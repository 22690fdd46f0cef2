use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigError, CsvResolveOptions, ResolveOptions};

#[derive(Parser, Debug)]
#[command(name = "gootrago")]
#[command(about = "Translate text and CSV files with Google Cloud Translation")]
#[command(long_about = "Translate text and CSV files with Google Cloud Translation.\n\n\
    The Basic API (v2) needs an API key or an access token. The Advanced API (v3) \
    needs a Google Cloud project ID and an access token.")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub translate: TranslateArgs,

    /// Config file (default is ~/.config/gootrago/config.toml)
    #[arg(long, global = true, env = "GOOTRAGO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress status messages and the progress ticker
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print debug diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every translating command.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct TranslateArgs {
    /// Input file to translate (required)
    #[arg(short = 'i', long, env = "GOOTRAGO_INPUT")]
    pub input: Option<PathBuf>,

    /// Output file for the translation (required)
    #[arg(short = 'o', long, env = "GOOTRAGO_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Source language code, or 'auto' to detect it [default: auto]
    #[arg(short = 's', long, env = "GOOTRAGO_SOURCE")]
    pub source: Option<String>,

    /// Target language code (e.g., 'uk' for Ukrainian)
    #[arg(short = 't', long, env = "GOOTRAGO_TARGET")]
    pub target: Option<String>,

    /// Use the Advanced (v3) Google Translate API
    #[arg(short = 'a', long, env = "GOOTRAGO_ADVANCED")]
    pub advanced: bool,

    /// Use the Basic (v2) API; wins over --advanced, its variable and the config file
    #[arg(long)]
    pub basic: bool,

    /// Google Cloud project ID (required for the Advanced API)
    #[arg(short = 'p', long, env = "GOOTRAGO_PROJECT")]
    pub project: Option<String>,

    /// Path to a Google Cloud credentials JSON file
    #[arg(short = 'c', long, env = "GOOTRAGO_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// API key for the Basic API
    #[arg(long, env = "GOOTRAGO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Translation API base URL
    #[arg(long, env = "GOOTRAGO_ENDPOINT")]
    pub endpoint: Option<String>,
}

impl TranslateArgs {
    /// Converts the flags into resolver input, requiring input and output paths.
    pub fn resolve_options(&self) -> Result<ResolveOptions, ConfigError> {
        Ok(ResolveOptions {
            input: self
                .input
                .clone()
                .ok_or(ConfigError::Missing { key: "input" })?,
            output: self
                .output
                .clone()
                .ok_or(ConfigError::Missing { key: "output" })?,
            source: self.source.clone(),
            target: self.target.clone(),
            advanced: self.advanced,
            basic: self.basic,
            project: self.project.clone(),
            credentials: self.credentials.clone(),
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
        })
    }
}

/// CSV-only options.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CsvArgs {
    /// Column to translate, by number from 1 or by letter from A (repeatable)
    #[arg(short = 'l', long = "column", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Field delimiter for the CSV file [default: ,]
    #[arg(long, env = "GOOTRAGO_CSV_DELIMITER", allow_hyphen_values = true)]
    pub csv_delimiter: Option<String>,

    /// Comment character for the CSV file
    #[arg(long, env = "GOOTRAGO_CSV_COMMENT", allow_hyphen_values = true)]
    pub csv_comment: Option<String>,

    /// Copy the first row to the output untranslated
    #[arg(long)]
    pub header: bool,
}

impl CsvArgs {
    pub fn resolve_options(&self) -> CsvResolveOptions {
        CsvResolveOptions {
            columns: self.columns.clone(),
            delimiter: self.csv_delimiter.clone(),
            comment: self.csv_comment.clone(),
            header: self.header,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a CSV file or specific columns of it
    Csv {
        #[command(flatten)]
        translate: TranslateArgs,

        #[command(flatten)]
        csv: CsvArgs,
    },
    /// List supported language codes
    Languages,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_root_translation() {
        let args = Args::try_parse_from([
            "gootrago", "-i", "in.txt", "-o", "out.txt", "-t", "es", "-s", "en",
        ])
        .unwrap();

        assert!(args.command.is_none());
        let options = args.translate.resolve_options().unwrap();
        assert_eq!(options.input, PathBuf::from("in.txt"));
        assert_eq!(options.output, PathBuf::from("out.txt"));
        assert_eq!(options.target.as_deref(), Some("es"));
        assert_eq!(options.source.as_deref(), Some("en"));
        assert!(!options.advanced);
    }

    #[test]
    fn test_missing_input_is_config_error() {
        let args = Args::try_parse_from(["gootrago", "-o", "out.txt", "-t", "es"]).unwrap();
        let err = args.translate.resolve_options().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { key: "input" }));
    }

    #[test]
    fn test_parse_csv_columns() {
        let args = Args::try_parse_from([
            "gootrago", "csv", "-i", "in.csv", "-o", "out.csv", "-t", "uk", "-l", "A", "-l",
            "3,C", "--csv-delimiter", ";", "--header", "-a", "-p", "proj",
        ])
        .unwrap();

        let Some(Command::Csv { translate, csv }) = args.command else {
            panic!("expected csv subcommand");
        };
        assert_eq!(csv.columns, vec!["A", "3", "C"]);
        assert_eq!(csv.csv_delimiter.as_deref(), Some(";"));
        assert!(csv.header);
        assert!(translate.advanced);
        assert_eq!(translate.project.as_deref(), Some("proj"));
    }

    #[test]
    fn test_basic_flag_is_passed_to_resolver() {
        let args = Args::try_parse_from([
            "gootrago", "-i", "in.txt", "-o", "out.txt", "-t", "es", "--basic", "-a",
        ])
        .unwrap();

        let options = args.translate.resolve_options().unwrap();
        assert!(options.basic);
        assert!(options.advanced);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["gootrago", "languages", "-q"]).unwrap();
        assert!(args.quiet);
        assert!(matches!(args.command, Some(Command::Languages)));
    }
}
