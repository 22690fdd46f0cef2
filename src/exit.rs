//! Maps failures to `sysexits`-style process exit codes.

use exitcode::ExitCode;

use crate::config::ConfigError;
use crate::table::ColumnError;
use crate::translation::TranslateError;

/// Picks the exit code for the first recognised error in the chain.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    for cause in err.chain() {
        if cause.downcast_ref::<ConfigError>().is_some() {
            return exitcode::CONFIG;
        }
        if cause.downcast_ref::<ColumnError>().is_some() {
            return exitcode::DATAERR;
        }
        if cause.downcast_ref::<TranslateError>().is_some() {
            return exitcode::UNAVAILABLE;
        }
        if cause.downcast_ref::<std::io::Error>().is_some()
            || cause.downcast_ref::<csv::Error>().is_some()
            || cause.downcast_ref::<std::string::FromUtf8Error>().is_some()
        {
            return exitcode::IOERR;
        }
    }
    exitcode::SOFTWARE
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_config_error_is_config() {
        let err = anyhow::Error::new(ConfigError::MissingProject).context("Failed to start");
        assert_eq!(exit_code(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_column_error_is_dataerr() {
        let err = anyhow::Error::new(ColumnError::InvalidColumnReference {
            token: "1x".to_string(),
        });
        assert_eq!(exit_code(&err), exitcode::DATAERR);
    }

    #[test]
    fn test_dispatcher_error_is_unavailable() {
        let result: Result<(), _> = Err(TranslateError::EmptyResult);
        let err = result.context("Failed to translate row 3").unwrap_err();
        assert_eq!(exit_code(&err), exitcode::UNAVAILABLE);
    }

    #[test]
    fn test_io_error_is_ioerr() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = anyhow::Error::new(io).context("Failed to read input file: in.txt");
        assert_eq!(exit_code(&err), exitcode::IOERR);
    }

    #[test]
    fn test_config_read_failure_stays_config() {
        let err = anyhow::Error::new(ConfigError::Read {
            path: "cfg.toml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(exit_code(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_unknown_error_is_software() {
        let err = anyhow::anyhow!("Invalid language code: 'xx'");
        assert_eq!(exit_code(&err), exitcode::SOFTWARE);
    }
}
