use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::translation::{Translate, Translator};
use crate::ui::{Spinner, Style};

/// Translates a whole text file and writes the result to `output`.
pub async fn run_translate(options: ResolveOptions, config_path: Option<PathBuf>) -> Result<()> {
    let config_file = load_config_file(config_path)?;
    let config = resolve_config(&options, &config_file)?;
    let translator = Translator::from_config(&config);

    let spinner = Spinner::new(&format!("Translating with the {} API", translator.api_name()));
    translate_text_file(&config.input, &config.output, &translator).await?;
    spinner.stop();

    report_success(&config, &translator, &config.input.display().to_string());

    Ok(())
}

/// Sends the entire contents of `input` as a single-item batch.
///
/// The output is the concatenation of every returned string. Empty input
/// produces an empty output file without contacting the service.
pub async fn translate_text_file<T: Translate>(
    input: &Path,
    output: &Path,
    translator: &T,
) -> Result<()> {
    let text = InputReader::read(input)?;

    let translated = if text.is_empty() {
        tracing::debug!(input = %input.display(), "input is empty, skipping translation");
        String::new()
    } else {
        translator
            .translate(&[text])
            .await
            .with_context(|| format!("Failed to translate {}", input.display()))?
            .concat()
    };

    atomic_write(output, &translated)
}

pub(crate) fn load_config_file(config_path: Option<PathBuf>) -> Result<ConfigFile> {
    let manager = ConfigManager::new(config_path)?;
    Ok(manager.load()?)
}

pub(crate) fn report_success(config: &ResolvedConfig, translator: &Translator, what: &str) {
    crate::info!(
        "{} {what} to {} using {} API ({} -> {})",
        Style::success("Translated"),
        config.output.display(),
        translator.api_name(),
        Style::code(&config.languages.source),
        Style::code(&config.languages.target),
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::TranslateError;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Prefixes every item and counts calls.
    #[derive(Default)]
    struct Tagging {
        calls: AtomicUsize,
    }

    impl Translate for Tagging {
        async fn translate(&self, batch: &[String]) -> Result<Vec<String>, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(batch.iter().map(|s| format!("[es] {s}")).collect())
        }
    }

    struct Split;

    impl Translate for Split {
        async fn translate(&self, _batch: &[String]) -> Result<Vec<String>, TranslateError> {
            Ok(vec!["Hola, ".to_string(), "mundo".to_string()])
        }
    }

    #[tokio::test]
    async fn test_whole_file_is_one_item() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "line one\nline two\n").unwrap();

        let translator = Tagging::default();
        translate_text_file(&input, &output, &translator).await.unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "[es] line one\nline two\n"
        );
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_results_are_concatenated() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "Hello, world").unwrap();

        translate_text_file(&input, &output, &Split).await.unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "Hola, mundo");
    }

    #[tokio::test]
    async fn test_empty_input_skips_translation() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("empty.txt");
        let output = dir.path().join("nested/out.txt");
        fs::write(&input, "").unwrap();

        let translator = Tagging::default();
        translate_text_file(&input, &output, &translator).await.unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");

        let result =
            translate_text_file(&dir.path().join("missing.txt"), &output, &Split).await;
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
