use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::translate::{load_config_file, report_success};
use crate::config::{
    CsvOptions, CsvResolveOptions, ResolveOptions, resolve_config, resolve_csv_options,
};
use crate::fs::atomic_write;
use crate::table::{encode_table, read_table, select_columns, translate_rows};
use crate::translation::{Translate, Translator};
use crate::ui::Spinner;

pub async fn run_csv(
    options: ResolveOptions,
    csv_options: CsvResolveOptions,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config_file = load_config_file(config_path)?;
    let config = resolve_config(&options, &config_file)?;
    let csv = resolve_csv_options(&csv_options, &config_file)?;
    let translator = Translator::from_config(&config);

    let spinner = Spinner::new(&format!("Translating with the {} API", translator.api_name()));
    let rows = translate_csv_file(
        &config.input,
        &config.output,
        &csv,
        &translator,
        |row, total| spinner.set_message(format!("Translating row {row}/{total}")),
    )
    .await?;
    spinner.stop();

    let plural = if rows == 1 { "" } else { "s" };
    report_success(
        &config,
        &translator,
        &format!("{rows} row{plural} of {}", config.input.display()),
    );

    Ok(())
}

/// Translates a CSV file row by row and writes the result to `output`.
///
/// Column references are decoded against the width of the first row before
/// anything is sent. With `header` set, the first row is copied through
/// untranslated. `on_row` receives the row number and the number of rows to
/// translate. Returns how many rows were translated.
pub async fn translate_csv_file<T, F>(
    input: &Path,
    output: &Path,
    csv: &CsvOptions,
    translator: &T,
    mut on_row: F,
) -> Result<usize>
where
    T: Translate,
    F: FnMut(usize, usize),
{
    let mut rows = read_table(input, csv.dialect)?;

    let Some(first) = rows.first() else {
        crate::warn!(
            "Warning: {} has no rows, writing an empty file",
            input.display()
        );
        atomic_write(output, "")?;
        return Ok(0);
    };

    let columns = select_columns(&csv.columns, first.len())
        .with_context(|| format!("Invalid column selection for {}", input.display()))?;

    let skip = usize::from(csv.header);
    let body = &mut rows[skip..];
    let total = body.len();

    tracing::debug!(rows = total, columns = ?columns, header = csv.header, "translating CSV table");

    translate_rows(body, &columns, translator, |row| on_row(row, total))
        .await
        .with_context(|| format!("Failed to translate {}", input.display()))?;

    atomic_write(output, &encode_table(&rows, csv.dialect)?)?;

    Ok(total)
}
