use anyhow::{Context, Result};

use super::column::ColumnError;
use crate::translation::{Translate, check_batch_len};

/// A table row; field order is significant.
pub type Row = Vec<String>;

/// Translates every row of `rows` in place.
///
/// With no `columns` each row is sent as one batch and replaced wholesale.
/// Otherwise the fields at the 1-based `columns` are sent in that order and
/// result `k` is written back to `columns[k]`, so a repeated column keeps its
/// last translation. `on_row` is called with the 1-based row number before
/// each row is dispatched.
///
/// Any failure aborts the whole table; rows translated so far are left
/// modified, so callers must not persist `rows` after an error.
pub async fn translate_rows<T, F>(
    rows: &mut [Row],
    columns: &[usize],
    translator: &T,
    mut on_row: F,
) -> Result<()>
where
    T: Translate,
    F: FnMut(usize),
{
    for (i, row) in rows.iter_mut().enumerate() {
        let row_number = i + 1;
        on_row(row_number);

        if row.is_empty() {
            continue;
        }

        if columns.is_empty() {
            let translated = translate_batch(translator, row)
                .await
                .with_context(|| format!("Failed to translate row {row_number}"))?;
            *row = translated;
        } else {
            let batch = columns
                .iter()
                .map(|&col| field(row, col, row_number).cloned())
                .collect::<Result<Vec<_>>>()?;

            let translated = translate_batch(translator, &batch)
                .await
                .with_context(|| format!("Failed to translate row {row_number}"))?;

            for (&col, value) in columns.iter().zip(translated) {
                row[col - 1] = value;
            }
        }
    }

    Ok(())
}

async fn translate_batch<T: Translate>(translator: &T, batch: &[String]) -> Result<Vec<String>> {
    let translated = translator.translate(batch).await?;
    check_batch_len(batch.len(), translated.len())?;
    Ok(translated)
}

fn field(row: &[String], col: usize, row_number: usize) -> Result<&String> {
    col.checked_sub(1)
        .and_then(|index| row.get(index))
        .ok_or_else(|| ColumnError::ColumnOutOfRange {
            token: col.to_string(),
            width: row.len(),
        })
        .with_context(|| format!("Row {row_number} is shorter than the first row"))
}
