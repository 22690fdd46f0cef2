//! Column references in spreadsheet (`A`, `B`, ..., `AA`) or 1-based numeric form.

use thiserror::Error;

/// Errors produced while resolving column references against a row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    /// The token is neither letters nor a decimal integer.
    #[error("invalid column reference: '{token}'")]
    InvalidColumnReference { token: String },

    /// The token decoded to an index outside `1..=width`.
    #[error("column reference '{token}' is out of range (row has {width} columns)")]
    ColumnOutOfRange { token: String, width: usize },
}

/// Decodes one column reference into a validated 1-based index.
///
/// Letters use bijective base-26 (`A` = 1, `Z` = 26, `AA` = 27), so there is
/// no zero digit. Anything else is parsed as a decimal ordinal.
pub fn decode_column(reference: &str, row_width: usize) -> Result<usize, ColumnError> {
    let token = reference.trim().to_ascii_uppercase();

    let index = if token.starts_with(|c: char| c.is_ascii_uppercase()) {
        letters_to_index(&token)
    } else if token.is_empty() {
        0
    } else {
        let ordinal = token
            .parse::<i64>()
            .map_err(|_| ColumnError::InvalidColumnReference {
                token: reference.to_string(),
            })?;
        // Negative ordinals are valid integers, just never in range.
        usize::try_from(ordinal).unwrap_or(0)
    };

    if index == 0 || index > row_width {
        return Err(ColumnError::ColumnOutOfRange {
            token: reference.to_string(),
            width: row_width,
        });
    }

    Ok(index)
}

/// Decodes every reference in order. An empty list means "the whole row".
pub fn select_columns<S: AsRef<str>>(
    references: &[S],
    row_width: usize,
) -> Result<Vec<usize>, ColumnError> {
    references
        .iter()
        .map(|reference| decode_column(reference.as_ref(), row_width))
        .collect()
}

/// Returns 0 for any token containing a non `A..=Z` character.
fn letters_to_index(token: &str) -> usize {
    let mut result: usize = 0;
    for byte in token.bytes() {
        if !byte.is_ascii_uppercase() {
            return 0;
        }
        let digit = usize::from(byte - b'A' + 1);
        result = result.saturating_mul(26).saturating_add(digit);
    }
    result
}
