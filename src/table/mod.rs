//! CSV tables and per-column translation.

/// Spreadsheet-style column reference decoding.
pub mod column;

/// CSV file reading and writing.
pub mod io;

/// Row-by-row translation over selected columns.
pub mod mapper;

pub use column::{ColumnError, decode_column, select_columns};
pub use io::{Dialect, encode_table, read_table};
pub use mapper::{Row, translate_rows};
