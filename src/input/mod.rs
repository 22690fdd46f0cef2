//! Plain-text input files.

mod reader;

pub use reader::InputReader;
