//! Subcommand implementations.

/// CSV translation command handler.
pub mod csv;

/// Whole-file text translation handler.
pub mod translate;
