//! Terminal UI components (progress ticker, colors).

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;
