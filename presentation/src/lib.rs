//! Presentation layer for house-estimator
//!
//! This crate contains CLI definitions, the terminal view bound to the
//! submission use case, interactive form entry, and output formatters.

pub mod cli;
pub mod output;
pub mod prompt;
pub mod session;
pub mod terminal;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::ReportFormatter;
pub use prompt::FormPrompt;
pub use session::EstimateRepl;
pub use terminal::TerminalView;
