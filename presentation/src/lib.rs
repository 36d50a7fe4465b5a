//! Presentation layer for story-tutor
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive spark session.

pub mod cli;
pub mod output;
pub mod progress;
pub mod spark;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ReviewTypeArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use spark::repl::{SparkOutcome, SparkRepl};
