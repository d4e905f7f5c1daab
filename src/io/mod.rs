//! Input/output: CLI, file formats, previews, progress, logging and errors

/// Command-line parsing and batch file processing
pub mod cli;
/// Layout constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG layout previews
pub mod image;
/// Motif and layout JSON exchange
pub mod json;
/// Tracing subscriber setup for the binary
pub mod logging;
/// Progress display for batch runs
pub mod progress;
