//! Input/output, configuration and error handling

/// Command-line interface and batch rendering
pub mod cli;
/// Generator constants and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// Inbound capture events
pub mod events;
/// PNG export
pub mod image;
/// Logger setup
pub mod logging;
/// Batch progress display
pub mod progress;
