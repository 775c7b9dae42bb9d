//! Input/output operations and error handling
//!
//! This module contains the pipeline's outward-facing functionality:
//! - Command-line parsing and orchestration
//! - Source image discovery and decoding
//! - Canvas persistence
//! - Progress display and error types

/// Command-line interface and pipeline orchestration
pub mod cli;
/// Default values and safety limits
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Output path resolution and canvas persistence
pub mod output;
/// Progress display for the pipeline phases
pub mod progress;
/// Recursive discovery and decoding of source images
pub mod sources;
