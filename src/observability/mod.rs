//! Structured logging for the engine and the replay tool.
//!
//! Everything in the crate logs through `tracing` macros; this module only
//! decides where those events go.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | FileWriter (rotating)
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
