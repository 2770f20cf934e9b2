//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt::layer().json() → RotatingFile → nodelist.log
//! ```
//!
//! The pane has no terminal of its own to log to, so events are written as
//! JSON lines under the plugin data directory. The file rotates at 10 MiB
//! and keeps three numbered backups.
//!
//! # Configuration
//!
//! The filter directive comes from the `log_level` plugin option and defaults
//! to `"info"`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - [`file_writer`]: size-rotating log file

pub mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::init_tracing;
