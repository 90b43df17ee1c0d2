//! # CLI
//!
//! The only place that knows about terminal I/O and exit codes. Handlers call
//! the API, then hand the `CmdResult` to `print`.
//!
//! Running `lyricbook` with no subcommand is the same as `lyricbook list`.
//!
//! - `setup`: clap argument definitions
//! - `commands`: context wiring and per-command handlers
//! - `print`: output formatting
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;
