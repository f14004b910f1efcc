//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | (none) | Save `TestPage`, load it back and print the body |
//! | `save <title> [body]` | Write a page (body from stdin when omitted) |
//! | `load <title>` | Print a page's raw body |
//! | `list` | List page titles |
//! | `exists <title>` | Check whether a page file exists |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! pagefile --verbose load TestPage
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod demo;
mod output;
mod page;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
