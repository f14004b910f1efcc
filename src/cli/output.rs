//! Output formatting for CLI commands

use std::io::{self, Write};

use serde::Serialize;

use crate::storage;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<storage::OutputFormat> for OutputFormat {
    fn from(format: storage::OutputFormat) -> Self {
        match format {
            storage::OutputFormat::Text => OutputFormat::Text,
            storage::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a success message to stdout
    pub fn success(&self, message: &str) {
        if let Some(line) = self.status_line(true, "message", message) {
            println!("{}", line);
        }
    }

    /// Prints an error message to stderr
    pub fn error(&self, message: &str) {
        if let Some(line) = self.status_line(false, "error", message) {
            eprintln!("{}", line);
        }
    }

    /// Renders a status message: plain text, or a `{"success", key}` object
    fn status_line(&self, success: bool, key: &str, message: &str) -> Option<String> {
        match self.format {
            OutputFormat::Text if success => Some(message.to_string()),
            OutputFormat::Text => Some(format!("Error: {}", message)),
            OutputFormat::Json => {
                let mut obj = serde_json::Map::new();
                obj.insert("success".into(), success.into());
                obj.insert(key.into(), message.into());
                serde_json::to_string(&obj).ok()
            }
        }
    }

    /// Prints structured data (pretty JSON for text, compact for json)
    pub fn data<T: Serialize>(&self, data: &T) {
        let rendered = match self.format {
            OutputFormat::Text => serde_json::to_string_pretty(data),
            OutputFormat::Json => serde_json::to_string(data),
        };

        if let Ok(json) = rendered {
            println!("{}", json);
        }
    }

    /// Writes raw bytes to stdout unchanged
    pub fn raw(&self, bytes: &[u8]) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a `[verbose]` line to stderr when `--verbose` is set
    pub fn verbose(&self, message: &str) {
        self.debug(None, message);
    }

    /// Prints a `[verbose:<context>]` line to stderr when `--verbose` is set
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        self.debug(Some(context), message);
    }

    fn debug(&self, context: Option<&str>, message: &str) {
        if !self.verbose {
            return;
        }
        match context {
            Some(ctx) => eprintln!("[verbose:{}] {}", ctx, message),
            None => eprintln!("[verbose] {}", message),
        }
    }
}
