//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{demo, page};
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "pagefile")]
#[command(author, version, about = "Save and load titled pages as plain files")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory page files live in (defaults to pagefile.toml, then ".")
    #[arg(long, short = 'd', global = true)]
    pub dir: Option<PathBuf>,

    /// Runs the save/load demo when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save a page, replacing any existing page with the same title
    Save {
        /// Page title (file stem)
        title: String,

        /// Page body (read from stdin when omitted)
        body: Option<String>,
    },

    /// Print a page's body
    Load {
        /// Page title (file stem)
        title: String,
    },

    /// List saved page titles
    List,

    /// Check whether a page exists
    Exists {
        /// Page title (file stem)
        title: String,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format, cli.verbose);

    let dir = config.page_dir(cli.dir.as_deref());
    output.verbose(&format!("Page directory: {}", dir.display()));

    match cli.command {
        None => demo::run(&output, &dir)?,

        Some(Commands::Save { title, body }) => page::save(&output, &dir, &title, body)?,
        Some(Commands::Load { title }) => page::load(&output, &dir, &title)?,
        Some(Commands::List) => page::list(&output, &dir)?,
        Some(Commands::Exists { title }) => page::exists(&output, &dir, &title)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
