//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Scrape every object page and write the OpenAPI document
//! - `page`: Build the schema of a single page and print it
//! - `init`: Initialize scrapi configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Page(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the scraping commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Site root that page links are resolved against (overrides config file)
    #[arg(long, env = "SCRAPI_BASE_URL")]
    pub base_url: Option<String>,

    /// Read pages from a local mirror directory instead of the network
    #[arg(long, value_name = "DIR")]
    pub from_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file, or `-` for stdout (overrides config file)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Number of pages fetched in parallel (default: one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

#[derive(Debug, Args)]
pub struct PageCommand {
    /// Page URL, or path to a saved HTML file
    pub target: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape all object pages linked from the index and write the OpenAPI document
    Generate(GenerateCommand),
    /// Print the schema built from a single documentation page
    Page(PageCommand),
    /// Initialize a new .scrapirc.json configuration file
    Init,
}
