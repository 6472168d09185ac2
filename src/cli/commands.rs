use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "harvester")]
#[command(about = "Multi-source content harvester with Notion database ingestion")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all sources, dedup against the destination, and create records
    Run {
        /// Dry run - don't create records, just show what would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// List the sources enabled by the current configuration
    Sources,

    /// Fetch and print the destination database schema
    Inspect,
}
