use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "linkfeed")]
#[command(about = "Turn arbitrary URLs into deduplicated RSS feed entries")]
#[command(version)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a URL and add it to the feed (skipped if already present)
    Add {
        /// URL to add
        url: String,

        /// Show the item that would be added without writing the feed
        #[arg(long)]
        dry_run: bool,
    },

    /// List the items in the feed, newest first
    List,
}
