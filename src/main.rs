use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkfeed::cli::{Cli, Commands};
use linkfeed::config::Config;
use linkfeed::domain::MergeOutcome;
use linkfeed::errors::LinkfeedResult;
use linkfeed::fetch::HttpFetcher;
use linkfeed::rules::HostRuleTable;
use linkfeed::services::{FeedService, LinkService};
use linkfeed::storage::XmlFeedStore;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("linkfeed=warn"),
                1 => EnvFilter::new("linkfeed=info,warn"),
                _ => EnvFilter::new("linkfeed=debug,info"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> LinkfeedResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    let feed_service = FeedService::new(
        XmlFeedStore::new(&config.feed_path),
        config.channel.clone(),
    );

    match cli.command {
        Commands::Add { url, dry_run } => cmd_add(&url, dry_run, &config, &feed_service),
        Commands::List => cmd_list(&feed_service),
    }
}

fn cmd_add(
    url: &str,
    dry_run: bool,
    config: &Config,
    feed_service: &FeedService<XmlFeedStore>,
) -> LinkfeedResult<()> {
    let link_service = LinkService::new(
        HttpFetcher::new(config.fetch_timeout)?,
        HostRuleTable::builtin()?,
    );

    let item = link_service.item_from_url(url)?;

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&item)?);
        if feed_service.would_insert(&item)? {
            println!("Would add to {}", config.feed_path);
        } else {
            println!("Item already exists: {}", item.link);
        }
        return Ok(());
    }

    let link = item.link.clone();
    let json = serde_json::to_string_pretty(&item)?;

    match feed_service.add(item)? {
        MergeOutcome::Inserted(_) => {
            println!("Adding new item: {}", json);
            println!("Added to {}", config.feed_path);
        }
        MergeOutcome::AlreadyPresent => {
            println!("Item already exists: {}", link);
        }
    }

    Ok(())
}

fn cmd_list(feed_service: &FeedService<XmlFeedStore>) -> LinkfeedResult<()> {
    let items = feed_service.list()?;

    if items.is_empty() {
        println!("No items in feed.");
        return Ok(());
    }

    for item in items {
        println!("  {}", item.title);
        println!("    {}", item.link);
        println!("    {}", item.pub_date);
        println!();
    }

    Ok(())
}
