use clap::Parser;

use harvester::cli::{Cli, Commands};
use harvester::config::Config;
use harvester::errors::HarvesterResult;
use harvester::services::{DedupService, IngestService, RecordWriter};
use harvester::sources::SourceRegistry;
use harvester::storage::{Datastore, NotionDatastore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> HarvesterResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    match cli.command {
        Commands::Run { dry_run } => cmd_run(&config, dry_run),
        Commands::Sources => cmd_sources(&config),
        Commands::Inspect => cmd_inspect(&config),
    }
}

fn cmd_run(config: &Config, dry_run: bool) -> HarvesterResult<()> {
    println!(
        "Harvest started at {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let registry = SourceRegistry::from_config(config);
    let items = registry.fetch_all();
    println!("Found total {} items.\n", items.len());

    let store = NotionDatastore::new(&config.notion_token)?;
    let dedup = DedupService::new(
        store.clone(),
        config.database_id.clone(),
        config.dedup_window,
    );
    let writer = RecordWriter::new(store, config.database_id.clone(), config.overrides.clone());
    let service = IngestService::new(dedup, writer);

    let summary = service.run(&items, dry_run);

    if dry_run {
        println!(
            "\nDry run complete. Would create {} records ({} duplicates, {} without URL).",
            summary.created, summary.duplicates, summary.skipped_no_url
        );
    } else {
        println!(
            "\nDone. Created {} records ({} duplicates, {} without URL, {} failed).",
            summary.created, summary.duplicates, summary.skipped_no_url, summary.failed
        );
    }

    Ok(())
}

fn cmd_sources(config: &Config) -> HarvesterResult<()> {
    if config.youtube_channel_ids.is_empty()
        && config.tiktok_users.is_empty()
        && config.rss_feeds.is_empty()
    {
        println!("No sources configured.");
        return Ok(());
    }

    println!("Configured sources:\n");

    if !config.youtube_channel_ids.is_empty() {
        if config.youtube_api_key.is_empty() {
            println!("  YouTube (disabled, API key not set)");
        } else {
            println!("  YouTube");
        }
        for channel_id in &config.youtube_channel_ids {
            println!("    {}", channel_id);
        }
        println!();
    }

    if !config.tiktok_users.is_empty() {
        println!("  TikTok");
        for user in &config.tiktok_users {
            println!("    @{}", user.trim_start_matches('@'));
        }
        println!();
    }

    if !config.rss_feeds.is_empty() {
        println!("  RSS");
        for feed in &config.rss_feeds {
            println!("    {}", feed);
        }
        println!();
    }

    Ok(())
}

fn cmd_inspect(config: &Config) -> HarvesterResult<()> {
    let store = NotionDatastore::new(&config.notion_token)?;
    let database = store.retrieve_database(&config.database_id)?;

    println!("Database {}:\n", database.id);

    let mut names: Vec<_> = database.properties.keys().collect();
    names.sort();
    for name in names {
        println!("  {} [{}]", name, database.properties[name].kind);
    }

    Ok(())
}
