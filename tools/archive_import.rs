use std::io;

use library::{
    read_inputs, run_batch, BatchReport, CatalogStore, GitPublisher, ImportConfig,
    DONE_SENTINEL, MANUAL_PUBLISH_HINT,
};
use metadata::ArchiveClient;
use reqwest::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ImportConfig::default();

    println!("{}", "=".repeat(60));
    println!("Archive.org batch importer");
    println!("{}", "=".repeat(60));
    println!("Paste archive.org links or identifiers, one per line.");
    println!("Type {} on its own line to start importing.\n", DONE_SENTINEL);

    let inputs = read_inputs(io::stdin().lock())?;
    if inputs.is_empty() {
        println!("Nothing was entered.");
        return Ok(());
    }
    info!("Collected {} inputs", inputs.len());

    let store = CatalogStore::new(&config.catalog_path);
    let client = Client::builder().user_agent("archive-import/0.1").build()?;
    let archive = ArchiveClient::new(client, config.request_timeout());
    let publisher = GitPublisher::new(&config.catalog_path);

    match run_batch(&inputs, &store, &archive, &publisher, &config).await? {
        BatchReport::NoInput => println!("Nothing was entered."),
        BatchReport::NothingImported => println!("\nNo album was imported."),
        BatchReport::Imported { count, publish } => {
            println!("{}", "=".repeat(60));
            println!(
                "Imported {} albums into {}",
                count,
                store.path().display()
            );
            match publish {
                Ok(()) => println!("Catalog published."),
                Err(err) => {
                    println!("\nThe catalog was saved locally, but publishing failed: {}", err);
                    println!("Publish it manually: {}", MANUAL_PUBLISH_HINT);
                }
            }
        }
    }

    Ok(())
}
