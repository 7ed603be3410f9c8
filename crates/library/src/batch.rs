use metadata::{normalize, resolve_identifier, MetadataProvider};
use tracing::{info, warn};

use crate::catalog::merge_album;
use crate::config::ImportConfig;
use crate::publish::{Publish, PublishError, MANUAL_PUBLISH_HINT};
use crate::store::CatalogStore;
use crate::LibraryError;

#[derive(Debug)]
pub enum BatchReport {
    /// Nothing was supplied; the catalog was not read.
    NoInput,
    /// Every item was skipped; nothing was written or published.
    NothingImported,
    Imported {
        count: usize,
        publish: Result<(), PublishError>,
    },
}

/// Imports every input line in order, then saves and publishes the catalog
/// once. Items that fail to resolve or normalize are skipped; only a failed
/// save is an error.
pub async fn run_batch<P, U>(
    inputs: &[String],
    store: &CatalogStore,
    provider: &P,
    publisher: &U,
    config: &ImportConfig,
) -> Result<BatchReport, LibraryError>
where
    P: MetadataProvider,
    U: Publish,
{
    if inputs.is_empty() {
        warn!("No input supplied");
        return Ok(BatchReport::NoInput);
    }

    let mut catalog = store.load();
    let mut count = 0usize;

    for raw in inputs {
        let identifier = match resolve_identifier(raw) {
            Some(identifier) => identifier,
            None => continue,
        };

        info!(identifier = %identifier, "Processing");
        let import = match normalize(&identifier, provider).await {
            Ok(import) => import,
            Err(reason) => {
                warn!(identifier = %identifier, "Skipping: {}", reason);
                continue;
            }
        };

        let artist_name = import.artist_name.clone();
        let album = merge_album(&mut catalog, import);
        info!(
            "Added {} songs to [{} - {}]",
            album.songs.len(),
            artist_name,
            album.title
        );
        count += 1;

        let delay = config.item_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    if count == 0 {
        warn!("No album was imported; catalog left unchanged");
        return Ok(BatchReport::NothingImported);
    }

    store.save(&catalog)?;
    info!("Saved {} imported albums to {:?}", count, store.path());

    let publish = publisher.publish(count);
    match &publish {
        Ok(()) => info!("Published catalog"),
        Err(err) => warn!(
            "Catalog saved locally but publishing failed: {}. Publish manually: {}",
            err, MANUAL_PUBLISH_HINT
        ),
    }

    Ok(BatchReport::Imported { count, publish })
}
