mod batch;
mod catalog;
mod config;
mod input;
mod publish;
mod store;

pub use batch::{run_batch, BatchReport};
pub use catalog::merge_album;
pub use config::ImportConfig;
pub use input::{read_inputs, DONE_SENTINEL};
pub use publish::{GitPublisher, Publish, PublishError, PublishStep, MANUAL_PUBLISH_HINT};
pub use store::CatalogStore;

#[derive(Debug)]
pub enum LibraryError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryError::Io(err) => write!(f, "io error: {}", err),
            LibraryError::Json(err) => write!(f, "json error: {}", err),
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::Io(err)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::Json(err)
    }
}
