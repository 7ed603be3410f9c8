mod archive;
mod identifier;
mod normalize;

pub use archive::{
    ArchiveClient, FetchError, MetadataField, MetadataProvider, RawFile, RawMetadata,
    RawMetadataResponse,
};
pub use identifier::resolve_identifier;
pub use normalize::{album_from_response, normalize, Unusable};

pub const ARCHIVE_BASE_URL: &str = "https://archive.org";
pub const DETAILS_MARKER: &str = "archive.org/details/";
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/150";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
