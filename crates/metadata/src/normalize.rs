use common::{AlbumImport, Song};

use crate::archive::{FetchError, MetadataProvider, RawFile, RawMetadataResponse};
use crate::{ARCHIVE_BASE_URL, PLACEHOLDER_COVER_URL, UNKNOWN_ARTIST};

const COVER_SUFFIXES: [&str; 3] = [".jpg", ".png", ".jpeg"];
const AUDIO_SUFFIXES: [&str; 2] = [".flac", ".mp3"];

/// Why an identifier produced nothing to merge.
#[derive(Debug)]
pub enum Unusable {
    Fetch(FetchError),
    NoMetadata,
    NoMedia,
}

impl std::fmt::Display for Unusable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unusable::Fetch(err) => write!(f, "lookup failed: {}", err),
            Unusable::NoMetadata => write!(f, "no album info"),
            Unusable::NoMedia => write!(f, "no FLAC/MP3 found"),
        }
    }
}

impl std::error::Error for Unusable {}

impl From<FetchError> for Unusable {
    fn from(err: FetchError) -> Self {
        Unusable::Fetch(err)
    }
}

/// Fetches one identifier and maps it into an [`AlbumImport`]. A failed
/// lookup is not retried.
pub async fn normalize<P: MetadataProvider>(
    identifier: &str,
    provider: &P,
) -> Result<AlbumImport, Unusable> {
    let response = provider.fetch(identifier).await?;
    album_from_response(identifier, response)
}

pub fn album_from_response(
    identifier: &str,
    response: RawMetadataResponse,
) -> Result<AlbumImport, Unusable> {
    let metadata = match response.metadata {
        Some(metadata) if !metadata.is_empty() => metadata,
        _ => return Err(Unusable::NoMetadata),
    };

    let album_title = metadata
        .title
        .as_ref()
        .and_then(|field| field.first_or_self())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Album {}", identifier));
    let artist_name = metadata
        .creator
        .as_ref()
        .and_then(|field| field.first_or_self())
        .unwrap_or(UNKNOWN_ARTIST)
        .to_string();

    let cover = pick_cover(identifier, &response.files);

    let mut songs = Vec::new();
    for file in &response.files {
        let stem = match strip_any_suffix(&file.name, &AUDIO_SUFFIXES) {
            Some(stem) => stem,
            None => continue,
        };
        let title = file.title.clone().unwrap_or_else(|| stem.to_string());
        songs.push(Song::new(
            title,
            download_url(identifier, &file.name),
            cover.clone(),
            &artist_name,
        ));
    }

    if songs.is_empty() {
        return Err(Unusable::NoMedia);
    }

    Ok(AlbumImport {
        artist_name,
        album_title,
        songs,
    })
}

fn pick_cover(identifier: &str, files: &[RawFile]) -> String {
    for file in files {
        if strip_any_suffix(&file.name, &COVER_SUFFIXES).is_some() {
            return download_url(identifier, &file.name);
        }
    }
    PLACEHOLDER_COVER_URL.to_string()
}

fn download_url(identifier: &str, file_name: &str) -> String {
    format!("{}/download/{}/{}", ARCHIVE_BASE_URL, identifier, file_name)
}

/// Returns `name` without the first suffix in `suffixes` it ends with,
/// compared ignoring ASCII case.
fn strip_any_suffix<'a>(name: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes.iter().find_map(|suffix| {
        let split = name.len().checked_sub(suffix.len())?;
        if !name.is_char_boundary(split) {
            return None;
        }
        let (stem, tail) = name.split_at(split);
        tail.eq_ignore_ascii_case(suffix).then_some(stem)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{album_from_response, normalize, strip_any_suffix, Unusable, AUDIO_SUFFIXES};
    use crate::archive::{FetchError, MetadataProvider, RawMetadataResponse};
    use crate::PLACEHOLDER_COVER_URL;

    fn response(raw: &str) -> RawMetadataResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn maps_list_title_and_default_artist() {
        let imp = album_from_response(
            "myAlbum123",
            response(
                r#"{"metadata": {"title": ["A", "B"]},
                    "files": [{"name": "cover.png"}, {"name": "01.mp3"}]}"#,
            ),
        )
        .unwrap();
        assert_eq!(imp.artist_name, "Unknown Artist");
        assert_eq!(imp.album_title, "A");
        assert_eq!(imp.songs.len(), 1);
        let song = &imp.songs[0];
        assert_eq!(song.title, "01");
        assert_eq!(song.url, "https://archive.org/download/myAlbum123/01.mp3");
        assert_eq!(song.cover, "https://archive.org/download/myAlbum123/cover.png");
        assert_eq!(song.artist, "Unknown Artist");
        assert_eq!(song.artist_name, "Unknown Artist");
        assert_eq!(song.id.len(), 8);
    }

    #[test]
    fn missing_title_falls_back_to_identifier() {
        let imp = album_from_response(
            "live77",
            response(r#"{"metadata": {"creator": ["Band", "Other"]}, "files": [{"name": "a.flac"}]}"#),
        )
        .unwrap();
        assert_eq!(imp.album_title, "Album live77");
        assert_eq!(imp.artist_name, "Band");
    }

    #[test]
    fn file_title_wins_over_file_name() {
        let imp = album_from_response(
            "x",
            response(
                r#"{"metadata": {"title": "T"},
                    "files": [{"name": "02.FLAC", "title": "Second"}, {"name": "03.Mp3"}]}"#,
            ),
        )
        .unwrap();
        assert_eq!(imp.songs[0].title, "Second");
        assert_eq!(imp.songs[1].title, "03");
    }

    #[test]
    fn keeps_listed_order_and_shares_first_cover() {
        let imp = album_from_response(
            "x",
            response(
                r#"{"metadata": {"title": "T"},
                    "files": [
                        {"name": "b.mp3"},
                        {"name": "front.JPG"},
                        {"name": "a.flac"},
                        {"name": "back.jpeg"}
                    ]}"#,
            ),
        )
        .unwrap();
        let titles: Vec<&str> = imp.songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
        assert!(imp
            .songs
            .iter()
            .all(|s| s.cover == "https://archive.org/download/x/front.JPG"));
        assert_ne!(imp.songs[0].id, imp.songs[1].id);
    }

    #[test]
    fn placeholder_cover_when_no_image() {
        let imp = album_from_response(
            "x",
            response(r#"{"metadata": {"title": "T"}, "files": [{"name": "a.mp3"}]}"#),
        )
        .unwrap();
        assert_eq!(imp.songs[0].cover, PLACEHOLDER_COVER_URL);
    }

    #[test]
    fn only_matched_suffix_is_stripped() {
        assert_eq!(strip_any_suffix("mix.flac.mp3", &AUDIO_SUFFIXES), Some("mix.flac"));
        assert_eq!(strip_any_suffix("notes.txt", &AUDIO_SUFFIXES), None);
        assert_eq!(strip_any_suffix("mp3", &AUDIO_SUFFIXES), None);
    }

    #[test]
    fn no_media_is_unusable() {
        let err = album_from_response(
            "x",
            response(
                r#"{"metadata": {"title": "T"},
                    "files": [{"name": "x_meta.xml"}, {"name": "info.txt"}]}"#,
            ),
        )
        .unwrap_err();
        assert!(matches!(err, Unusable::NoMedia));
    }

    #[test]
    fn empty_metadata_is_unusable() {
        let err = album_from_response("x", response(r#"{"metadata": {}, "files": [{"name": "a.mp3"}]}"#))
            .unwrap_err();
        assert!(matches!(err, Unusable::NoMetadata));
        let err = album_from_response("x", response("{}")).unwrap_err();
        assert!(matches!(err, Unusable::NoMetadata));
    }

    struct FailingProvider {
        calls: Cell<usize>,
    }

    impl MetadataProvider for FailingProvider {
        async fn fetch(&self, _identifier: &str) -> Result<RawMetadataResponse, FetchError> {
            self.calls.set(self.calls.get() + 1);
            Err(FetchError::Status(503))
        }
    }

    #[tokio::test]
    async fn provider_failure_is_unusable_without_retry() {
        let provider = FailingProvider { calls: Cell::new(0) };
        let err = normalize("x", &provider).await.unwrap_err();
        assert!(matches!(err, Unusable::Fetch(FetchError::Status(503))));
        assert_eq!(provider.calls.get(), 1);
    }
}
