use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

const SHORT_ID_LEN: usize = 8;

/// The persisted root: a bare JSON array of artist objects.
///
/// Entries are kept as raw JSON so records written by other tools, with
/// missing keys or loosely typed values, are written back exactly as read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    artists: Vec<Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artists(&self) -> &[Value] {
        &self.artists
    }

    pub fn artists_mut(&mut self) -> &mut Vec<Value> {
        &mut self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

impl From<Vec<Value>> for Catalog {
    fn from(artists: Vec<Value>) -> Self {
        Self { artists }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub albums: Vec<Album>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub songs: Vec<Song>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub url: String,
    pub cover: String,
    pub artist: String,
    pub artist_name: String,
}

/// One fetched album, normalized and ready to be merged into a [`Catalog`].
/// `songs` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumImport {
    pub artist_name: String,
    pub album_title: String,
    pub songs: Vec<Song>,
}

impl Song {
    pub fn new(title: String, url: String, cover: String, artist: &str) -> Self {
        Self {
            id: short_id(),
            title,
            url,
            cover,
            artist: artist.to_string(),
            artist_name: artist.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "url": self.url,
            "cover": self.cover,
            "artist": self.artist,
            "artistName": self.artist_name,
        })
    }
}

impl Album {
    pub fn from_import(album_title: String, songs: Vec<Song>) -> Self {
        Self {
            id: short_id(),
            title: album_title,
            songs,
        }
    }

    pub fn to_value(&self) -> Value {
        let songs: Vec<Value> = self.songs.iter().map(Song::to_value).collect();
        json!({
            "id": self.id,
            "title": self.title,
            "songs": songs,
        })
    }
}

impl Artist {
    pub fn new(name: String, first_album: Album) -> Self {
        Self {
            id: short_id(),
            name,
            albums: vec![first_album],
        }
    }

    pub fn to_value(&self) -> Value {
        let albums: Vec<Value> = self.albums.iter().map(Album::to_value).collect();
        json!({
            "id": self.id,
            "name": self.name,
            "albums": albums,
        })
    }
}

/// Random 8-char lowercase hex token. Not checked for collisions.
pub fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SHORT_ID_LEN);
    id
}
