use common::{Album, AlbumImport, Artist, Catalog};
use serde_json::Value;

/// Appends the imported album to the first artist whose `name` is exactly
/// `import.artist_name`, or to a new artist at the end of the catalog.
/// Existing entries are never reordered, replaced or deduplicated.
pub fn merge_album(catalog: &mut Catalog, import: AlbumImport) -> Album {
    let album = Album::from_import(import.album_title, import.songs);

    let position = catalog
        .artists()
        .iter()
        .position(|artist| accepts_album(artist, &import.artist_name));

    match position {
        Some(index) => push_album(&mut catalog.artists_mut()[index], album.to_value()),
        None => {
            let artist = Artist::new(import.artist_name, album.clone());
            catalog.artists_mut().push(artist.to_value());
        }
    }

    album
}

/// An artist object with this exact name whose `albums` is a list, or
/// absent/null so one can be started.
fn accepts_album(artist: &Value, name: &str) -> bool {
    let object = match artist.as_object() {
        Some(object) => object,
        None => return false,
    };
    if object.get("name").and_then(Value::as_str) != Some(name) {
        return false;
    }
    matches!(object.get("albums"), None | Some(Value::Null) | Some(Value::Array(_)))
}

fn push_album(artist: &mut Value, album: Value) {
    let object = match artist.as_object_mut() {
        Some(object) => object,
        None => return,
    };
    match object.get_mut("albums") {
        Some(Value::Array(albums)) => albums.push(album),
        _ => {
            object.insert("albums".to_string(), Value::Array(vec![album]));
        }
    }
}
