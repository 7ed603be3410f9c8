use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use common::Catalog;
use serde_json::Value;
use tracing::{debug, warn};

use crate::LibraryError;

/// The catalog JSON document on disk.
#[derive(Clone, Debug)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unparsable files load as an empty catalog.
    pub fn load(&self) -> Catalog {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No catalog at {:?}; starting empty", self.path);
                return Catalog::new();
            }
            Err(err) => {
                warn!("Failed to read catalog {:?}: {}; starting empty", self.path, err);
                return Catalog::new();
            }
        };
        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(artists)) => Catalog::from(artists),
            Ok(_) => {
                warn!("Catalog {:?} is not a JSON array; starting empty", self.path);
                Catalog::new()
            }
            Err(err) => {
                warn!("Catalog {:?} is not valid JSON ({}); starting empty", self.path, err);
                Catalog::new()
            }
        }
    }

    /// Overwrites the document in one step: the JSON goes to a sibling temp
    /// file which is then renamed over the target.
    pub fn save(&self, catalog: &Catalog) -> Result<(), LibraryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(catalog)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, contents)?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
