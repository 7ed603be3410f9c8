use std::time::Duration;

pub const DEFAULT_CATALOG_PATH: &str = "public/database.json";

/// Fixed parameters of an import run.
#[derive(Clone, Debug)]
pub struct ImportConfig {
    pub catalog_path: String,
    pub request_timeout_secs: u64,
    pub item_delay_secs: u64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            request_timeout_secs: 10,
            item_delay_secs: 1,
        }
    }
}

impl ImportConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn item_delay(&self) -> Duration {
        Duration::from_secs(self.item_delay_secs)
    }
}
