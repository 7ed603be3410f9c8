use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::ARCHIVE_BASE_URL;

/// Response of `GET /metadata/{identifier}`. Only the parts the importer
/// reads are typed; an unknown identifier comes back as `{}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawMetadataResponse {
    #[serde(default)]
    pub metadata: Option<RawMetadata>,
    #[serde(default)]
    pub files: Vec<RawFile>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawMetadata {
    #[serde(default)]
    pub title: Option<MetadataField>,
    #[serde(default)]
    pub creator: Option<MetadataField>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl RawMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.creator.is_none() && self.other.is_empty()
    }
}

/// Archive metadata values are a string or a list of strings depending on
/// how many were entered for the item.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetadataField {
    Scalar(String),
    List(Vec<String>),
}

impl MetadataField {
    /// The scalar itself, or the first list element.
    pub fn first_or_self(&self) -> Option<&str> {
        match self {
            MetadataField::Scalar(value) => Some(value),
            MetadataField::List(values) => values.first().map(String::as_str),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    Status(u16),
    Decode(serde_json::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(err) => write!(f, "request error: {}", err),
            FetchError::Status(status) => write!(f, "http {}", status),
            FetchError::Decode(err) => write!(f, "decode error: {}", err),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err)
    }
}

pub trait MetadataProvider {
    fn fetch(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<RawMetadataResponse, FetchError>>;
}

#[derive(Clone, Debug)]
pub struct ArchiveClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ArchiveClient {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            base_url: ARCHIVE_BASE_URL.to_string(),
            timeout,
        }
    }

    fn metadata_url(&self, identifier: &str) -> String {
        format!("{}/metadata/{}", self.base_url, url_escape(identifier))
    }
}

impl MetadataProvider for ArchiveClient {
    async fn fetch(&self, identifier: &str) -> Result<RawMetadataResponse, FetchError> {
        let url = self.metadata_url(identifier);
        debug!(url = %url, "Fetching archive metadata");
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn url_escape(input: &str) -> String {
    let mut out = String::new();
    for byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'~' => out.push(*byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
