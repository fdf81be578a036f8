use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{PdpError, Result};
use crate::ports::source::DocumentSource;

/// Reads listing payloads from a directory of `<listing_id>.<extension>` files.
///
/// Each file holds one JSON value per line; the document handed to the
/// extractor is the array of those values, so line one is index `0`.
pub struct JsonlDirectorySource {
    dir: PathBuf,
    extension: String,
}

impl JsonlDirectorySource {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    fn path_for(&self, listing_id: &str) -> PathBuf {
        self.dir.join(format!("{listing_id}.{}", self.extension))
    }

    fn listing_id_of(&self, path: &Path) -> Option<String> {
        if path.extension()?.to_str()? != self.extension {
            return None;
        }
        path.file_stem()?.to_str().map(String::from)
    }
}

#[async_trait]
impl DocumentSource for JsonlDirectorySource {
    async fn listing_ids(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|source| PdpError::DataDir {
                path: self.dir.clone(),
                source,
            })?;

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(id) = self.listing_id_of(&entry.path()) {
                ids.push(id);
            }
        }
        ids.sort();
        debug!(count = ids.len(), dir = %self.dir.display(), "Listed listing documents");
        Ok(ids)
    }

    async fn fetch(&self, listing_id: &str) -> Result<Value> {
        let path = self.path_for(listing_id);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PdpError::Source {
                listing_id: listing_id.to_string(),
                reason: format!("{}: {e}", path.display()),
            })?;
        parse_json_lines(&content).map_err(|e| PdpError::Source {
            listing_id: listing_id.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Parse line-delimited JSON into an array, skipping blank lines.
pub fn parse_json_lines(content: &str) -> serde_json::Result<Value> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str)
        .collect::<serde_json::Result<Vec<Value>>>()
        .map(Value::Array)
}
