use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Supplies raw listing page payloads.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Every listing id this source can fetch.
    async fn listing_ids(&self) -> Result<Vec<String>>;

    async fn fetch(&self, listing_id: &str) -> Result<Value>;
}
