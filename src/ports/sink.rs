use async_trait::async_trait;

use crate::domain::record::ListingRecord;
use crate::error::Result;

/// Persists finished records. Callers serialize access; implementations need
/// no locking of their own.
#[async_trait]
pub trait RecordSink: Send {
    /// Persist one record. `Ok` means the record reached the sink's storage.
    async fn write(&mut self, record: &ListingRecord) -> Result<()>;

    async fn flush(&mut self) -> Result<()>;
}
