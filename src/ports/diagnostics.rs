use serde_json::Value;

use crate::error::ExtractError;

/// Logging capability handed to the extractors.
///
/// Extraction code never touches global logger state; whoever builds the
/// [`ListingExtractor`](crate::domain::extract::ListingExtractor) decides where
/// these events go.
pub trait ExtractionLog: Send + Sync {
    fn section_found(&self, listing_id: &str, section: &str);

    /// More than one section matched; only the first is used.
    fn duplicate_sections(&self, listing_id: &str, section: &str, count: usize);

    /// A section (or a required field of it) is absent. `context` is the
    /// sub-tree that was searched.
    fn section_missing(&self, error: &ExtractError, context: &Value);

    /// A group or item was skipped. `context` is the offending entry.
    fn malformed(&self, error: &ExtractError, context: &Value);

    /// A well-formed item carried nothing to extract (e.g. a description item
    /// without text).
    fn item_skipped(&self, listing_id: &str, section: &str, reason: &str, context: &Value);

    /// The listing cannot produce a record. `document` is the raw input.
    fn presentation_missing(&self, error: &ExtractError, document: &Value);

    /// One extractor finished with `field_count` output keys.
    fn extracted(&self, listing_id: &str, concern: &str, field_count: usize);
}
