use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::ExtractError;
use crate::ports::diagnostics::ExtractionLog;

/// Forwards extraction events to `tracing`.
///
/// Offending sub-trees go out at `debug` so schema drift can be diagnosed
/// without flooding the default `info` output with whole documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ExtractionLog for TracingLog {
    fn section_found(&self, listing_id: &str, section: &str) {
        debug!(listing_id, section, "Section found");
    }

    fn duplicate_sections(&self, listing_id: &str, section: &str, count: usize) {
        warn!(listing_id, section, count, "Multiple sections matched, using the first");
    }

    fn section_missing(&self, error: &ExtractError, context: &Value) {
        error!(listing_id = error.listing_id(), error = %error, "Section unavailable");
        debug!(listing_id = error.listing_id(), context = %context, "Searched presentation");
    }

    fn malformed(&self, error: &ExtractError, context: &Value) {
        warn!(listing_id = error.listing_id(), error = %error, "Skipping entry");
        debug!(listing_id = error.listing_id(), entry = %context, "Skipped entry");
    }

    fn item_skipped(&self, listing_id: &str, section: &str, reason: &str, context: &Value) {
        debug!(listing_id, section, reason, entry = %context, "Skipping item");
    }

    fn presentation_missing(&self, error: &ExtractError, document: &Value) {
        error!(listing_id = error.listing_id(), error = %error, "Cannot locate presentation");
        debug!(listing_id = error.listing_id(), document = %document, "Raw document");
    }

    fn extracted(&self, listing_id: &str, concern: &str, field_count: usize) {
        info!(listing_id, concern, field_count, "Extractor finished");
    }
}
