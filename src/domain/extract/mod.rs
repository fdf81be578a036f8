pub mod amenities;
pub mod description;
pub mod house_rules;
pub mod presentation;

use std::sync::Arc;

use serde_json::Value;

use crate::domain::record::{FieldMap, ListingRecord, RecordBuilder};
use crate::error::ExtractError;
use crate::ports::diagnostics::ExtractionLog;

type FieldExtractor = fn(&str, &Value, &dyn ExtractionLog) -> Result<FieldMap, ExtractError>;

/// Extractors in merge order. Later entries overwrite earlier ones on key collision.
const FIELD_EXTRACTORS: [(&str, FieldExtractor); 3] = [
    ("house_rules", house_rules::parse_house_rules),
    ("amenities", amenities::parse_amenities),
    ("description", description::parse_description),
];

/// Turns a raw listing page payload into a [`ListingRecord`].
///
/// Holds no per-listing state, so one instance can be shared across workers.
#[derive(Clone)]
pub struct ListingExtractor {
    log: Arc<dyn ExtractionLog>,
}

impl ListingExtractor {
    pub fn new(log: Arc<dyn ExtractionLog>) -> Self {
        Self { log }
    }

    pub fn locate_presentation<'v>(
        &self,
        document: &'v Value,
        listing_id: &str,
    ) -> Result<&'v Value, ExtractError> {
        presentation::locate_presentation(document, listing_id, self.log.as_ref())
    }

    pub fn parse_house_rules(
        &self,
        listing_id: &str,
        presentation: &Value,
    ) -> Result<FieldMap, ExtractError> {
        house_rules::parse_house_rules(listing_id, presentation, self.log.as_ref())
    }

    pub fn parse_amenities(
        &self,
        listing_id: &str,
        presentation: &Value,
    ) -> Result<FieldMap, ExtractError> {
        amenities::parse_amenities(listing_id, presentation, self.log.as_ref())
    }

    pub fn parse_description(
        &self,
        listing_id: &str,
        presentation: &Value,
    ) -> Result<FieldMap, ExtractError> {
        description::parse_description(listing_id, presentation, self.log.as_ref())
    }

    /// Build the record for one listing.
    ///
    /// Fails only when the presentation object cannot be located. A missing
    /// section leaves that concern's keys out of the record.
    pub fn parse_listing(
        &self,
        document: &Value,
        listing_id: &str,
    ) -> Result<ListingRecord, ExtractError> {
        let presentation = self.locate_presentation(document, listing_id)?;
        let log = self.log.as_ref();

        let mut record = RecordBuilder::new(listing_id);
        for (concern, extract) in FIELD_EXTRACTORS {
            let fields = match extract(listing_id, presentation, log) {
                Ok(fields) => fields,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    log.section_missing(&err, presentation);
                    FieldMap::new()
                }
            };
            log.extracted(listing_id, concern, fields.len());
            record.merge(fields);
        }
        Ok(record.finish())
    }
}
