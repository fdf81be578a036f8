use serde_json::Value;

use crate::domain::path::{Step, get};
use crate::error::ExtractError;
use crate::ports::diagnostics::ExtractionLog;

/// Versioned location of the presentation object inside the page payload.
pub const PRESENTATION_PATH: [Step<'static>; 9] = [
    Step::Index(0),
    Step::Key("root > core-guest-spa"),
    Step::Index(1),
    Step::Index(1),
    Step::Key("niobeMinimalClientData"),
    Step::Index(1),
    Step::Index(1),
    Step::Key("data"),
    Step::Key("presentation"),
];

/// Locate the presentation object. Anything other than an object at the end of
/// [`PRESENTATION_PATH`] counts as not found.
pub fn locate_presentation<'v>(
    document: &'v Value,
    listing_id: &str,
    log: &dyn ExtractionLog,
) -> Result<&'v Value, ExtractError> {
    match get(document, &PRESENTATION_PATH) {
        Some(presentation) if presentation.is_object() => Ok(presentation),
        _ => {
            let err = ExtractError::PresentationNotFound {
                listing_id: listing_id.to_string(),
            };
            log.presentation_missing(&err, document);
            Err(err)
        }
    }
}
