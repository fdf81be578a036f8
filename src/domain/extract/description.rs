use serde_json::Value;

use crate::domain::path::{get_array, get_str};
use crate::domain::record::{FieldMap, field_key};
use crate::domain::sections::{
    DESCRIPTION_MODAL, Discriminator, count_matching, find_section, sections_of,
};
use crate::error::ExtractError;
use crate::path;
use crate::ports::diagnostics::ExtractionLog;

pub const DESCRIPTION_SUFFIX: &str = "description";

/// Key for the untitled description item (the listing's main blurb).
pub const PLACE_DESCRIPTION_KEY: &str = "place_description";

/// HTML text of each description item, keyed by its title. Later items win
/// when two map to the same key.
pub fn parse_description(
    listing_id: &str,
    presentation: &Value,
    log: &dyn ExtractionLog,
) -> Result<FieldMap, ExtractError> {
    let sections = sections_of(presentation);
    let section = find_section(sections, Discriminator::SectionId, DESCRIPTION_MODAL)
        .ok_or_else(|| ExtractError::SectionNotFound {
            listing_id: listing_id.to_string(),
            section: DESCRIPTION_MODAL.into(),
        })?;
    log.section_found(listing_id, DESCRIPTION_MODAL);
    let matches = count_matching(sections, Discriminator::SectionId, DESCRIPTION_MODAL);
    if matches > 1 {
        log.duplicate_sections(listing_id, DESCRIPTION_MODAL, matches);
    }

    let mut description = FieldMap::new();
    for item in get_array(section, &path!["items"]) {
        let Some(html) = get_str(item, &path!["html", "htmlText"]) else {
            log.item_skipped(listing_id, DESCRIPTION_MODAL, "description item without text", item);
            continue;
        };
        let key = get_str(item, &path!["title"]).map_or_else(
            || PLACE_DESCRIPTION_KEY.to_string(),
            |title| field_key(title, DESCRIPTION_SUFFIX),
        );
        description.insert(key, Value::String(html.to_string()));
    }
    Ok(description)
}
