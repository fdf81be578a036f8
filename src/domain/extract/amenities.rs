use serde_json::Value;

use crate::domain::path::{get, get_array, get_str};
use crate::domain::record::{FieldMap, field_key};
use crate::domain::sections::{
    AMENITIES_SECTION, Discriminator, count_matching, find_section, sections_of,
};
use crate::error::ExtractError;
use crate::path;
use crate::ports::diagnostics::ExtractionLog;

pub const AMENITIES_SUFFIX: &str = "amenities";

const GROUPS_FIELD: &str = "seeAllAmenitiesGroups";

/// One `<group>_amenities` list per titled group of the full amenities listing.
/// Amenity order and duplicates are kept as published.
pub fn parse_amenities(
    listing_id: &str,
    presentation: &Value,
    log: &dyn ExtractionLog,
) -> Result<FieldMap, ExtractError> {
    let sections = sections_of(presentation);
    let section = find_section(sections, Discriminator::TypeName, AMENITIES_SECTION)
        .ok_or_else(|| ExtractError::SectionNotFound {
            listing_id: listing_id.to_string(),
            section: AMENITIES_SECTION.into(),
        })?;
    log.section_found(listing_id, AMENITIES_SECTION);
    let matches = count_matching(sections, Discriminator::TypeName, AMENITIES_SECTION);
    if matches > 1 {
        log.duplicate_sections(listing_id, AMENITIES_SECTION, matches);
    }

    if get(section, &path![GROUPS_FIELD]).is_none() {
        return Err(ExtractError::MissingSectionField {
            listing_id: listing_id.to_string(),
            section: AMENITIES_SECTION.into(),
            field: GROUPS_FIELD.into(),
        });
    }

    let mut amenities = FieldMap::new();
    for group in get_array(section, &path![GROUPS_FIELD]) {
        let Some(title) = get_str(group, &path!["title"]) else {
            log.malformed(&malformed(listing_id, "amenity group without title"), group);
            continue;
        };
        let mut titles = Vec::new();
        for amenity in get_array(group, &path!["amenities"]) {
            match get(amenity, &path!["title"]).and_then(Value::as_str) {
                Some(name) => titles.push(name.to_string()),
                None => log.malformed(&malformed(listing_id, "amenity without title"), amenity),
            }
        }
        amenities.insert(field_key(title, AMENITIES_SUFFIX), Value::from(titles));
    }
    Ok(amenities)
}

fn malformed(listing_id: &str, reason: &str) -> ExtractError {
    ExtractError::MalformedGroupOrItem {
        listing_id: listing_id.to_string(),
        section: AMENITIES_SECTION.into(),
        reason: reason.into(),
    }
}
