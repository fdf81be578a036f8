use serde_json::Value;

use crate::domain::path::{get_array, get_str};
use crate::domain::record::{FieldMap, field_key};
use crate::domain::sections::{
    Discriminator, POLICIES_SECTION, count_matching, find_section, sections_of,
};
use crate::error::ExtractError;
use crate::path;
use crate::ports::diagnostics::ExtractionLog;

pub const HOUSE_RULE_SUFFIX: &str = "house_rule";

/// Item whose full text lives in `html.htmlText` rather than `subtitle`.
const ADDITIONAL_RULES: &str = "Additional rules";

/// One `<group>_house_rule` entry per titled group in the Policies section.
///
/// Each item becomes `"title: subtitle"` (or just `title`). The `Additional rules`
/// item also contributes its raw HTML text as an extra entry.
pub fn parse_house_rules(
    listing_id: &str,
    presentation: &Value,
    log: &dyn ExtractionLog,
) -> Result<FieldMap, ExtractError> {
    let sections = sections_of(presentation);
    let section = find_section(sections, Discriminator::TypeName, POLICIES_SECTION).ok_or_else(
        || ExtractError::SectionNotFound {
            listing_id: listing_id.to_string(),
            section: POLICIES_SECTION.into(),
        },
    )?;
    log.section_found(listing_id, POLICIES_SECTION);
    let matches = count_matching(sections, Discriminator::TypeName, POLICIES_SECTION);
    if matches > 1 {
        log.duplicate_sections(listing_id, POLICIES_SECTION, matches);
    }

    let mut rules = FieldMap::new();
    for group in get_array(section, &path!["houseRulesSections"]) {
        let Some(title) = get_str(group, &path!["title"]) else {
            log.malformed(&malformed(listing_id, "house rule group without title"), group);
            continue;
        };
        let items = parse_items(listing_id, group, log);
        rules.insert(field_key(title, HOUSE_RULE_SUFFIX), Value::from(items));
    }
    Ok(rules)
}

fn parse_items(listing_id: &str, group: &Value, log: &dyn ExtractionLog) -> Vec<String> {
    let mut lines = Vec::new();
    for item in get_array(group, &path!["items"]) {
        let Some(title) = get_str(item, &path!["title"]) else {
            log.malformed(&malformed(listing_id, "house rule item without title"), item);
            continue;
        };
        match get_str(item, &path!["subtitle"]) {
            Some(subtitle) => lines.push(format!("{title}: {subtitle}")),
            None => lines.push(title.to_string()),
        }
        if title == ADDITIONAL_RULES
            && let Some(html) = get_str(item, &path!["html", "htmlText"])
        {
            lines.push(html.to_string());
        }
    }
    lines
}

fn malformed(listing_id: &str, reason: &str) -> ExtractError {
    ExtractError::MalformedGroupOrItem {
        listing_id: listing_id.to_string(),
        section: POLICIES_SECTION.into(),
        reason: reason.into(),
    }
}
