use serde_json::Value;

use crate::domain::path::{self, get, get_array};
use crate::path;

pub const POLICIES_SECTION: &str = "PoliciesSection";
pub const AMENITIES_SECTION: &str = "AmenitiesSection";
pub const DESCRIPTION_MODAL: &str = "DESCRIPTION_MODAL";

static EMPTY_BODY: Value = Value::Null;

/// Where a section wrapper keeps its discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discriminator {
    /// `wrapper.section.__typename`, e.g. `PoliciesSection`.
    TypeName,
    /// `wrapper.sectionId`, e.g. `DESCRIPTION_MODAL`.
    SectionId,
}

impl Discriminator {
    fn read(self, wrapper: &Value) -> Option<&str> {
        let found = match self {
            Self::TypeName => get(wrapper, &path!["section", "__typename"]),
            Self::SectionId => get(wrapper, &path!["sectionId"]),
        };
        found.and_then(Value::as_str)
    }
}

/// The `sections` list of a presentation object; empty when the path is absent.
pub fn sections_of(presentation: &Value) -> &[Value] {
    get_array(
        presentation,
        &path!["stayProductDetailPage", "sections", "sections"],
    )
}

/// Body (`wrapper.section`) of the first wrapper whose discriminator equals `value`.
///
/// A `SectionId` match without a body yields `Null`, so callers see an empty
/// section rather than a miss. For `TypeName` the body always exists since the
/// discriminator lives inside it.
pub fn find_section<'v>(
    sections: &'v [Value],
    discriminator: Discriminator,
    value: &str,
) -> Option<&'v Value> {
    sections
        .iter()
        .find(|wrapper| discriminator.read(wrapper) == Some(value))
        .map(|wrapper| path::get_or(wrapper, &path!["section"], &EMPTY_BODY))
}

/// Number of wrappers matching `value`. Used to report ignored duplicates.
pub fn count_matching(sections: &[Value], discriminator: Discriminator, value: &str) -> usize {
    sections
        .iter()
        .filter(|wrapper| discriminator.read(wrapper) == Some(value))
        .count()
}
