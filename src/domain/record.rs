use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::normalize::normalize_in_place;

/// Flat output of one extractor: output key to string or list of strings.
pub type FieldMap = Map<String, Value>;

pub const LISTING_ID_KEY: &str = "listing_id";

/// Turn a section or item title into an output key: lower-case, whitespace
/// replaced by `_`, then `suffix` appended (`"House rules"` -> `house_rules_house_rule`).
pub fn field_key(title: &str, suffix: &str) -> String {
    let mut key: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    key.push('_');
    key.push_str(suffix);
    key
}

/// Collects extractor output for one listing until it is turned into a
/// [`ListingRecord`].
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    fields: FieldMap,
}

impl RecordBuilder {
    pub fn new(listing_id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(LISTING_ID_KEY.into(), Value::String(listing_id.to_string()));
        Self { fields }
    }

    /// Merge extractor output. A key already present is overwritten in place.
    pub fn merge(&mut self, extracted: FieldMap) {
        self.fields.extend(extracted);
    }

    /// Normalize line breaks across every value and seal the record.
    #[must_use]
    pub fn finish(mut self) -> ListingRecord {
        self.fields.values_mut().for_each(normalize_in_place);
        ListingRecord {
            fields: self.fields,
        }
    }
}

/// The flat record written for one listing.
///
/// Always holds `listing_id`; the remaining keys come from the extractors in the
/// order they were merged. Only [`RecordBuilder::finish`] creates one, so every
/// string leaf is already normalized and the record is read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ListingRecord {
    fields: FieldMap,
}

impl ListingRecord {
    pub fn listing_id(&self) -> &str {
        self.fields
            .get(LISTING_ID_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn keys_with_suffix<'a>(&'a self, suffix: &'a str) -> impl Iterator<Item = &'a str> {
        self.keys().filter(move |k| k.ends_with(suffix))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &FieldMap {
        &self.fields
    }

    /// One JSON object followed by `\n`.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(&self.fields)?;
        line.push('\n');
        Ok(line)
    }
}
