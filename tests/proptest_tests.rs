use proptest::prelude::*;
use serde_json::{Map, Value, json};

use pdp_extract::domain::normalize::{LINE_BREAK_SENTINEL, normalize};
use pdp_extract::domain::path::{Step, get, get_or};
use pdp_extract::domain::sections::{Discriminator, find_section};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_text() -> impl Strategy<Value = String> {
    "[a-z \\n\\r%]{0,24}"
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        arb_text().prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// A document plus a path that exists in it, built top-down.
fn arb_doc_with_path() -> impl Strategy<Value = (Value, Vec<PathStep>, Value)> {
    (
        arb_json(),
        prop::collection::vec(prop_oneof![
            "[a-z]{1,6}".prop_map(PathStep::Key),
            (0..4_usize).prop_map(PathStep::Index),
        ], 0..6),
    )
        .prop_map(|(leaf, steps)| {
            let mut doc = leaf.clone();
            for step in steps.iter().rev() {
                doc = match step {
                    PathStep::Key(key) => {
                        let mut map = Map::new();
                        map.insert(key.clone(), doc);
                        Value::Object(map)
                    }
                    PathStep::Index(index) => {
                        let mut items = vec![Value::Null; *index];
                        items.push(doc);
                        Value::Array(items)
                    }
                };
            }
            (doc, steps, leaf)
        })
}

#[derive(Debug, Clone)]
enum PathStep {
    Key(String),
    Index(usize),
}

fn as_steps(steps: &[PathStep]) -> Vec<Step<'_>> {
    steps
        .iter()
        .map(|step| match step {
            PathStep::Key(key) => Step::Key(key),
            PathStep::Index(index) => Step::Index(*index),
        })
        .collect()
}

fn same_shape(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| same_shape(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|other| same_shape(v, other)))
        }
        (Value::String(_), Value::String(_)) => true,
        _ => a == b,
    }
}

fn has_line_break(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains(['\n', '\r']),
        Value::Array(items) => items.iter().any(has_line_break),
        Value::Object(map) => map.values().any(has_line_break),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Safe path accessor
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_complete_path_reaches_leaf((doc, steps, leaf) in arb_doc_with_path()) {
        let path = as_steps(&steps);
        prop_assert_eq!(get(&doc, &path), Some(&leaf));
    }

    #[test]
    fn prop_broken_path_returns_default(
        (doc, steps, _leaf) in arb_doc_with_path(),
        missing in "[A-Z]{3}",
    ) {
        // Uppercase keys never appear in generated documents
        let mut path = as_steps(&steps);
        path.push(Step::Key(&missing));
        let fallback = json!("fallback");
        prop_assert_eq!(get_or(&doc, &path, &fallback), &fallback);
    }

    #[test]
    fn prop_never_panics_on_arbitrary_input(
        doc in arb_json(),
        keys in prop::collection::vec("[a-z]{1,3}", 0..5),
        index in 0..8_usize,
    ) {
        let mut path: Vec<Step<'_>> = keys.iter().map(|k| Step::Key(k)).collect();
        path.push(Step::Index(index));
        let _ = get(&doc, &path);
    }
}

// ---------------------------------------------------------------------------
// Text normalizer
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_normalize_idempotent(value in arb_json()) {
        let once = normalize(value);
        prop_assert_eq!(normalize(once.clone()), once);
    }

    #[test]
    fn prop_normalize_preserves_shape(value in arb_json()) {
        let normalized = normalize(value.clone());
        prop_assert!(same_shape(&value, &normalized));
    }

    #[test]
    fn prop_normalize_removes_all_breaks(value in arb_json()) {
        prop_assert!(!has_line_break(&normalize(value)));
    }

    #[test]
    fn prop_break_free_strings_untouched(text in "[a-z %]{0,32}") {
        prop_assert_eq!(normalize(Value::String(text.clone())), Value::String(text));
    }

    #[test]
    fn prop_each_newline_becomes_sentinel(parts in prop::collection::vec("[a-z]{0,5}", 1..6)) {
        let joined = parts.join("\n");
        let expected = parts.join(LINE_BREAK_SENTINEL);
        prop_assert_eq!(normalize(Value::String(joined)), Value::String(expected));
    }
}

// ---------------------------------------------------------------------------
// Section finder
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_first_match_wins(
        kinds in prop::collection::vec(
            prop_oneof![Just("PoliciesSection"), Just("AmenitiesSection"), Just("TitleSection")],
            0..12,
        ),
    ) {
        let sections: Vec<Value> = kinds
            .iter()
            .enumerate()
            .map(|(position, kind)| json!({"section": {"__typename": kind, "position": position}}))
            .collect();
        let found = find_section(&sections, Discriminator::TypeName, "AmenitiesSection");
        let expected = kinds.iter().position(|kind| *kind == "AmenitiesSection");
        match expected {
            Some(position) => prop_assert_eq!(
                found.map(|body| body["position"].clone()),
                Some(json!(position))
            ),
            None => prop_assert!(found.is_none()),
        }
    }

    #[test]
    fn prop_finder_never_panics(sections in prop::collection::vec(arb_json(), 0..8)) {
        let _ = find_section(&sections, Discriminator::TypeName, "PoliciesSection");
        let _ = find_section(&sections, Discriminator::SectionId, "DESCRIPTION_MODAL");
    }
}
