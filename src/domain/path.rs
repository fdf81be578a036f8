use serde_json::Value;

/// One hop of a navigation path: an object key or an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Step<'a> {
    fn from(key: &'a str) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step<'_> {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

/// Build a `[Step]` array from keys and indices: `path!["data", 1, "presentation"]`.
#[macro_export]
macro_rules! path {
    ($($step:expr),* $(,)?) => {
        [$($crate::domain::path::Step::from($step)),*]
    };
}

/// Walk `path` from `doc`, stopping at the first hop that cannot be taken.
///
/// A hop fails when the current value is null, is not a container of the right
/// kind (keys need an object, indices an array), or lacks the key/index.
pub fn get<'v>(doc: &'v Value, path: &[Step<'_>]) -> Option<&'v Value> {
    path.iter().try_fold(doc, |current, step| match (step, current) {
        (Step::Key(key), Value::Object(map)) => map.get(*key),
        (Step::Index(index), Value::Array(items)) => items.get(*index),
        _ => None,
    })
}

/// Like [`get`], returning `default` instead of `None`.
pub fn get_or<'v>(doc: &'v Value, path: &[Step<'_>], default: &'v Value) -> &'v Value {
    get(doc, path).unwrap_or(default)
}

/// Non-empty string at `path`. Empty strings count as absent.
pub fn get_str<'v>(doc: &'v Value, path: &[Step<'_>]) -> Option<&'v str> {
    get(doc, path)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Array at `path`, or an empty slice when absent or not an array.
pub fn get_array<'v>(doc: &'v Value, path: &[Step<'_>]) -> &'v [Value] {
    get(doc, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
