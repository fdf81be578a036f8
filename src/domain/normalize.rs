use serde_json::Value;

/// Token that stands in for a line break so each record stays on one line.
pub const LINE_BREAK_SENTINEL: &str = " %%% ";

/// Replace every line break in string leaves, recursing through arrays and
/// objects. Keys, lengths and non-string leaves are left untouched.
pub fn normalize(mut value: Value) -> Value {
    normalize_in_place(&mut value);
    value
}

pub fn normalize_in_place(value: &mut Value) {
    match value {
        Value::String(text) => {
            if let Some(replaced) = replace_line_breaks(text) {
                *text = replaced;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_in_place),
        Value::Object(map) => map.values_mut().for_each(normalize_in_place),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// `None` when `text` has no line breaks, so untouched strings aren't reallocated.
/// `\r\n` counts as a single break.
fn replace_line_breaks(text: &str) -> Option<String> {
    if !text.contains(['\n', '\r']) {
        return None;
    }
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push_str(LINE_BREAK_SENTINEL);
            }
            '\n' => out.push_str(LINE_BREAK_SENTINEL),
            _ => out.push(ch),
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replaces_breaks_in_nested_values() {
        let value = json!({"key1": "line1\nline2", "key2": ["line3\nline4"]});
        assert_eq!(
            normalize(value),
            json!({"key1": "line1 %%% line2", "key2": ["line3 %%% line4"]})
        );
    }

    #[test]
    fn crlf_is_one_break() {
        assert_eq!(normalize(json!("a\r\nb\rc")), json!("a %%% b %%% c"));
    }

    #[test]
    fn consecutive_breaks_each_get_a_sentinel() {
        assert_eq!(normalize(json!("a\n\nb")), json!("a %%%  %%% b"));
    }

    #[test]
    fn non_strings_pass_through() {
        let value = json!({"n": 3, "b": true, "z": null, "f": 1.5});
        assert_eq!(normalize(value.clone()), value);
    }

    #[test]
    fn deep_nesting_is_reached() {
        let value = json!([[[{"deep": ["x\ny"]}]]]);
        assert_eq!(normalize(value), json!([[[{"deep": ["x %%% y"]}]]]));
    }

    #[test]
    fn already_normalized_is_unchanged() {
        let once = normalize(json!({"t": "a\nb"}));
        assert_eq!(normalize(once.clone()), once);
    }
}
