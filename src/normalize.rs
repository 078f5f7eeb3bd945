//! Key normalization between the wire naming convention and entity field names.
//!
//! The Zvuk API answers with camelCase (and occasionally kebab-case) keys.
//! Every decoded body is rewritten into snake_case before any entity sees it,
//! and serialized back to camelCase when building request payloads.

use serde_json::Value;

/// Rust keywords plus `client`; a normalized key colliding with one of these
/// gets a trailing underscore so it can be used verbatim as a field name.
static RESERVED_NAMES: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "client", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Convert a single camelCase/PascalCase key into snake_case.
///
/// A boundary is inserted before an uppercase letter that follows a lowercase
/// letter or digit, and before the last letter of an uppercase run that is
/// followed by lowercase (`getHTTPResponse` becomes `get_http_response`).
fn camel_to_snake(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map(|n| n.is_lowercase()).unwrap_or(false);
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Normalize a wire key into the canonical snake_case convention.
///
/// Idempotent: a key already in canonical form is returned unchanged.
pub fn normalize_key(key: &str) -> String {
    let mut key = camel_to_snake(&key.replace('-', "_"));

    if RESERVED_NAMES.contains(&key.as_str()) {
        key.push('_');
    }

    if key.starts_with(|c: char| c.is_ascii_digit()) {
        key.insert(0, '_');
    }

    key
}

/// Recursively rewrite every object key in a decoded JSON tree.
///
/// Arrays and scalars pass through unchanged; only object keys are touched.
pub fn normalize_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let entries: Vec<(String, Value)> = std::mem::take(map)
                .into_iter()
                .map(|(k, mut v)| {
                    normalize_value(&mut v);
                    (normalize_key(&k), v)
                })
                .collect();
            map.extend(entries);
        }
        Value::Array(items) => {
            for item in items {
                normalize_value(item);
            }
        }
        _ => {}
    }
}

/// Re-expand a canonical snake_case key into the wire camelCase convention.
///
/// The trailing escape underscore of reserved-name keys is dropped, so
/// `type_` round-trips back to `type`.
pub fn camelize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in key.split('_').filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Recursively rewrite every object key into camelCase, for request payloads.
pub fn camelize_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let entries: Vec<(String, Value)> = std::mem::take(map)
                .into_iter()
                .map(|(k, mut v)| {
                    camelize_value(&mut v);
                    (camelize_key(&k), v)
                })
                .collect();
            map.extend(entries);
        }
        Value::Array(items) => {
            for item in items {
                camelize_value(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn camel_case_keys() {
        assert_eq!(normalize_key("searchSessionId"), "search_session_id");
        assert_eq!(normalize_key("quickSearch"), "quick_search");
        assert_eq!(normalize_key("collectionItemData"), "collection_item_data");
        assert_eq!(normalize_key("hasFlac"), "has_flac");
    }

    #[test]
    fn pascal_case_and_acronyms() {
        assert_eq!(normalize_key("SearchTitle"), "search_title");
        assert_eq!(normalize_key("getHTTPResponse"), "get_http_response");
        assert_eq!(normalize_key("HTMLBody"), "html_body");
    }

    #[test]
    fn already_snake_case_is_unchanged() {
        assert_eq!(normalize_key("search_session_id"), "search_session_id");
        assert_eq!(normalize_key("id"), "id");
    }

    #[test]
    fn idempotent() {
        for key in ["searchSessionId", "type", "palette-bottom", "3dCover", "__typename"] {
            let once = normalize_key(key);
            assert_eq!(normalize_key(&once), once, "key {key:?} not idempotent");
        }
    }

    #[test]
    fn hyphens_become_underscores() {
        assert_eq!(normalize_key("palette-bottom"), "palette_bottom");
    }

    #[test]
    fn reserved_names_are_escaped() {
        assert_eq!(normalize_key("type"), "type_");
        assert_eq!(normalize_key("client"), "client_");
        assert_eq!(normalize_key("match"), "match_");
    }

    #[test]
    fn leading_digit_gets_underscore() {
        assert_eq!(normalize_key("3dCover"), "_3d_cover");
    }

    #[test]
    fn camelize_round_trip() {
        assert_eq!(camelize_key("search_session_id"), "searchSessionId");
        assert_eq!(camelize_key("type_"), "type");
        assert_eq!(camelize_key("id"), "id");
    }

    #[test]
    fn nested_objects_are_rewritten() {
        let mut value = json!({
            "searchSessionId": "abc",
            "content": [{"__typename": "Track", "hasFlac": true, "type": "album"}],
        });
        normalize_value(&mut value);
        assert_eq!(
            value,
            json!({
                "search_session_id": "abc",
                "content": [{"__typename": "Track", "has_flac": true, "type_": "album"}],
            })
        );
    }

    #[test]
    fn scalars_pass_through() {
        let mut value = json!(["someKey", 42, null]);
        let expected = value.clone();
        normalize_value(&mut value);
        assert_eq!(value, expected);
    }
}
