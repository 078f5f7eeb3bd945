//! Uniform view over the two response shapes the API produces.
//!
//! GraphQL endpoints answer `{"data": {...}, "errors": [...]}`; the tiny REST
//! endpoints answer either `{"result": {...}}` or a bare object. Both are
//! folded into an [`Envelope`] with a single `result`/`errors` contract.

use serde_json::Value;

/// A decoded API response body, after key normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    /// The payload: the `data` object of a GraphQL response, or the whole
    /// body for REST-shaped responses.
    pub result: Option<Value>,
    /// GraphQL-level errors, empty for REST-shaped responses.
    pub errors: Vec<Value>,
}

impl Envelope {
    /// Build an envelope from a decoded JSON value.
    ///
    /// Returns `None` when the value is null, not an object, or an empty
    /// object — there is nothing to envelope.
    pub fn from_value(value: &Value) -> Option<Envelope> {
        let map = value.as_object()?;

        // GraphQL shape: {"data": {...}, "errors": [...]}
        if map.contains_key("data") {
            return Some(Envelope {
                result: map.get("data").filter(|v| !v.is_null()).cloned(),
                errors: map
                    .get("errors")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default(),
            });
        }

        if map.is_empty() {
            return None;
        }

        // REST shape: the whole body is the result.
        Some(Envelope {
            result: Some(value.clone()),
            errors: Vec::new(),
        })
    }

    /// Whether the response carried at least one GraphQL-level error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The `message` of the first error entry, with a generic fallback.
    pub fn first_error_message(&self) -> String {
        match self.errors.first() {
            Some(error) => error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown GraphQL error")
                .to_string(),
            None => "Unknown error".to_string(),
        }
    }

    /// All error messages, one per error entry.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|error| match error.get("message").and_then(Value::as_str) {
                Some(message) => message.to_string(),
                None => error.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn graphql_shape() {
        let value = json!({"data": {"get_tracks": []}, "errors": [{"message": "boom"}]});
        let envelope = Envelope::from_value(&value).unwrap();
        assert_eq!(envelope.result, Some(json!({"get_tracks": []})));
        assert!(envelope.has_errors());
        assert_eq!(envelope.first_error_message(), "boom");
    }

    #[test]
    fn graphql_shape_with_null_data() {
        let value = json!({"data": null, "errors": [{"message": "denied"}]});
        let envelope = Envelope::from_value(&value).unwrap();
        assert_eq!(envelope.result, None);
        assert_eq!(envelope.error_messages(), vec!["denied".to_string()]);
    }

    #[test]
    fn rest_shape_keeps_whole_body() {
        let value = json!({"result": {"token": "t"}});
        let envelope = Envelope::from_value(&value).unwrap();
        assert_eq!(envelope.result, Some(value));
        assert!(!envelope.has_errors());
    }

    #[test]
    fn null_and_non_objects_produce_no_envelope() {
        assert_eq!(Envelope::from_value(&Value::Null), None);
        assert_eq!(Envelope::from_value(&json!([1, 2])), None);
        assert_eq!(Envelope::from_value(&json!("text")), None);
        assert_eq!(Envelope::from_value(&json!({})), None);
    }

    #[test]
    fn error_message_fallbacks() {
        let envelope = Envelope::from_value(&json!({"data": null, "errors": [{"code": 1}]})).unwrap();
        assert_eq!(envelope.first_error_message(), "Unknown GraphQL error");

        let empty = Envelope::from_value(&json!({"data": {}})).unwrap();
        assert_eq!(empty.first_error_message(), "Unknown error");
    }
}
