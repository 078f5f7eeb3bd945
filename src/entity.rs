//! Shared construction, serialization, and identity behavior for every
//! domain entity.
//!
//! Entities are plain serde structs built from key-normalized JSON. The
//! [`Entity`] trait layers the API's lenient construction rules on top of
//! serde: absent/invalid shapes collapse to `None` (or an empty list for
//! list positions), unknown fields are dropped, and missing fields take
//! type-appropriate defaults.

use crate::normalize::camelize_value;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Whether a value is a non-empty JSON object — the only shape an entity
/// can be built from.
pub fn is_object_shaped(value: &Value) -> bool {
    value.as_object().is_some_and(|map| !map.is_empty())
}

/// Whether a value is a non-empty array consisting solely of objects.
pub fn is_array_of_objects_shaped(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_object))
}

/// Base contract for all domain entities.
pub trait Entity: Serialize + DeserializeOwned {
    /// Build an entity from a key-normalized JSON value.
    ///
    /// Returns `None` for null, non-object, or empty-object input, and for
    /// objects that fail to decode (logged at debug level). Fields present
    /// in the input but not declared on the type are silently dropped, and
    /// explicit nulls fall back to the field's default.
    fn from_value(value: &Value) -> Option<Self> {
        if !is_object_shaped(value) {
            return None;
        }

        let map: serde_json::Map<String, Value> = value
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        match serde_json::from_value(Value::Object(map)) {
            Ok(entity) => Some(entity),
            Err(err) => {
                log::debug!(
                    "failed to decode {}: {err}",
                    std::any::type_name::<Self>()
                );
                None
            }
        }
    }

    /// Build a list of entities, dropping elements that decode to absent.
    ///
    /// Anything other than a non-empty array of objects yields an empty list.
    fn from_list(value: &Value) -> Vec<Self> {
        if !is_array_of_objects_shaped(value) {
            return Vec::new();
        }

        value
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(Self::from_value)
            .collect()
    }

    /// Recursively serialize the entity into a plain JSON map.
    ///
    /// With `for_wire` set, every key is re-expanded into the wire's
    /// camelCase convention for use as a request payload; otherwise keys
    /// stay in the canonical snake_case form, reserved-name escapes
    /// included.
    fn to_plain_map(&self, for_wire: bool) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if for_wire {
            camelize_value(&mut value);
        }
        value
    }
}

/// Defines identity-tuple equality and hashing for an entity type.
///
/// Only the listed fields participate in `PartialEq`/`Eq`/`Hash`; two
/// instances differing in any other field still compare equal. Instances of
/// different concrete types are never comparable at all.
macro_rules! entity_identity {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $(self.$field == other.$field)&&+
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $(self.$field.hash(state);)+
            }
        }
    };
}

pub(crate) use entity_identity;

/// Deserialize a nested entity leniently: any shape that does not produce
/// an entity becomes `None` instead of failing the parent.
pub(crate) fn entity_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Entity,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::from_value(&value))
}

/// Deserialize a nested entity list leniently: absent, null, or malformed
/// input becomes an empty list, and undecodable elements are dropped.
pub(crate) fn entity_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Entity,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::from_list(&value))
}

/// Deserialize a string-backed enum leniently: an unrecognized value is
/// stored as `None` rather than failing construction, so new API enum
/// values do not break older clients.
pub(crate) fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}

/// Missing-key-tolerant field lookup, for picking operation payloads out of
/// a GraphQL result object.
pub(crate) fn field<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(&Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_predicates() {
        assert!(is_object_shaped(&json!({"id": "1"})));
        assert!(!is_object_shaped(&json!({})));
        assert!(!is_object_shaped(&Value::Null));
        assert!(!is_object_shaped(&json!([{"id": "1"}])));

        assert!(is_array_of_objects_shaped(&json!([{"id": "1"}])));
        assert!(!is_array_of_objects_shaped(&json!([])));
        assert!(!is_array_of_objects_shaped(&json!([{"id": "1"}, 42])));
        assert!(!is_array_of_objects_shaped(&json!({"id": "1"})));
    }
}
