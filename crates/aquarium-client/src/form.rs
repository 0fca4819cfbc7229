//! Flattening of POST payloads into form fields.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Form field carrying the session's authentication key.
pub(crate) const AUTHENTICATION_KEY_FIELD: &str = "authentication_key";

/// Serialize `data` into `(name, value)` pairs and merge in the
/// authentication key.
///
/// `data` must serialize to a JSON object (or unit) whose values are scalars.
/// `null` becomes an empty field; nested arrays or objects are rejected.
pub(crate) fn form_fields<B>(
    data: &B,
    authentication_key: Option<&str>,
) -> Result<Vec<(String, String)>>
where
    B: Serialize + ?Sized,
{
    let value = serde_json::to_value(data).map_err(|e| Error::InvalidForm(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => serde_json::Map::new(),
        other => {
            return Err(Error::InvalidForm(format!(
                "expected an object of fields, got {}",
                other
            )));
        }
    };

    let mut fields = Vec::with_capacity(map.len() + 1);
    for (name, value) in map {
        if name == AUTHENTICATION_KEY_FIELD {
            continue;
        }
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::InvalidForm(format!(
                    "field '{}' is not a scalar value",
                    name
                )));
            }
        };
        fields.push((name, value));
    }

    if let Some(key) = authentication_key {
        fields.push((AUTHENTICATION_KEY_FIELD.to_string(), key.to_string()));
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_are_stringified_and_key_appended() {
        let fields = form_fields(&json!({"sid": 5, "oid": "7", "flag": true}), Some("k")).unwrap();
        assert_eq!(
            fields.last(),
            Some(&("authentication_key".to_string(), "k".to_string()))
        );

        let mut fields = fields;
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("authentication_key".to_string(), "k".to_string()),
                ("flag".to_string(), "true".to_string()),
                ("oid".to_string(), "7".to_string()),
                ("sid".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_session_key_overrides_caller_field() {
        let fields = form_fields(&json!({"authentication_key": "spoof"}), Some("real")).unwrap();
        assert_eq!(
            fields,
            vec![("authentication_key".to_string(), "real".to_string())]
        );
    }

    #[test]
    fn test_missing_key_is_omitted() {
        let fields = form_fields(&json!({"a": null}), None).unwrap();
        assert_eq!(fields, vec![("a".to_string(), String::new())]);
    }

    #[test]
    fn test_unit_payload_yields_only_key() {
        let fields = form_fields(&(), Some("k")).unwrap();
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_nested_values_rejected() {
        let err = form_fields(&json!({"a": [1, 2]}), None).unwrap_err();
        assert!(matches!(err, Error::InvalidForm(_)));

        let err = form_fields(&json!(["a"]), None).unwrap_err();
        assert!(matches!(err, Error::InvalidForm(_)));
    }
}
