//! Domain helpers layered on the raw HTTP calls.

mod items;
mod samples;

pub use items::ItemsApi;
pub use samples::SamplesApi;

use serde_json::Value;

use crate::error::Error;

/// Messages from an `errors` field in a service reply.
///
/// Accepts a list, a single string, or a Rails-style `{field: [messages]}`
/// object.
pub(crate) fn service_errors(value: &Value) -> Option<Vec<String>> {
    let errors = value.get("errors")?;
    let messages = match errors {
        Value::Array(list) => list.iter().map(message_text).collect(),
        Value::Object(fields) => fields
            .iter()
            .flat_map(|(field, messages)| match messages {
                Value::Array(list) => list
                    .iter()
                    .map(|m| format!("{} {}", field, message_text(m)))
                    .collect::<Vec<_>>(),
                other => vec![format!("{} {}", field, message_text(other))],
            })
            .collect(),
        Value::Null => return None,
        other => vec![message_text(other)],
    };
    Some(messages)
}

/// Swap an HTTP failure for the service's own error list when its body has one.
pub(crate) fn into_service_error(err: Error) -> Error {
    let errors = err
        .body()
        .and_then(|body| serde_json::from_str::<Value>(body).ok())
        .and_then(|value| service_errors(&value));
    match errors {
        Some(errors) if matches!(err, Error::Http { .. }) => Error::Service(errors),
        _ => err,
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_errors_from_list() {
        let errors = service_errors(&json!({"errors": ["bad sid", 3]})).unwrap();
        assert_eq!(errors, vec!["bad sid", "3"]);
    }

    #[test]
    fn test_service_errors_from_string_and_object() {
        assert_eq!(
            service_errors(&json!({"errors": "nope"})).unwrap(),
            vec!["nope"]
        );
        assert_eq!(
            service_errors(&json!({"errors": {"name": ["is taken"]}})).unwrap(),
            vec!["name is taken"]
        );
    }

    #[test]
    fn test_no_errors_field() {
        assert!(service_errors(&json!({"plasmid": []})).is_none());
        assert!(service_errors(&json!([{"errors": ["x"]}])).is_none());
        assert!(service_errors(&json!({"errors": null})).is_none());
    }

    #[test]
    fn test_into_service_error_reads_http_body() {
        let err = Error::Http {
            status: Some(422),
            body: r#"{"errors":["Sample not found"]}"#.to_string(),
            source: None,
        };
        match into_service_error(err) {
            Error::Service(errors) => assert_eq!(errors, vec!["Sample not found"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_into_service_error_keeps_plain_failures() {
        let err = Error::Http {
            status: Some(500),
            body: "<html>".to_string(),
            source: None,
        };
        assert!(matches!(into_service_error(err), Error::Http { .. }));
        assert!(matches!(
            into_service_error(Error::NotLoggedIn),
            Error::NotLoggedIn
        ));
    }
}
