//! Kind-tagged wrappers around raw service records.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Model a [`Record`] was returned as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordKind {
    Item,
    Collection,
    Sample,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Item => "Item",
            RecordKind::Collection => "Collection",
            RecordKind::Sample => "Sample",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw attribute map paired with the kind of model it describes.
///
/// Nested objects that name another model (an item's `collection`, say) are
/// lifted out of the attributes and wrapped as associations, one level deep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    kind: RecordKind,
    attributes: Map<String, Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    associations: BTreeMap<String, Record>,
}

impl Record {
    /// Wrap an attribute map without looking at nested objects.
    pub fn new(kind: RecordKind, attributes: Map<String, Value>) -> Self {
        Self {
            kind,
            attributes,
            associations: BTreeMap::new(),
        }
    }

    /// Wrap an item, lifting a nested `collection` and `sample` into
    /// associations.
    pub fn item(mut attributes: Map<String, Value>) -> Self {
        let mut associations = BTreeMap::new();
        for (name, kind) in [
            ("collection", RecordKind::Collection),
            ("sample", RecordKind::Sample),
        ] {
            if matches!(attributes.get(name), Some(Value::Object(_)))
                && let Some(Value::Object(nested)) = attributes.remove(name)
            {
                associations.insert(name.to_string(), Record::new(kind, nested));
            }
        }
        Self {
            kind: RecordKind::Item,
            attributes,
            associations,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Raw attribute value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Numeric `id` attribute.
    pub fn id(&self) -> Option<i64> {
        self.attributes.get("id").and_then(Value::as_i64)
    }

    /// Wrapped nested record by attribute name.
    pub fn association(&self, name: &str) -> Option<&Record> {
        self.associations.get(name)
    }

    pub fn collection(&self) -> Option<&Record> {
        self.association("collection")
    }

    pub fn sample(&self) -> Option<&Record> {
        self.association("sample")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_item_lifts_collection_one_level() {
        let record = Record::item(object(json!({
            "id": 12,
            "location": "M20",
            "collection": {"id": 3, "matrix": [[1]], "collection": {"id": 4}}
        })));

        assert_eq!(record.kind(), RecordKind::Item);
        assert_eq!(record.id(), Some(12));
        assert!(record.get("collection").is_none());

        let collection = record.collection().unwrap();
        assert_eq!(collection.kind(), RecordKind::Collection);
        assert_eq!(collection.id(), Some(3));
        // Only one level is wrapped.
        assert!(collection.collection().is_none());
        assert_eq!(collection.get("collection"), Some(&json!({"id": 4})));
    }

    #[test]
    fn test_item_without_nested_objects() {
        let record = Record::item(object(json!({"id": 1, "collection": null})));
        assert!(record.collection().is_none());
        assert_eq!(record.get("collection"), Some(&Value::Null));
    }

    #[test]
    fn test_item_wraps_sample() {
        let record = Record::item(object(json!({"id": 1, "sample": {"id": 9, "name": "pLAB1"}})));
        let sample = record.sample().unwrap();
        assert_eq!(sample.kind(), RecordKind::Sample);
        assert_eq!(sample.get("name"), Some(&json!("pLAB1")));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(RecordKind::Collection.to_string(), "Collection");
    }
}
