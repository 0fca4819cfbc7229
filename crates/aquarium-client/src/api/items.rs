//! Item lookup API.

use serde::Serialize;
use serde_json::Value;

use super::{into_service_error, service_errors};
use crate::client::AquariumClient;
use crate::error::{Error, Result};
use crate::record::Record;

/// Endpoint returning items of a sample stored in an object type.
const ITEMS_PATH: &str = "json/items/";

#[derive(Debug, Serialize)]
struct ItemsQuery {
    sid: String,
    oid: String,
}

/// Item lookup API client.
pub struct ItemsApi {
    client: AquariumClient,
}

impl ItemsApi {
    pub(crate) fn new(client: AquariumClient) -> Self {
        Self { client }
    }

    /// Items of `sample_id` held in containers of `object_type_id`.
    ///
    /// Each item is wrapped as an `Item` record; a nested `collection` becomes
    /// a `Collection` record on it.
    pub async fn items_for(
        &self,
        sample_id: impl ToString,
        object_type_id: impl ToString,
    ) -> Result<Vec<Record>> {
        let query = ItemsQuery {
            sid: sample_id.to_string(),
            oid: object_type_id.to_string(),
        };
        let response = self
            .client
            .post(ITEMS_PATH, &query)
            .await
            .map_err(into_service_error)?;

        if let Some(errors) = service_errors(&response.data) {
            return Err(Error::Service(errors));
        }

        match response.data {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(attributes) => Ok(Record::item(attributes)),
                    other => Err(Error::UnexpectedResponse(format!(
                        "expected item object, got {}",
                        other
                    ))),
                })
                .collect(),
            other => Err(Error::UnexpectedResponse(format!(
                "expected a list of items, got {}",
                other
            ))),
        }
    }
}
