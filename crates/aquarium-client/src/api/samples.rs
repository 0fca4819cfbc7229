//! Sample catalog API.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::{into_service_error, service_errors};
use crate::client::AquariumClient;
use crate::error::{Error, Result};
use crate::types::SampleCatalog;

/// Endpoint listing every sample name grouped by sample type.
const CATALOG_PATH: &str = "browser/all";

/// Sample catalog API client.
pub struct SamplesApi {
    client: AquariumClient,
}

impl SamplesApi {
    pub(crate) fn new(client: AquariumClient) -> Self {
        Self { client }
    }

    /// Fetch the full sample catalog and cache it on the client.
    pub async fn get_sample_names(&self) -> Result<Arc<SampleCatalog>> {
        let response = self
            .client
            .get(CATALOG_PATH)
            .await
            .map_err(into_service_error)?;

        let value: Value = serde_json::from_str(&response.data).map_err(|e| {
            Error::UnexpectedResponse(format!("sample catalog is not JSON: {}", e))
        })?;
        if let Some(errors) = service_errors(&value) {
            return Err(Error::Service(errors));
        }
        let catalog: SampleCatalog = serde_json::from_value(value).map_err(|e| {
            Error::UnexpectedResponse(format!("malformed sample catalog: {}", e))
        })?;

        debug!(types = catalog.len(), "cached sample catalog");
        let catalog = Arc::new(catalog);
        *self.client.inner().sample_catalog.write() = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Sample names of one type from the cached catalog. No network call.
    ///
    /// Empty when `type_name` is missing, empty, or unknown, or when the
    /// catalog has not been fetched.
    pub fn sample_names_for(&self, type_name: Option<&str>) -> Vec<String> {
        let Some(type_name) = type_name.filter(|name| !name.is_empty()) else {
            return Vec::new();
        };
        self.client
            .inner()
            .sample_catalog
            .read()
            .as_ref()
            .and_then(|catalog| catalog.names(type_name))
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    /// The cached catalog, if fetched.
    pub fn cached(&self) -> Option<Arc<SampleCatalog>> {
        self.client.inner().sample_catalog.read().clone()
    }

    /// Forget the cached catalog.
    pub fn clear_cache(&self) {
        self.client.inner().sample_catalog.write().take();
    }
}
