//! Request and response types for the Aquarium API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /sessions.json`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub session: LoginCredentials<'a>,
}

/// Credentials nested under `session`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

/// Result of a GET: the raw, unparsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetResponse {
    pub data: String,
}

/// Result of a POST: the parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct PostResponse {
    pub data: serde_json::Value,
}

/// Sample-type name to sample names, as served by `/browser/all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleCatalog(HashMap<String, Vec<String>>);

impl SampleCatalog {
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        Self(entries)
    }

    /// Names of samples of the given type, if the type is known.
    pub fn names(&self, type_name: &str) -> Option<&[String]> {
        self.0.get(type_name).map(Vec::as_slice)
    }

    /// Known sample-type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
