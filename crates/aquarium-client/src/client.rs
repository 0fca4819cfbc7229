//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::COOKIE;
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::{ItemsApi, SamplesApi};
use crate::error::{Error, Result};
use crate::form;
use crate::session::Session;
use crate::types::{GetResponse, PostResponse, SampleCatalog};

/// Aquarium API client.
///
/// Holds the session created by [`login`](Self::login) and attaches it to
/// every later request. Clones share the session.
///
/// # Example
///
/// ```no_run
/// use aquarium_client::AquariumClient;
///
/// # async fn example() -> aquarium_client::Result<()> {
/// let client = AquariumClient::builder()
///     .base_url("http://localhost:3000")
///     .authentication_key("secret")
///     .build()?;
///
/// client.login("neptune", "beagle").await?;
/// let page = client.get("/browser/all").await?;
/// println!("{}", page.data);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AquariumClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Per-request timeout; `None` waits indefinitely.
    pub(crate) timeout: Option<Duration>,
    /// Key handed to each new session.
    pub(crate) authentication_key: Option<String>,
    /// Current login, if any.
    pub(crate) session: RwLock<Option<Session>>,
    /// Sample catalog from the last successful fetch.
    pub(crate) sample_catalog: RwLock<Option<Arc<SampleCatalog>>>,
}

impl AquariumClient {
    /// Get access to the inner client state (for API implementations).
    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }
}

impl AquariumClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Option<Session> {
        self.inner.session.read().clone()
    }

    /// Whether a login has succeeded and not been dropped.
    pub fn is_logged_in(&self) -> bool {
        self.inner.session.read().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the sample catalog helpers.
    pub fn samples(&self) -> SamplesApi {
        SamplesApi::new(self.clone())
    }

    /// Access the item lookup helpers.
    pub fn items(&self) -> ItemsApi {
        ItemsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for a service path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        self.inner
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(Error::from)
    }

    pub(crate) fn with_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        match self.inner.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    /// Make a GET request and return the body untouched.
    ///
    /// Session cookies are attached when logged in; otherwise the request goes
    /// out without a `Cookie` header.
    pub async fn get(&self, path: &str) -> Result<GetResponse> {
        let url = self.url(path)?;
        let cookie = self
            .inner
            .session
            .read()
            .as_ref()
            .and_then(Session::cookie_header);

        debug!(method = "GET", %url, "sending request");
        let mut request = self.inner.http.get(url);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = self
            .with_timeout(request)
            .send()
            .await
            .map_err(Error::http_transport)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::http_transport)?;

        if status != StatusCode::OK {
            return Err(Error::Http {
                status: Some(status.as_u16()),
                body,
                source: None,
            });
        }

        Ok(GetResponse { data: body })
    }

    /// Make a form-encoded POST request and parse the JSON reply.
    ///
    /// `data` must serialize to an object of scalar fields; the session's
    /// authentication key is merged in. Fails with [`Error::NotLoggedIn`]
    /// before sending anything when there is no session.
    pub async fn post<B>(&self, path: &str, data: &B) -> Result<PostResponse>
    where
        B: Serialize + ?Sized,
    {
        let (cookie, authentication_key) = {
            let guard = self.inner.session.read();
            let session = guard.as_ref().ok_or(Error::NotLoggedIn)?;
            (
                session.post_cookie_header(),
                session.authentication_key().map(str::to_string),
            )
        };
        let fields = form::form_fields(data, authentication_key.as_deref())?;
        let url = self.url(path)?;

        debug!(method = "POST", %url, fields = fields.len(), "sending request");
        let mut request = self.inner.http.post(url).form(&fields);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = self
            .with_timeout(request)
            .send()
            .await
            .map_err(Error::http_transport)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::http_transport)?;

        if status != StatusCode::OK {
            return Err(Error::Http {
                status: Some(status.as_u16()),
                body,
                source: None,
            });
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(data) if !is_empty_reply(&data) => Ok(PostResponse { data }),
            Ok(_) => {
                debug!("POST response is an empty JSON value");
                Err(Error::Http {
                    status: Some(status.as_u16()),
                    body,
                    source: None,
                })
            }
            Err(e) => {
                debug!(error = %e, "POST response is not JSON");
                Err(Error::Http {
                    status: Some(status.as_u16()),
                    body,
                    source: None,
                })
            }
        }
    }
}

/// `null`, `false`, `0` and `""` carry no result and count as a failed POST.
fn is_empty_reply(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Builder for creating an AquariumClient.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    authentication_key: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Aquarium base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the key merged into POST forms.
    pub fn authentication_key(mut self, key: impl Into<String>) -> Self {
        self.authentication_key = Some(key.into());
        self
    }

    /// Set a per-request timeout. Requests wait indefinitely by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AquariumClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("aquarium-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(AquariumClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                authentication_key: self.authentication_key,
                session: RwLock::new(None),
                sample_catalog: RwLock::new(None),
            }),
        })
    }
}
