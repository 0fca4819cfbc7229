//! Login and logout.

use console::Term;
use reqwest::StatusCode;
use tracing::{info, warn};

use crate::client::AquariumClient;
use crate::error::{Error, Result};
use crate::prompt;
use crate::session::Session;
use crate::types::{LoginCredentials, LoginRequest};

/// Session endpoint, relative to the base URL.
const LOGIN_PATH: &str = "sessions.json";

impl AquariumClient {
    /// Log in and keep the resulting session for later requests.
    ///
    /// Returns the raw login response body. On failure the previous session,
    /// if any, is left in place.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let url = self.url(LOGIN_PATH)?;
        let request = LoginRequest {
            session: LoginCredentials {
                login: username,
                password,
            },
        };

        let response = self
            .with_timeout(self.inner().http.post(url).json(&request))
            .send()
            .await
            .map_err(|e| {
                warn!(login = username, error = %e, "login request failed");
                Error::auth_transport(e)
            })?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(Error::auth_transport)?;

        if status != StatusCode::OK {
            warn!(login = username, status = status.as_u16(), "login rejected");
            return Err(Error::Auth {
                status: Some(status.as_u16()),
                body,
                source: None,
            });
        }

        let session = Session::from_login_response(
            username,
            headers,
            self.inner().authentication_key.clone(),
        );
        *self.inner().session.write() = Some(session);
        info!(login = username, url = %self.base_url(), "logged in to Aquarium");
        Ok(body)
    }

    /// Prompt on the console for a username and masked password, then log in.
    pub async fn login_interactive(&self) -> Result<String> {
        let credentials =
            tokio::task::spawn_blocking(|| prompt::read_credentials(&Term::stdout()))
                .await
                .map_err(std::io::Error::other)??;
        self.login(&credentials.username, &credentials.password).await
    }

    /// Drop the current session. Later POSTs fail until the next login.
    pub fn logout(&self) {
        if self.inner().session.write().take().is_some() {
            info!("logged out of Aquarium");
        }
    }
}
