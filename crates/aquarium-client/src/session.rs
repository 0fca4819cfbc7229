//! Authenticated session state.

use reqwest::header::{HeaderMap, HeaderValue};

use crate::cookies;

/// State captured from a successful login.
///
/// A `Session` only exists after the service accepted the credentials; the
/// client drops it on [`logout`](crate::AquariumClient::logout).
#[derive(Debug, Clone)]
pub struct Session {
    login: String,
    headers: HeaderMap,
    cookies: Vec<String>,
    authentication_key: Option<String>,
}

impl Session {
    pub(crate) fn from_login_response(
        login: impl Into<String>,
        headers: HeaderMap,
        authentication_key: Option<String>,
    ) -> Self {
        let cookies = cookies::session_cookies(&headers);
        Self {
            login: login.into(),
            headers,
            cookies,
            authentication_key,
        }
    }

    /// Login name the session was created for.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Headers of the login response.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Session cookies as `name=value` pairs.
    pub fn cookies(&self) -> &[String] {
        &self.cookies
    }

    /// Key merged into every POST form.
    pub fn authentication_key(&self) -> Option<&str> {
        self.authentication_key.as_deref()
    }

    /// `Cookie` header for GET requests.
    pub(crate) fn cookie_header(&self) -> Option<HeaderValue> {
        cookies::cookie_header(&self.cookies)
    }

    /// `Cookie` header for POST requests: the session cookies plus the
    /// remember-token alias of the first one.
    pub(crate) fn post_cookie_header(&self) -> Option<HeaderValue> {
        let mut cookies = self.cookies.clone();
        if let Some(first) = self.cookies.first() {
            cookies.push(cookies::remember_token_alias(first));
        }
        cookies::cookie_header(&cookies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::SET_COOKIE;

    fn login_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.append(
            SET_COOKIE,
            HeaderValue::from_static("remember_token_development=tok; path=/"),
        );
        headers.append(
            SET_COOKIE,
            HeaderValue::from_static("_aquarium_session=sess; path=/; HttpOnly"),
        );
        headers
    }

    #[test]
    fn test_get_cookie_header_uses_session_cookies() {
        let session = Session::from_login_response("neo", login_headers(), None);
        assert_eq!(
            session.cookie_header().unwrap().to_str().unwrap(),
            "remember_token_development=tok; _aquarium_session=sess"
        );
    }

    #[test]
    fn test_post_cookie_header_appends_alias() {
        let session = Session::from_login_response("neo", login_headers(), Some("k".into()));
        assert_eq!(
            session.post_cookie_header().unwrap().to_str().unwrap(),
            "remember_token_development=tok; _aquarium_session=sess; remember_token=tok"
        );
        assert_eq!(session.authentication_key(), Some("k"));
        assert_eq!(session.login(), "neo");
    }

    #[test]
    fn test_post_cookie_header_repeats_unsuffixed_first_cookie() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("_aquarium_session=sess"));
        let session = Session::from_login_response("neo", headers, None);
        assert_eq!(
            session.post_cookie_header().unwrap().to_str().unwrap(),
            "_aquarium_session=sess; _aquarium_session=sess"
        );
    }

    #[test]
    fn test_post_cookie_header_empty_without_cookies() {
        let session = Session::from_login_response("neo", HeaderMap::new(), None);
        assert!(session.post_cookie_header().is_none());
    }
}
