//! Session cookie handling.

use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};

/// Cookie name the service expects on POST requests.
const REMEMBER_TOKEN: &str = "remember_token";

/// Prefix of the environment-suffixed cookie name set at login
/// (`remember_token_development`, `remember_token_production`, ...).
const REMEMBER_TOKEN_PREFIX: &str = "remember_token_";

/// Extract `name=value` pairs from every `Set-Cookie` header, in order.
///
/// Cookie attributes (`Path`, `HttpOnly`, ...) are dropped.
pub(crate) fn session_cookies(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .map(str::to_string)
        .collect()
}

/// The extra cookie sent on form posts: the first session cookie with a
/// `remember_token_<env>` name rewritten to the bare `remember_token`.
///
/// Older Aquarium deployments set the environment-suffixed cookie at login but
/// only accept the unsuffixed name when authenticating POSTs. Any other first
/// cookie is repeated unchanged.
pub fn remember_token_alias(first_cookie: &str) -> String {
    match first_cookie.split_once('=') {
        Some((name, value)) if name.trim().starts_with(REMEMBER_TOKEN_PREFIX) => {
            format!("{}={}", REMEMBER_TOKEN, value)
        }
        _ => first_cookie.to_string(),
    }
}

/// Join cookies into a single `Cookie` header value.
pub(crate) fn cookie_header<S: AsRef<str>>(cookies: &[S]) -> Option<HeaderValue> {
    if cookies.is_empty() {
        return None;
    }
    let joined = cookies
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("; ");
    HeaderValue::from_str(&joined).ok()
}
