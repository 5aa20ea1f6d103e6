//! Session state and request construction for the poker room API.
//!
//! A [`Session`] owns the HTTP client and the authentication token slot.
//! Cloning a session is cheap and shares both, so every endpoint group built
//! from clones of one session observes the same token. Independent sessions
//! carry independent tokens.

use crate::error::Error;
use parking_lot::RwLock;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue, PRAGMA};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

#[cfg(test)]
mod tests;

/// Request header carrying the session token.
pub const AUTH_TOKEN_HEADER: &str = "X-AuthToken";

/// Response header the login endpoint returns the token in. The server uses
/// a different hyphenation on the way back; both spellings are wire contract.
pub const AUTH_TOKEN_RESPONSE_HEADER: &str = "X-Auth-Token";

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// Shared session for the poker room API.
///
/// Holds the token set by a successful [`Account::authenticate`] call and
/// stamps the contract headers on every request built through it. The token
/// lives only in process memory and is never persisted.
///
/// [`Account::authenticate`]: crate::AccountApi::authenticate
#[derive(Debug, Clone)]
pub struct Session {
    http: Client,
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Creates a new session with the given configuration.
    ///
    /// The underlying client keeps a cookie store so cookies set at login
    /// flow on subsequent requests.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: SessionConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Creates a new session with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(SessionConfig::default())
    }

    /// Replaces the authentication token. `None` clears it.
    pub fn set_auth_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    /// Returns the current authentication token, if any.
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Contract headers for one request: JSON content type, the no-cache
    /// directives, and the token header when a token is set.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let token = self.token.read();
        if let Some(token) = token.as_deref() {
            if let Ok(value) = HeaderValue::from_str(token) {
                headers.insert(AUTH_TOKEN_HEADER, value);
            }
        }

        headers
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).headers(self.headers())
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).headers(self.headers())
    }

    pub(crate) fn put(&self, url: &str) -> RequestBuilder {
        self.http.put(url).headers(self.headers())
    }

    pub(crate) fn delete(&self, url: &str) -> RequestBuilder {
        self.http.delete(url).headers(self.headers())
    }
}

/// Decodes a response body as JSON into the declared shape.
///
/// The HTTP status code is deliberately not inspected: server-reported
/// business failures surface through the `Status` field of the decoded
/// envelope, which callers inspect themselves.
pub(crate) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, Error> {
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Validates a base address and trims any trailing slash.
pub(crate) fn normalize_base_url(raw: &str) -> Result<String, Error> {
    let url = Url::parse(raw)?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}
