//! Client for the hosted database's REST endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so a failed fetch
//! degrades one section without touching navigation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";
pub const DEFAULT_BACKEND_KEY: &str = "public-anon-key";

/// Endpoint and public key, fixed at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Read `FLEETDESK_BACKEND_URL` / `FLEETDESK_BACKEND_KEY` from the build
    /// environment, falling back to a local development endpoint.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("FLEETDESK_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL),
            option_env!("FLEETDESK_BACKEND_KEY").unwrap_or(DEFAULT_BACKEND_KEY),
        )
    }

    pub fn new(url: &str, anon_key: &str) -> Self {
        Self { url: url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() }
    }
}

#[derive(Clone, Debug)]
pub struct BackendClient {
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.url
    }

    /// URL for a count-only query against `table`, with an optional
    /// PostgREST filter such as `status=eq.active`.
    pub fn count_url(&self, table: &str, filter: Option<&str>) -> String {
        let mut url = format!("{}/rest/v1/{table}?select=id&limit=1", self.config.url);
        if let Some(filter) = filter {
            url.push('&');
            url.push_str(filter);
        }
        url
    }

    /// Total rows in `table` matching `filter`, read from `Content-Range`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the request fails, the server responds
    /// with a non-OK status, or the count header is missing.
    pub async fn count(&self, table: &str, filter: Option<&str>) -> Result<u64, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.count_url(table, filter);
            let bearer = format!("Bearer {}", self.config.anon_key);
            let resp = gloo_net::http::Request::get(&url)
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &bearer)
                .header("Prefer", "count=exact")
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(count_failed_message(table, resp.status()));
            }
            let range = resp
                .headers()
                .get("content-range")
                .ok_or_else(|| format!("{table}: missing content-range header"))?;
            parse_content_range_total(&range).ok_or_else(|| format!("{table}: unreadable content-range `{range}`"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (table, filter);
            Err("not available on server".to_owned())
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn count_failed_message(table: &str, status: u16) -> String {
    format!("{table}: count request failed: {status}")
}

/// Total from a `Content-Range` value like `0-24/150` or `*/0`.
/// An unknown total (`0-24/*`) yields `None`.
pub fn parse_content_range_total(raw: &str) -> Option<u64> {
    let (_, total) = raw.trim().rsplit_once('/')?;
    total.parse().ok()
}
