// src/api/mod.rs
//
// Blocking JSON client for the Fashion Data Engine REST API. Endpoint
// wrappers live in the per-resource submodules as `impl ApiClient` blocks.

mod admin;
mod brands;
mod catalog;
mod editorial;
mod error;
mod products;
mod purchases;

pub use error::ApiError;

use std::time::{Duration, Instant};

use reqwest::{
    Method,
    blocking::Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use url::{Position, Url};

use crate::config::{consts::USER_AGENT, options::ApiOptions};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    Public,
    Admin,
}

/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(opts: &ApiOptions) -> ApiResult<Self> {
        let base = Url::parse(opts.base_url.trim())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", opts.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(opts.base_url.clone()));
        }
        let http = Client::builder()
            .timeout(Duration::from_secs(opts.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ApiError::Transport { path: s!("<client>"), source })?;

        Ok(Self { http, base, token: opts.token().map(String::from) })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: Option<&str>) {
        self.token = token.map(str::trim).filter(|t| !t.is_empty()).map(String::from);
    }

    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.set_token(token);
        self
    }

    /// `segments` are appended to the base path and percent-encoded one by
    /// one; a trailing `""` yields a trailing slash.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> ApiResult<Url> {
        let mut url = self.base.clone();
        {
            let mut segs = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?;
            segs.pop_if_empty();
            segs.extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /* ---------------- request plumbing ---------------- */

    fn execute(&self, method: Method, url: Url, body: Option<Vec<u8>>, auth: Auth) -> ApiResult<(u16, Vec<u8>)> {
        let path = s!(&url[Position::BeforePath..]);
        let mut req = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if auth == Auth::Admin {
            let token = self.token().ok_or(ApiError::MissingToken)?;
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(bytes) = body {
            req = req.body(bytes);
        }

        let started = Instant::now();
        logd!("API: {} {}", method, path);

        let resp = req.send().map_err(|source| {
            loge!("API: {} {} failed: {}", method, path, source);
            ApiError::Transport { path: path.clone(), source }
        })?;

        let status = resp.status();
        if !status.is_success() {
            loge!("API: {} {} → {}", method, path, status.as_u16());
            return Err(ApiError::Http {
                status: status.as_u16(),
                method: method.to_string(),
                path,
                admin: auth == Auth::Admin,
            });
        }

        let bytes = resp
            .bytes()
            .map_err(|source| ApiError::Transport { path: path.clone(), source })?;
        logd!(
            "API: {} {} → {} ({} bytes, {} ms)",
            method,
            path,
            status.as_u16(),
            bytes.len(),
            started.elapsed().as_millis()
        );
        Ok((status.as_u16(), bytes.to_vec()))
    }

    fn call<T: DeserializeOwned>(&self, method: Method, url: Url, body: Option<Vec<u8>>, auth: Auth) -> ApiResult<T> {
        let path = s!(&url[Position::BeforePath..]);
        let (status, bytes) = self.execute(method, url, body, auth)?;
        decode(&path, status, &bytes)
    }

    fn encode<B: Serialize>(url: &Url, body: &B) -> ApiResult<Vec<u8>> {
        serde_json::to_vec(body).map_err(|source| ApiError::Encode {
            path: s!(&url[Position::BeforePath..]),
            source,
        })
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, String)]) -> ApiResult<T> {
        let url = self.endpoint(segments, query)?;
        self.call(Method::GET, url, None, Auth::Public)
    }

    pub(crate) fn post<B: Serialize, T: DeserializeOwned>(&self, segments: &[&str], body: &B) -> ApiResult<T> {
        let url = self.endpoint(segments, &[])?;
        let bytes = Self::encode(&url, body)?;
        self.call(Method::POST, url, Some(bytes), Auth::Public)
    }

    /// DELETE that ignores any response body (204 or otherwise).
    pub(crate) fn delete(&self, segments: &[&str]) -> ApiResult<()> {
        let url = self.endpoint(segments, &[])?;
        self.execute(Method::DELETE, url, None, Auth::Public).map(|_| ())
    }

    pub(crate) fn admin_get<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, String)]) -> ApiResult<T> {
        let url = self.endpoint(segments, query)?;
        self.call(Method::GET, url, None, Auth::Admin)
    }

    pub(crate) fn admin_send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = self.endpoint(segments, query)?;
        let bytes = body.map(|b| Self::encode(&url, b)).transpose()?;
        self.call(method, url, bytes, Auth::Admin)
    }
}

/// 204 and empty bodies decode as JSON `null`, so `()` and `Option<T>`
/// targets succeed while anything else reports a decode error.
fn decode<T: DeserializeOwned>(path: &str, status: u16, bytes: &[u8]) -> ApiResult<T> {
    let raw: &[u8] = if status == 204 || bytes.iter().all(u8::is_ascii_whitespace) { b"null" } else { bytes };
    serde_json::from_slice(raw).map_err(|source| {
        loge!("API: decode {} failed: {}", path, source);
        ApiError::Decode { path: s!(path), source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        let opts = ApiOptions { base_url: s!(base), ..ApiOptions::default() };
        ApiClient::new(&opts).unwrap()
    }

    #[test]
    fn endpoint_encodes_path_segments_and_query() {
        let c = client("http://localhost:8000");
        let url = c.endpoint(&["products", "compare", "nike:dunk low/black"], &[("days", s!("30"))]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/products/compare/nike:dunk%20low%2Fblack?days=30");
    }

    #[test]
    fn endpoint_keeps_base_prefix_and_trailing_slash() {
        let c = client("https://api.example.com/v1/");
        let url = c.endpoint(&["brands", ""], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/brands/");
    }

    #[test]
    fn rejects_unparsable_base() {
        let opts = ApiOptions { base_url: s!("not a url"), ..ApiOptions::default() };
        assert!(matches!(ApiClient::new(&opts), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn empty_body_decodes_as_unit() {
        let unit: () = decode("/watchlist/1", 204, b"").unwrap();
        assert_eq!(unit, ());
        let err = decode::<Vec<u8>>("/brands/", 200, b"").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
