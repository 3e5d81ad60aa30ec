// Back-office API HTTP client
//
// Wraps `reqwest::Client` with base-URL construction and envelope
// unwrapping. All endpoint modules (products, customers, locations,
// health) are implemented as inherent methods via separate files to keep
// this module focused on transport mechanics.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::Envelope;

/// Raw HTTP client for the back-office REST API.
///
/// Handles the `{ code, message, data }` envelope and `/api`-rooted URL
/// construction. All methods return unwrapped `data` payloads -- the
/// envelope is stripped before the caller sees it.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client for the given backend root
    /// (e.g. `http://localhost:8080`).
    ///
    /// The `/api` base path is appended automatically unless the URL
    /// already ends with it.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// The resolved API base URL (always ends with `/api/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Normalize the configured root into a joinable `…/api/` base.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }
        Ok(url)
    }

    /// Join a relative resource path (e.g. `"products/P1"`) onto the base.
    fn url(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(Error::BaseUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Self::unwrap_envelope(resp, resource, None).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        resource: &'static str,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::unwrap_envelope(resp, resource, None).await
    }

    pub(crate) async fn get_by_id<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
        id: &str,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Self::unwrap_envelope(resp, resource, Some(id)).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
        resource: &'static str,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::unwrap_envelope(resp, resource, None).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
        resource: &'static str,
        id: &str,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::unwrap_envelope(resp, resource, Some(id)).await
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        resource: &'static str,
        id: &str,
    ) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::unwrap_empty(resp, resource, Some(id)).await
    }

    // ── Envelope handling ────────────────────────────────────────────

    /// Parse the `{ code, message, data }` envelope, returning `data` on
    /// success or an `Error::Api` when either the HTTP status or the
    /// envelope `code` reports failure.
    async fn unwrap_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
        resource: &'static str,
        id: Option<&str>,
    ) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if let Some(err) = Self::triage(status, &body, resource, id) {
            return Err(err);
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
            }
        })?;

        if envelope.code != 200 {
            return Err(Error::Api {
                status: status.as_u16(),
                code: envelope.code,
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("code={}", envelope.code)),
            });
        }

        envelope.data.ok_or_else(|| Error::Deserialization {
            message: format!("success envelope for {resource} carried no data"),
        })
    }

    /// Like `unwrap_envelope`, but for operations whose success payload is
    /// `null` (delete).
    async fn unwrap_empty(
        resp: reqwest::Response,
        resource: &'static str,
        id: Option<&str>,
    ) -> Result<(), Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if let Some(err) = Self::triage(status, &body, resource, id) {
            return Err(err);
        }
        Ok(())
    }

    /// Map a failed response to an error, or `None` when the status is
    /// success and the envelope (if decodable) reports 200.
    fn triage(
        status: StatusCode,
        body: &str,
        resource: &'static str,
        id: Option<&str>,
    ) -> Option<Error> {
        if status == StatusCode::NOT_FOUND {
            return Some(Error::NotFound {
                resource,
                id: id.unwrap_or("<unknown>").to_owned(),
            });
        }

        if !status.is_success() {
            // Error envelopes still carry `{ code, message, data: null }`;
            // fall back to the raw body when that shape doesn't parse.
            let err = match serde_json::from_str::<Envelope<serde_json::Value>>(body) {
                Ok(envelope) => Error::Api {
                    status: status.as_u16(),
                    code: envelope.code,
                    message: envelope
                        .message
                        .unwrap_or_else(|| status.to_string()),
                },
                Err(_) => Error::Api {
                    status: status.as_u16(),
                    code: i32::from(status.as_u16()),
                    message: body[..body.len().min(200)].to_owned(),
                },
            };
            return Some(err);
        }

        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_api_suffix() {
        let client =
            ApiClient::new("http://localhost:8080", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn base_url_keeps_existing_api_path() {
        let client =
            ApiClient::new("http://localhost:8080/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = ApiClient::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(Error::BaseUrl(_))));
    }
}
