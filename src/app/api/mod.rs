//! HTTP Client Wrapper
//!
//! One `reqwest` blocking client bound to a single backend origin. Before
//! every request the session store is consulted and, if a token exists, it
//! is attached as a `Bearer` credential. No retry, no timeout, no response
//! validation beyond JSON decoding; failures propagate as [`ApiError`] to
//! the caller.
//!
//! Resource clients live in [`auth`] and [`posts`], one function per
//! verb + path.

use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::app::session::SessionStore;

pub mod auth;
pub mod posts;

/// Errors from resource calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response, or the response body could
    /// not be decoded
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// A local file meant for upload could not be read
    #[error("could not read attachment {path}")]
    Attachment {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// HTTP client bound to one backend origin plus the session store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token if a session exists. The store is read per
    /// request, never cached.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorize(self.client.get(self.url(path))).send()?;
        decode(response)
    }

    pub(crate) fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .authorize(self.client.post(self.url(path)).json(body))
            .send()?;
        decode(response)
    }

    pub(crate) fn put_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .authorize(self.client.put(self.url(path)).json(body))
            .send()?;
        check(response)
    }

    pub(crate) fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(self.client.post(self.url(path)).multipart(form))
            .send()?;
        decode(response)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json()?)
    } else {
        let body = response.text().unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

fn check(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}
