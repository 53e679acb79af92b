// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the search backend.
//!
//! Posts every staged file as one `multipart/form-data` request and decodes
//! the JSON answer.

use crate::application::port::{BackendError, SearchBackend, SearchReply, SearchRequest};
use crate::config::{Config, UPLOAD_FIELD_NAME};
use crate::domain::matching::MatchRecord;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;
use std::future::Future;

const USER_AGENT: &str = concat!("Lookalike/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct WireMatch {
    filename: String,
    distance: f64,
    resized: String,
    original: String,
}

impl From<WireMatch> for MatchRecord {
    fn from(wire: WireMatch) -> Self {
        MatchRecord::new(wire.filename, wire.distance, wire.resized, wire.original)
    }
}

#[derive(Debug, Deserialize)]
struct WireReply {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    files: Option<Vec<WireMatch>>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct WireFailure {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// `detail` is used only when it is a plain string.
fn string_detail(detail: Option<serde_json::Value>) -> Option<String> {
    match detail {
        Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}

/// Decodes a response status and body into a [`SearchReply`].
///
/// # Errors
///
/// Returns [`BackendError::MalformedPayload`] when a 2xx body is not the
/// expected JSON object. Non-2xx bodies are parsed leniently.
pub fn parse_reply(status: StatusCode, body: &str) -> Result<SearchReply, BackendError> {
    if status.is_success() {
        let wire: WireReply = serde_json::from_str(body)
            .map_err(|e| BackendError::MalformedPayload(e.to_string()))?;
        return Ok(SearchReply::Completed {
            success: wire.success,
            matches: wire
                .files
                .unwrap_or_default()
                .into_iter()
                .map(MatchRecord::from)
                .collect(),
            detail: string_detail(wire.detail),
        });
    }

    let failure: WireFailure = serde_json::from_str(body).unwrap_or_default();
    Ok(SearchReply::Rejected {
        status: status_text(status),
        detail: string_detail(failure.detail),
    })
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_string(), str::to_string)
}

fn build_form(request: &SearchRequest) -> Result<Form, BackendError> {
    request.parts().iter().try_fold(Form::new(), |form, upload| {
        let part = Part::bytes(upload.data.as_ref().clone())
            .file_name(upload.name.clone())
            .mime_str(&upload.content_type)
            .map_err(|e| BackendError::InvalidRequest(e.to_string()))?;
        Ok(form.part(UPLOAD_FIELD_NAME, part))
    })
}

// =============================================================================
// HttpSearchBackend
// =============================================================================

/// [`SearchBackend`] talking to a remote service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSearchBackend {
    /// Creates a backend posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidRequest`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BackendError::InvalidRequest(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Creates a backend posting to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::error::Error::Backend) if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        Ok(Self::new(config.endpoint())?)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchBackend {
    fn search(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<SearchReply, BackendError>> + Send {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        async move {
            let form = build_form(&request)?;
            let response = client
                .post(endpoint.as_str())
                .multipart(form)
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;
            tracing::debug!(%status, bytes = body.len(), "search response received");
            parse_reply(status, &body)
        }
    }
}
