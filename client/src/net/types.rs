//! Wire schema for the annotation store and the host page configuration.
//!
//! DESIGN
//! ======
//! Store payloads are parsed here, at the boundary, into the core's typed
//! models. Anything that does not fit surfaces as [`ApiError::Parse`] instead
//! of leaking half-filled records into the viewer. Quote records themselves
//! tolerate the store's several historical shapes (see `viewer::doc`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use viewer::doc::{Quote, QuoteId, Tag};

/// Header carrying the CSRF token on mutating requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Placeholder substituted with the quote id in the delete endpoint template.
pub const QUOTE_ID_PLACEHOLDER: &str = "{id}";

/// Store endpoints the viewer talks to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub available_tags: String,
    pub list_quotes: String,
    pub create_quote: String,
    /// Template containing [`QUOTE_ID_PLACEHOLDER`].
    pub delete_quote: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            available_tags: "/api/extraction/tags/".to_owned(),
            list_quotes: "/api/extraction/quotes/".to_owned(),
            create_quote: "/api/extraction/quotes/".to_owned(),
            delete_quote: "/api/extraction/quotes/{id}/".to_owned(),
        }
    }
}

impl Endpoints {
    /// Delete URL for quote `id`.
    ///
    /// Templates without a placeholder get the id appended as a path segment.
    #[must_use]
    pub fn delete_quote_url(&self, id: QuoteId) -> String {
        if self.delete_quote.contains(QUOTE_ID_PLACEHOLDER) {
            self.delete_quote.replace(QUOTE_ID_PLACEHOLDER, &id.to_string())
        } else {
            let base = self.delete_quote.trim_end_matches('/');
            format!("{base}/{id}/")
        }
    }
}

/// Configuration the host page embeds for the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Location of the PDF to annotate. Absent when the study has no file.
    #[serde(default)]
    pub pdf_url: Option<String>,
    /// Extraction session the quotes belong to.
    pub extraction_id: i64,
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl HostConfig {
    /// Parse the embedded configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid configuration JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// The PDF location, if one was supplied and is not blank.
    #[must_use]
    pub fn pdf_url(&self) -> Option<&str> {
        self.pdf_url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// Host configuration could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("host configuration element `{0}` not found")]
    Missing(&'static str),
    #[error("invalid host configuration: {0}")]
    Parse(String),
}

/// A request to the annotation store failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("store responded with status {status}")]
    Status { status: u16 },
    #[error("unexpected response body: {0}")]
    Parse(String),
    #[error("store not reachable from this environment")]
    Unavailable,
}

#[derive(Debug, Deserialize)]
struct TagsEnvelope {
    #[serde(default)]
    tags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
struct QuotesEnvelope {
    #[serde(default)]
    quotes: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Parse an available-tags response (`{"tags": [...]}`).
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when the body does not match the schema.
pub fn parse_tags(body: &str) -> Result<Vec<Tag>, ApiError> {
    serde_json::from_str::<TagsEnvelope>(body)
        .map(|env| env.tags)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Parse a quote listing (`{"quotes": [...]}`).
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when the body does not match the schema.
pub fn parse_quotes(body: &str) -> Result<Vec<Quote>, ApiError> {
    serde_json::from_str::<QuotesEnvelope>(body)
        .map(|env| env.quotes)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Parse the record returned by a successful create.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when the body is not a quote record.
pub fn parse_created(body: &str) -> Result<Quote, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// The store's `{"error": "..."}` message, when a failure body carries one.
#[must_use]
pub fn store_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => Some(parsed.error),
        Err(_) => None,
    }
}
