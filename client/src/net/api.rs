//! REST calls to the annotation store.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] so components
//! compile and unit tests run off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and unparsable bodies come back as
//! distinct [`ApiError`] kinds. No call retries and none has a timeout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use viewer::doc::{NewQuote, Quote, QuoteId, Tag};

use super::types::{ApiError, Endpoints, HostConfig};
#[cfg(feature = "csr")]
use super::types::{CSRF_HEADER, parse_created, parse_quotes, parse_tags, store_error_message};

#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status })
    }
}

#[cfg(feature = "csr")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Read a response body, turning non-2xx statuses into [`ApiError::Status`].
#[cfg(feature = "csr")]
async fn read_body(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(network)?;
    if let Err(err) = check_status(status) {
        match store_error_message(&body) {
            Some(message) => log::warn!("store error {status}: {message}"),
            None => log::warn!("store error {status}"),
        }
        return Err(err);
    }
    Ok(body)
}

/// `GET` the tags that may be attached to quotes.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is not a tag listing.
pub async fn fetch_tags(endpoints: &Endpoints) -> Result<Vec<Tag>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoints.available_tags)
            .send()
            .await
            .map_err(network)?;
        parse_tags(&read_body(resp).await?)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoints;
        Err(ApiError::Unavailable)
    }
}

/// `GET` the quotes already recorded for this extraction.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is not a quote listing.
pub async fn fetch_quotes(endpoints: &Endpoints) -> Result<Vec<Quote>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoints.list_quotes)
            .send()
            .await
            .map_err(network)?;
        parse_quotes(&read_body(resp).await?)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoints;
        Err(ApiError::Unavailable)
    }
}

/// `POST` a new quote and return the stored record.
///
/// # Errors
///
/// Returns an [`ApiError`] when the store rejects the quote or the reply is not a quote record.
pub async fn create_quote(config: &HostConfig, quote: &NewQuote) -> Result<Quote, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoints.create_quote)
            .header(CSRF_HEADER, &config.csrf_token)
            .json(quote)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        parse_created(&read_body(resp).await?)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, quote);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE` quote `id`. The response body is ignored.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the store answers with a non-2xx status.
pub async fn delete_quote(config: &HostConfig, id: QuoteId) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&config.endpoints.delete_quote_url(id))
            .header(CSRF_HEADER, &config.csrf_token)
            .send()
            .await
            .map_err(network)?;
        read_body(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id);
        Err(ApiError::Unavailable)
    }
}
