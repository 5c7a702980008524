//! Request handler for the filter function.
//!
//! The handler works on raw query parameters and returns a status, headers
//! and body, so it can sit behind any HTTP trigger. Every failure is turned
//! into a response here; nothing escapes to the caller as an error.

use std::collections::BTreeMap;

use tracing::{error, info, warn};

use crate::config::FetchConfig;
use crate::error::{Result, RssFilterError};
use crate::feed::FeedFetcher;
use crate::filter::{parse_filters, URL_PARAM};
use crate::output::{to_xml, RssDocument, CONTENT_TYPE};

/// Body returned when the `url` parameter is missing or empty.
pub const MISSING_URL_MESSAGE: &str = "Missing 'url' parameter";

/// Body returned when a query parameter names an unknown field.
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query parameters";

/// Body returned when the output document cannot be serialized.
pub const ENCODING_ERROR_MESSAGE: &str = "Error encoding XML";

/// Shared state for the filter function.
#[derive(Debug, Clone)]
pub struct AppState {
    fetcher: FeedFetcher,
}

impl AppState {
    /// Create the state from the fetch configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: FeedFetcher::new(config)?,
        })
    }
}

/// Response produced by [`handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: String,
}

impl FilterResponse {
    fn ok(xml: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE.to_string());
        Self {
            status: 200,
            headers,
            body: xml,
        }
    }

    fn plain(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Map an error to its response.
    ///
    /// Fetch errors carry the upstream message; every other error gets a
    /// fixed body.
    pub fn from_error(err: &RssFilterError) -> Self {
        match err {
            RssFilterError::MissingUrl => Self::plain(400, MISSING_URL_MESSAGE),
            RssFilterError::InvalidField(_) => Self::plain(400, INVALID_QUERY_MESSAGE),
            RssFilterError::Fetch(msg) => Self::plain(500, msg.clone()),
            RssFilterError::Encoding(_) => Self::plain(500, ENCODING_ERROR_MESSAGE),
            RssFilterError::Io(_) | RssFilterError::Config(_) => {
                Self::plain(500, "Internal server error")
            }
        }
    }
}

/// Handle one filter request.
///
/// `params` are the decoded query parameters in request order.
pub async fn handle(state: &AppState, params: &[(String, String)]) -> FilterResponse {
    match filter_request(state, params).await {
        Ok(xml) => FilterResponse::ok(xml),
        Err(e) => {
            if e.is_validation() {
                warn!(error = %e, "Rejected filter request");
            } else {
                error!(error = %e, "Filter request failed");
            }
            FilterResponse::from_error(&e)
        }
    }
}

async fn filter_request(state: &AppState, params: &[(String, String)]) -> Result<String> {
    let url = params
        .iter()
        .find(|(name, _)| name == URL_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
        .ok_or(RssFilterError::MissingUrl)?;

    let filters = parse_filters(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;

    let feed = state.fetcher.fetch(url).await?;
    let total = feed.items.len();

    let document = RssDocument::filtered(feed, &filters);
    info!(
        url,
        filters = filters.len(),
        total,
        kept = document.channel.items.len(),
        "Filtered feed"
    );

    to_xml(&document)
}
