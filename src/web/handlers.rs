//! axum handlers.

use axum::{
    extract::{RawQuery, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::handler::{handle, AppState, FilterResponse};

/// GET / - Fetch, filter and re-encode a feed.
///
/// Query parameters are passed through in request order.
pub async fn filter_feed(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> FilterResponse {
    let params: Vec<(String, String)> = query
        .as_deref()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    handle(&state, &params).await
}

/// GET /health - Health check.
pub async fn health_check() -> &'static str {
    "OK"
}

impl IntoResponse for FilterResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Dropping invalid response header"),
            }
        }
        response
    }
}
