//! Auth token gate
//!
//! Every route requires the configured header to be present with a non-empty
//! value. The token itself is not validated.

use std::sync::Arc;
use tracing::warn;
use warp::http::HeaderMap;
use warp::{Filter, Rejection};

use crate::error::ApiError;

/// Checks that `header_name` carries a non-empty value.
///
/// # Returns
///
/// * `Ok(())` - Header present and non-empty
/// * `Err(ApiError::Unauthorized)` - Header absent, empty, or whitespace only
pub fn check_token(headers: &HeaderMap, header_name: &str) -> Result<(), ApiError> {
    match headers.get(header_name) {
        Some(value) if !value.as_bytes().trim_ascii().is_empty() => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

/// Creates a warp filter that rejects requests without an auth token.
///
/// Extracts nothing, so it can be prepended to any route.
pub fn with_auth(header_name: Arc<str>) -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::header::headers_cloned()
        .and_then(move |headers: HeaderMap| {
            let header_name = header_name.clone();
            async move {
                check_token(&headers, &header_name).map_err(|e| {
                    warn!("Rejected request without {} header", header_name);
                    warp::reject::custom(e)
                })
            }
        })
        .untuple_one()
}
