//! Counterparty endpoints
//!
//! `POST /counterparty/detail` returns the bonus balance of a counterparty at a
//! retail store. `GET /counterparty` searches counterparties.

use futures::{Stream, TryStreamExt};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};
use warp::hyper::body::Buf;
use warp::{Filter, Rejection, Reply};

use crate::error::ApiError;
use crate::loyalty::{
    BalanceSource, CounterpartyCollection, CounterpartySource, DetailedCounterpartyRequest,
    DetailedCounterpartyResponse,
};

// ============================================================================
// HANDLERS
// ============================================================================

/// Handler for `POST /counterparty/detail`.
///
/// # Arguments
///
/// * `body` - Fully buffered request body
/// * `balances` - Balance source to consult
///
/// # Returns
///
/// * `Ok(warp::Reply)` - `{"bonusProgram":{"agentBonusBalance":N}}`
/// * `Err(warp::Rejection)` - Malformed JSON or encoding failure
pub async fn counterparty_detail_handler(
    body: Vec<u8>,
    balances: Arc<dyn BalanceSource>,
) -> Result<impl Reply, Rejection> {
    debug!(
        "POST /counterparty/detail - Received body: {}",
        String::from_utf8_lossy(&body)
    );

    let request = DetailedCounterpartyRequest::from_json(&body).map_err(|e| {
        error!("Counterparty detail deserialization failed: {}", e);
        warp::reject::custom(ApiError::MalformedJson(e.to_string()))
    })?;

    let balance =
        balances.agent_bonus_balance(request.retail_store_id(), request.counterparty_id());
    debug!(
        "Bonus balance for counterparty {} at store {}: {}",
        request.counterparty_id(),
        request.retail_store_id(),
        balance
    );

    json_reply(&DetailedCounterpartyResponse::with_balance(balance))
}

/// Handler for `GET /counterparty`.
///
/// The `search` parameter defaults to an empty string; when repeated, the
/// first occurrence is used.
pub async fn search_counterparties_handler(
    params: Vec<(String, String)>,
    counterparties: Arc<dyn CounterpartySource>,
) -> Result<impl Reply, Rejection> {
    let query = search_param(&params);
    debug!("GET /counterparty - search {:?}", query);

    let collection = CounterpartyCollection::from(counterparties.search(query));
    json_reply(&collection)
}

/// Returns the first `search` query parameter, or `""` when absent.
pub fn search_param(params: &[(String, String)]) -> &str {
    params
        .iter()
        .find(|(key, _)| key == "search")
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

// ============================================================================
// RESPONSE AND BODY HELPERS
// ============================================================================

/// Serializes `value` into an `application/json` reply.
///
/// Unlike `warp::reply::json`, an encoding failure becomes a rejection that
/// carries the serializer's error text.
pub fn json_reply<T: Serialize>(value: &T) -> Result<impl Reply, Rejection> {
    let body = serde_json::to_vec(value).map_err(|e| {
        error!("Response encoding failed: {}", e);
        warp::reject::custom(ApiError::Encode(e.to_string()))
    })?;
    Ok(warp::reply::with_header(body, "content-type", "application/json"))
}

/// Buffers a streamed request body into memory.
///
/// A failed chunk aborts the read with `ApiError::BodyRead` carrying the
/// stream's error text.
pub async fn read_body<S, B, E>(body: S) -> Result<Vec<u8>, ApiError>
where
    S: Stream<Item = Result<B, E>>,
    B: Buf,
    E: std::fmt::Display,
{
    body.try_fold(Vec::new(), |mut buffer, mut chunk| async move {
        let bytes = chunk.copy_to_bytes(chunk.remaining());
        buffer.extend_from_slice(&bytes);
        Ok(buffer)
    })
    .await
    .map_err(|e| ApiError::BodyRead(e.to_string()))
}

async fn read_body_or_reject<S, B>(body: S) -> Result<Vec<u8>, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    read_body(body).await.map_err(|e| {
        error!("Failed to read request body: {}", e);
        warp::reject::custom(e)
    })
}

// ============================================================================
// WARP FILTER HELPERS
// ============================================================================

/// Creates a warp filter that extracts the whole request body.
///
/// A read failure (e.g. client disconnect) rejects with `ApiError::BodyRead`
/// so the caller sees the underlying error text.
pub fn buffered_body() -> impl Filter<Extract = (Vec<u8>,), Error = Rejection> + Clone {
    warp::body::stream().and_then(read_body_or_reject)
}

/// Creates a warp filter that provides access to the balance source.
pub fn with_balances(
    balances: Arc<dyn BalanceSource>,
) -> impl Filter<Extract = (Arc<dyn BalanceSource>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || balances.clone())
}

/// Creates a warp filter that provides access to the counterparty source.
pub fn with_counterparties(
    counterparties: Arc<dyn CounterpartySource>,
) -> impl Filter<Extract = (Arc<dyn CounterpartySource>,), Error = std::convert::Infallible> + Clone
{
    warp::any().map(move || counterparties.clone())
}
