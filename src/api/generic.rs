//! Generic API structures and handlers
//!
//! This module contains the API server, route assembly, request logging and
//! the rejection handler shared by every endpoint.

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{error, info};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use super::auth::with_auth;
use super::counterparty::{
    buffered_body, counterparty_detail_handler, search_counterparties_handler, with_balances,
    with_counterparties,
};
use crate::config::Config;
use crate::error::ApiError;
use crate::loyalty::{BalanceSource, CounterpartySource, FixedBalanceTable, FixedCounterpartyDirectory};

// ============================================================================
// REQUEST LOGGING
// ============================================================================

/// Logs every completed request, including rejected ones.
fn log_request(request: warp::log::Info<'_>) {
    info!(
        method = %request.method(),
        path = request.path(),
        status = request.status().as_u16(),
        elapsed = ?request.elapsed(),
        "{} {} {}",
        request.method(),
        request.path(),
        request.status()
    );
}

// ============================================================================
// REJECTION HANDLER
// ============================================================================

/// Global rejection handler for all API routes.
///
/// Converts rejections into plain-text responses: the error text followed by a
/// newline as the body, the matching HTTP status code and `nosniff`.
///
/// # Arguments
///
/// * `rej` - The warp rejection to handle
///
/// # Returns
///
/// A warp reply with a plain-text error body
pub async fn handle_rejection(rej: Rejection) -> Result<impl Reply, std::convert::Infallible> {
    let (status, message) = if let Some(err) = rej.find::<ApiError>() {
        (err.status(), err.to_string())
    } else if rej.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if rej.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else if let Some(err) = rej.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else {
        error!("Unhandled rejection: {:?}", rej);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
    };

    Ok(warp::reply::with_header(
        warp::reply::with_status(format!("{}\n", message), status),
        "x-content-type-options",
        "nosniff",
    ))
}

// ============================================================================
// API SERVER IMPLEMENTATION
// ============================================================================

/// REST API server for the discount service.
///
/// Holds the configuration and the two lookup sources. Nothing here is
/// mutated after construction, so requests share it freely.
pub struct ApiServer {
    /// Service configuration
    config: Arc<Config>,
    /// Bonus balance lookup
    balances: Arc<dyn BalanceSource>,
    /// Counterparty search
    counterparties: Arc<dyn CounterpartySource>,
}

impl ApiServer {
    /// Creates an API server backed by the fixed lookup tables.
    pub fn new(config: Config) -> Self {
        Self::with_sources(
            config,
            Arc::new(FixedBalanceTable),
            Arc::new(FixedCounterpartyDirectory),
        )
    }

    /// Creates an API server backed by the given lookup sources.
    ///
    /// # Arguments
    ///
    /// * `config` - Service configuration
    /// * `balances` - Source of bonus balances
    /// * `counterparties` - Source of counterparty search results
    pub fn with_sources(
        config: Config,
        balances: Arc<dyn BalanceSource>,
        counterparties: Arc<dyn CounterpartySource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            balances,
            counterparties,
        }
    }

    /// Binds the configured address and serves requests until shutdown.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Server stopped
    /// * `Err(anyhow::Error)` - Invalid address or bind failure
    pub async fn run(&self) -> Result<()> {
        let ip: IpAddr = self
            .config
            .api
            .host
            .parse()
            .context("Failed to parse API server address")?;
        let addr = SocketAddr::new(ip, self.config.api.port);

        let routes = self.create_routes();
        let (bound, server) = warp::serve(routes)
            .try_bind_ephemeral(addr)
            .with_context(|| format!("Failed to bind API server to {}", addr))?;

        info!("Server listen on port :{}", bound.port());
        server.await;

        Ok(())
    }

    /// Creates all API routes for the server.
    ///
    /// The auth gate runs before route matching, so an unauthenticated request
    /// gets 401 even for an unknown path.
    pub(crate) fn create_routes(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
        let auth_header: Arc<str> = Arc::from(self.config.api.auth_header.as_str());

        // POST /counterparty/detail - bonus balance for a counterparty at a store
        let detail = warp::path!("counterparty" / "detail")
            .and(warp::post())
            .and(buffered_body())
            .and(with_balances(self.balances.clone()))
            .and_then(counterparty_detail_handler);

        // GET /counterparty?search=... - counterparty search
        let search = warp::path("counterparty")
            .and(warp::path::end())
            .and(warp::get())
            .and(warp::query::<Vec<(String, String)>>())
            .and(with_counterparties(self.counterparties.clone()))
            .and_then(search_counterparties_handler);

        with_auth(auth_header)
            .and(detail.or(search))
            .recover(handle_rejection)
            .with(warp::log::custom(log_request))
    }

    /// Public method for testing - exposes routes for integration tests
    pub fn test_routes(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
        self.create_routes()
    }
}
