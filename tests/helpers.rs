//! Shared test helpers for integration tests
//!
//! - **Constants**: identifiers and tokens used across tests
//! - **Builders**: test configuration, API server and request bodies

#![allow(dead_code)]

use discount_api::{ApiServer, Config};
use serde_json::json;
use std::collections::HashMap;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Auth header expected by the test server
pub const TEST_AUTH_HEADER: &str = "Lognex-Discount-API-Auth-Token";

/// Any non-empty token passes the gate
pub const DUMMY_AUTH_TOKEN: &str = "0123456789abcdef";

/// Counterparty identifier that is not in the fixed table
pub const DUMMY_COUNTERPARTY_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Retail store identifier that is not in the fixed table
pub const DUMMY_RETAIL_STORE_ID: &str = "00000000-0000-0000-0000-000000000002";

// ============================================================================
// BUILDERS
// ============================================================================

/// Build a configuration with the default auth header and a fixed port
pub fn build_test_config() -> Config {
    let mut config = Config::default();
    config.api.host = "127.0.0.1".to_string();
    config.api.port = 3333;
    config
}

/// Create an API server backed by the fixed lookup tables
pub fn create_test_api_server() -> ApiServer {
    ApiServer::new(build_test_config())
}

/// Build a detail request body carrying only the two identifiers
pub fn detail_request_body(retail_store_id: &str, counterparty_id: &str) -> serde_json::Value {
    json!({
        "retailStore": { "meta": { "id": retail_store_id } },
        "meta": { "id": counterparty_id }
    })
}

/// Build an environment lookup closure over fixed key/value pairs
pub fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}
