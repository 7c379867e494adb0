//! Test module organization
//!
//! This module re-exports test helpers for use in test files.

mod helpers;

#[allow(unused_imports)]
pub use helpers::{
    build_test_config, create_test_api_server, detail_request_body, env_lookup, DUMMY_AUTH_TOKEN,
    DUMMY_COUNTERPARTY_ID, DUMMY_RETAIL_STORE_ID, TEST_AUTH_HEADER,
};
