//! Discount API Service Library
//!
//! This crate provides a loyalty-program backend stub for point-of-sale
//! clients. It answers counterparty searches and bonus balance queries from
//! fixed tables; both lookups sit behind traits so a real backend can replace
//! them without touching the HTTP layer.

pub mod api;
pub mod config;
pub mod error;
pub mod loyalty;

// Re-export commonly used types
pub use api::ApiServer;
pub use config::{ApiConfig, Config};
pub use error::ApiError;
pub use loyalty::{
    BalanceSource, Counterparty, CounterpartySource, FixedBalanceTable, FixedCounterpartyDirectory,
    KNOWN_COUNTERPARTY_ID, KNOWN_RETAIL_STORE_ID,
};
