//! Loyalty Program Module
//!
//! Data transfer records exchanged with the point-of-sale client and the
//! lookup sources that answer balance and counterparty queries.

pub mod balance;
pub mod counterparty;
pub mod types;

pub use balance::{BalanceSource, FixedBalanceTable};
pub use counterparty::{CounterpartySource, FixedCounterpartyDirectory};
pub use types::{
    BonusProgram, Counterparty, CounterpartyCollection, DetailedCounterpartyRequest,
    DetailedCounterpartyResponse, EntityMeta, RetailStoreRef,
};

// ============================================================================
// KNOWN IDENTIFIERS
// ============================================================================

/// UUID of the one counterparty the stub knows about.
pub const KNOWN_COUNTERPARTY_ID: &str = "ff7e357d-20bc-11eb-0a80-03e30004b971";

/// UUID of the one retail store the stub knows about.
pub const KNOWN_RETAIL_STORE_ID: &str = "87016576-f678-11e9-0a80-048c000a78b1";
