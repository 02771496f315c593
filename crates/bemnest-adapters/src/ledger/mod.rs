//! Ledger storage adapters.

mod json;

pub use json::{JsonLedgerStore, encode_record};
