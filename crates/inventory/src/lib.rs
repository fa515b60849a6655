//! Inventory domain module.
//!
//! This crate contains the in-memory stock store and its rules, implemented
//! purely as deterministic domain logic (no file IO, no logging setup).
//! Persistence lives in `stockpile-infra`.

pub mod log;
pub mod store;

pub use log::{StockAdded, StockLog};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, Quantity};
