//! `stockpile-core` — domain building blocks shared by the inventory crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod item_name;

pub use error::{DomainError, DomainResult};
pub use item_name::ItemName;
