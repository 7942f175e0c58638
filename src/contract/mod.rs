//! Contract entrypoint surface
//!
//! The thin layer the host dispatcher talks to: resolves the caller identity
//! from the host context, applies the build-time token metadata, and
//! delegates every operation to the [`crate::ledger::Ledger`]. Raw
//! argument/result buffer marshaling belongs to the host ABI, not here.

pub mod token;

pub use token::{TokenContract, TokenMetadata, DECIMALS, NAME, SYMBOL, TOTAL_SUPPLY};
