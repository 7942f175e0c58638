//! Overflow-safe 128-bit unsigned arithmetic
//!
//! Token balances are security-critical: a silent wraparound would create or
//! destroy supply. Every arithmetic step in the ledger goes through
//! [`SafeU128`], which returns an error instead of wrapping.

pub mod uint;

pub use uint::{MathError, SafeU128};
