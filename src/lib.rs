//! Token-Ledger: an ERC-20 style fungible-token ledger in Rust
//!
//! This crate implements a fixed-supply fungible token designed to run as
//! guest code inside a host environment (a blockchain virtual machine) that
//! supplies an authenticated caller identity, persistent key/value storage,
//! and log emission per invocation. It features:
//! - Overflow-safe 128-bit arithmetic for every balance operation
//! - Balance and allowance bookkeeping with value conservation
//! - One-time mint of the full supply to the deploying caller
//! - A host interface trait with in-memory and file-backed adapters
//! - A CLI that simulates the host for local experimentation
//!
//! # Example
//!
//! ```rust
//! use token_ledger::contract::TokenContract;
//! use token_ledger::host::InMemoryHost;
//! use token_ledger::math::SafeU128;
//!
//! // The host authenticates the caller before dispatching to the contract
//! let host = InMemoryHost::new("deployer");
//! let mut contract = TokenContract::new(host);
//!
//! // Mint the fixed supply, then move some of it
//! contract.init().unwrap();
//! contract.transfer("alice", SafeU128::from_raw(1_000)).unwrap();
//!
//! assert_eq!(contract.balance_of("alice"), SafeU128::from_raw(1_000));
//! ```

pub mod cli;
pub mod contract;
pub mod host;
pub mod ledger;
pub mod math;

// Re-export commonly used types
pub use contract::{TokenContract, TokenMetadata};
pub use host::{FileHost, HostAdapter, InMemoryHost};
pub use ledger::{ApprovalEvent, Ledger, LedgerError, TransferEvent};
pub use math::{MathError, SafeU128};
