//! Fungible-token ledger
//!
//! Owns the two persistent mappings, balances (account -> amount) and
//! allowances (owner -> spender -> amount), plus the one-time initialization
//! flag, all stored through the host's key/value interface. Every mutation of
//! token state in the crate goes through [`Ledger`].
//!
//! # Example
//!
//! ```
//! use token_ledger::host::InMemoryHost;
//! use token_ledger::ledger::Ledger;
//! use token_ledger::math::SafeU128;
//!
//! let host = InMemoryHost::new("deployer");
//! let mut ledger = Ledger::new(host, SafeU128::from_raw(1_000_000));
//!
//! // Mint the full supply to the deployer
//! ledger.init("deployer").unwrap();
//!
//! // Move some of it
//! ledger.transfer("deployer", "alice", SafeU128::from_raw(250)).unwrap();
//! assert_eq!(ledger.balance_of("alice"), SafeU128::from_raw(250));
//! ```

pub mod ledger;

pub use ledger::{ApprovalEvent, Ledger, LedgerError, TransferEvent, GENESIS};
