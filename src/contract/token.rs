//! ERC-20 style entrypoints with build-time metadata
//!
//! Caller identity always comes from the host context and is never a
//! parameter of an entrypoint. Mutating entrypoints return `true` on success,
//! matching the standard ERC-20 surface; errors abort the invocation.

use crate::host::HostAdapter;
use crate::ledger::{Ledger, LedgerError};
use crate::math::SafeU128;
use serde::{Deserialize, Serialize};

/// Token name
pub const NAME: &str = "My Token";
/// Token symbol
pub const SYMBOL: &str = "MTK";
/// Decimal places
pub const DECIMALS: u8 = 18;
/// Fixed total supply in base units: one million whole tokens
pub const TOTAL_SUPPLY: u128 = 1_000_000_000_000_000_000_000_000;

/// Snapshot of the build-time token metadata
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: SafeU128,
}

/// The deployed token contract.
///
/// Wraps a [`Ledger`] over the host it was dispatched with.
pub struct TokenContract<H: HostAdapter> {
    ledger: Ledger<H>,
}

impl<H: HostAdapter> TokenContract<H> {
    /// Bind the contract to a host environment
    pub fn new(host: H) -> Self {
        Self {
            ledger: Ledger::new(host, SafeU128::from_raw(TOTAL_SUPPLY)),
        }
    }

    /// Borrow the underlying ledger
    pub fn ledger(&self) -> &Ledger<H> {
        &self.ledger
    }

    /// Consume the contract, returning the host
    pub fn into_host(self) -> H {
        self.ledger.into_host()
    }

    // =========================================================================
    // Query entrypoints (read-only, never fail)
    // =========================================================================

    pub fn name(&self) -> &'static str {
        NAME
    }

    pub fn symbol(&self) -> &'static str {
        SYMBOL
    }

    pub fn decimals(&self) -> u8 {
        DECIMALS
    }

    pub fn total_supply(&self) -> SafeU128 {
        self.ledger.total_supply()
    }

    pub fn balance_of(&self, account: &str) -> SafeU128 {
        self.ledger.balance_of(account)
    }

    pub fn allowance(&self, owner: &str, spender: &str) -> SafeU128 {
        self.ledger.allowance(owner, spender)
    }

    /// All metadata in one struct, for display surfaces
    pub fn metadata(&self) -> TokenMetadata {
        TokenMetadata {
            name: NAME.to_string(),
            symbol: SYMBOL.to_string(),
            decimals: DECIMALS,
            total_supply: self.total_supply(),
        }
    }

    // =========================================================================
    // Mutating entrypoints (caller taken from the host context)
    // =========================================================================

    /// One-time mint of the full supply to the calling account
    pub fn init(&mut self) -> Result<bool, LedgerError> {
        let caller = self.ledger.host().current_caller();
        self.ledger.init(&caller)?;
        Ok(true)
    }

    /// Transfer `amount` from the caller to `to`
    pub fn transfer(&mut self, to: &str, amount: SafeU128) -> Result<bool, LedgerError> {
        let caller = self.ledger.host().current_caller();
        self.ledger.transfer(&caller, to, amount)?;
        Ok(true)
    }

    /// Authorize `spender` to move up to `amount` of the caller's balance
    pub fn approve(&mut self, spender: &str, amount: SafeU128) -> Result<bool, LedgerError> {
        let caller = self.ledger.host().current_caller();
        self.ledger.approve(&caller, spender, amount)?;
        Ok(true)
    }

    /// Move `amount` from `from` to `to` against the caller's allowance
    pub fn transfer_from(
        &mut self,
        from: &str,
        to: &str,
        amount: SafeU128,
    ) -> Result<bool, LedgerError> {
        let caller = self.ledger.host().current_caller();
        self.ledger.transfer_from(&caller, from, to, amount)?;
        Ok(true)
    }
}
