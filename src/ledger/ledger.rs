//! Balance and allowance bookkeeping over host storage
//!
//! Amounts persist as 16-byte little-endian values under prefixed keys:
//! `b:{account}` for balances, `a:{owner}:{spender}` for allowances, and a
//! bare `initialized` flag. An absent key reads as zero. Each operation is a
//! single synchronous read-modify-write; the host serializes invocations and
//! discards all writes of a failed one, so no partial state is ever observed.

use crate::host::HostAdapter;
use crate::math::{MathError, SafeU128};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel "from" identity on the genesis mint event
pub const GENESIS: &str = "";

const INIT_KEY: &str = "initialized";

/// Ledger-level errors. Any error aborts the whole invocation; partial token
/// movement would break value conservation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: SafeU128, need: SafeU128 },
    #[error("Insufficient allowance: have {have}, need {need}")]
    InsufficientAllowance { have: SafeU128, need: SafeU128 },
    #[error("Already initialized")]
    AlreadyInitialized,
    #[error("Corrupt ledger entry at {key}: expected 16 bytes, found {len}")]
    CorruptEntry { key: String, len: usize },
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Transfer event (also emitted through the host log)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: String,
    pub to: String,
    pub amount: SafeU128,
}

/// Approval event (also emitted through the host log)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalEvent {
    pub owner: String,
    pub spender: String,
    pub amount: SafeU128,
}

fn balance_key(account: &str) -> String {
    format!("b:{}", account)
}

fn allowance_key(owner: &str, spender: &str) -> String {
    format!("a:{}:{}", owner, spender)
}

/// The token ledger: balances, allowances, and the one-time mint flag.
///
/// Generic over the host environment; tests run it against an in-memory
/// host, the simulator against a file-backed one.
pub struct Ledger<H: HostAdapter> {
    host: H,
    total_supply: SafeU128,
}

impl<H: HostAdapter> Ledger<H> {
    /// Create a ledger over `host` with a fixed total supply
    pub fn new(host: H, total_supply: SafeU128) -> Self {
        Self { host, total_supply }
    }

    /// Borrow the host environment
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host environment
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the ledger, returning the host
    pub fn into_host(self) -> H {
        self.host
    }

    // =========================================================================
    // Queries (never fail; absent entries read as zero)
    // =========================================================================

    /// The fixed supply minted at initialization
    pub fn total_supply(&self) -> SafeU128 {
        self.total_supply
    }

    /// Whether the one-time mint has happened
    pub fn is_initialized(&self) -> bool {
        self.host.storage_has_key(INIT_KEY)
    }

    /// Balance of `account`, zero if it has no entry
    pub fn balance_of(&self, account: &str) -> SafeU128 {
        self.read_amount(&balance_key(account)).unwrap_or_default()
    }

    /// Amount `spender` may still move on behalf of `owner`, zero if unset.
    /// Independent of `owner`'s balance; checked against it only at spend time.
    pub fn allowance(&self, owner: &str, spender: &str) -> SafeU128 {
        self.read_amount(&allowance_key(owner, spender))
            .unwrap_or_default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// One-time mint: credit the full supply to `caller` and set the flag.
    ///
    /// Must be the first accepted mutation of a fresh ledger; a second call
    /// fails with [`LedgerError::AlreadyInitialized`]. Other mutators are not
    /// gated on the flag; before `init` they simply see an all-zero ledger.
    pub fn init(&mut self, caller: &str) -> Result<TransferEvent, LedgerError> {
        if self.is_initialized() {
            return Err(LedgerError::AlreadyInitialized);
        }

        self.write_amount(&balance_key(caller), self.total_supply);
        self.host.storage_set(INIT_KEY, &[1]);

        debug!("minted {} to {}", self.total_supply, caller);
        Ok(self.emit_transfer(GENESIS, caller, self.total_supply))
    }

    /// Move `amount` from `caller` to `to`
    pub fn transfer(
        &mut self,
        caller: &str,
        to: &str,
        amount: SafeU128,
    ) -> Result<TransferEvent, LedgerError> {
        let caller_balance = self.read_amount(&balance_key(caller))?;
        if amount > caller_balance {
            return Err(LedgerError::InsufficientBalance {
                have: caller_balance,
                need: amount,
            });
        }

        self.move_balance(caller, to, amount, caller_balance)?;
        Ok(self.emit_transfer(caller, to, amount))
    }

    /// Set (overwrite, not accumulate) the allowance for `(caller, spender)`.
    ///
    /// Direct overwrite carries the classic ERC20 approve race: a spender who
    /// sees the old allowance can spend against old and new limits around a
    /// concurrent re-approval. Callers relying on exact-overwrite semantics
    /// are the reason this is kept as-is.
    pub fn approve(
        &mut self,
        caller: &str,
        spender: &str,
        amount: SafeU128,
    ) -> Result<ApprovalEvent, LedgerError> {
        self.write_amount(&allowance_key(caller, spender), amount);

        let event = ApprovalEvent {
            owner: caller.to_string(),
            spender: spender.to_string(),
            amount,
        };
        self.host.emit_log(&format!(
            "Approval: {} -> {} : {}",
            event.owner, event.spender, event.amount
        ));
        Ok(event)
    }

    /// Move `amount` from `from` to `to`, spending `caller`'s allowance
    pub fn transfer_from(
        &mut self,
        caller: &str,
        from: &str,
        to: &str,
        amount: SafeU128,
    ) -> Result<TransferEvent, LedgerError> {
        let current_allowance = self.read_amount(&allowance_key(from, caller))?;
        if amount > current_allowance {
            return Err(LedgerError::InsufficientAllowance {
                have: current_allowance,
                need: amount,
            });
        }

        let from_balance = self.read_amount(&balance_key(from))?;
        if amount > from_balance {
            return Err(LedgerError::InsufficientBalance {
                have: from_balance,
                need: amount,
            });
        }

        let remaining = current_allowance.sub(amount)?;
        self.write_amount(&allowance_key(from, caller), remaining);

        self.move_balance(from, to, amount, from_balance)?;
        Ok(self.emit_transfer(from, to, amount))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Debit `from` and credit `to`, both checked. `from_balance` is the
    /// already-read balance of `from`, verified to cover `amount`.
    fn move_balance(
        &mut self,
        from: &str,
        to: &str,
        amount: SafeU128,
        from_balance: SafeU128,
    ) -> Result<(), LedgerError> {
        let debited = from_balance.sub(amount)?;

        // A same-account transfer must net out: the credit starts from the
        // debited balance, not a stale read that would resurrect the debit.
        let to_balance = if from == to {
            debited
        } else {
            self.read_amount(&balance_key(to))?
        };
        let credited = to_balance.add(amount)?;

        self.write_amount(&balance_key(from), debited);
        self.write_amount(&balance_key(to), credited);
        Ok(())
    }

    fn emit_transfer(&mut self, from: &str, to: &str, amount: SafeU128) -> TransferEvent {
        let event = TransferEvent {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        };
        self.host.emit_log(&format!(
            "Transfer: {} -> {} : {}",
            event.from, event.to, event.amount
        ));
        event
    }

    fn read_amount(&self, key: &str) -> Result<SafeU128, LedgerError> {
        match self.host.storage_get(key) {
            None => Ok(SafeU128::ZERO),
            Some(bytes) => {
                let raw: [u8; 16] = bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| LedgerError::CorruptEntry {
                        key: key.to_string(),
                        len: bytes.len(),
                    })?;
                Ok(SafeU128::from_raw(u128::from_le_bytes(raw)))
            }
        }
    }

    fn write_amount(&mut self, key: &str, amount: SafeU128) {
        self.host.storage_set(key, &amount.raw().to_le_bytes());
    }
}
