//! CLI command handlers
//!
//! Each command is one simulated invocation: open the file-backed host as the
//! chosen caller, run a single contract entrypoint, persist the snapshot.

use crate::contract::TokenContract;
use crate::host::{FileHost, FileHostConfig, HostAdapter};
use crate::math::SafeU128;
use std::path::PathBuf;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// One invocation's worth of application state
pub struct AppState {
    pub contract: TokenContract<FileHost>,
}

impl AppState {
    /// Open the contract state under `data_dir`, invoking as `caller`
    pub fn open(data_dir: PathBuf, caller: &str) -> CliResult<Self> {
        let config = FileHostConfig {
            data_dir,
            ..Default::default()
        };
        let host = FileHost::open(config, caller)?;
        Ok(Self {
            contract: TokenContract::new(host),
        })
    }

    /// Persist the storage snapshot
    pub fn save(self) -> CliResult<()> {
        let mut host = self.contract.into_host();
        host.save()?;
        Ok(())
    }
}

pub fn cmd_init(mut state: AppState) -> CliResult<()> {
    state.contract.init()?;
    let caller = state.contract.ledger().host().current_caller();
    println!(
        "✅ Initialized: {} {} minted to {}",
        state.contract.total_supply(),
        state.contract.symbol(),
        caller
    );
    state.save()
}

pub fn cmd_info(state: &AppState) -> CliResult<()> {
    let meta = state.contract.metadata();
    println!("Name:         {}", meta.name);
    println!("Symbol:       {}", meta.symbol);
    println!("Decimals:     {}", meta.decimals);
    println!("Total supply: {}", meta.total_supply);
    println!(
        "Initialized:  {}",
        if state.contract.ledger().is_initialized() {
            "yes"
        } else {
            "no"
        }
    );
    Ok(())
}

pub fn cmd_balance(state: &AppState, account: &str) -> CliResult<()> {
    println!("{}", state.contract.balance_of(account));
    Ok(())
}

pub fn cmd_allowance(state: &AppState, owner: &str, spender: &str) -> CliResult<()> {
    println!("{}", state.contract.allowance(owner, spender));
    Ok(())
}

pub fn cmd_transfer(mut state: AppState, to: &str, amount: &str) -> CliResult<()> {
    let amount: SafeU128 = amount.parse()?;
    state.contract.transfer(to, amount)?;
    println!("✅ Transferred {} to {}", amount, to);
    state.save()
}

pub fn cmd_approve(mut state: AppState, spender: &str, amount: &str) -> CliResult<()> {
    let amount: SafeU128 = amount.parse()?;
    state.contract.approve(spender, amount)?;
    println!("✅ Approved {} for {}", amount, spender);
    state.save()
}

pub fn cmd_transfer_from(mut state: AppState, from: &str, to: &str, amount: &str) -> CliResult<()> {
    let amount: SafeU128 = amount.parse()?;
    state.contract.transfer_from(from, to, amount)?;
    println!("✅ Transferred {} from {} to {}", amount, from, to);
    state.save()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_state_persists_across_invocations() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().to_path_buf();

        cmd_init(AppState::open(data_dir.clone(), "deployer").unwrap()).unwrap();

        let state = AppState::open(data_dir.clone(), "deployer").unwrap();
        cmd_transfer(state, "alice", "1000").unwrap();

        let state = AppState::open(data_dir, "anyone").unwrap();
        assert_eq!(
            state.contract.balance_of("alice"),
            SafeU128::from_raw(1000)
        );
    }

    #[test]
    fn test_double_init_fails_across_invocations() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().to_path_buf();

        cmd_init(AppState::open(data_dir.clone(), "deployer").unwrap()).unwrap();

        let result = cmd_init(AppState::open(data_dir, "mallory").unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_amount_rejected() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().to_path_buf();

        cmd_init(AppState::open(data_dir.clone(), "deployer").unwrap()).unwrap();

        let state = AppState::open(data_dir, "deployer").unwrap();
        let result = cmd_transfer(state, "alice", "not-a-number");
        assert!(result.is_err());
    }
}
