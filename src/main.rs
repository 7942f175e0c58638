//! Token-Ledger CLI Application
//!
//! A local simulator for the token contract: it plays the role of the host
//! environment, supplying the caller identity and a file-backed key/value
//! store, and dispatches one contract invocation per run.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use token_ledger::cli::{self, AppState};

#[derive(Parser)]
#[command(name = "token-ledger")]
#[command(version = "0.1.0")]
#[command(about = "An ERC-20 style token ledger with a simulated host", long_about = None)]
struct Cli {
    /// Data directory for contract storage
    #[arg(short, long, default_value = ".token_ledger_data")]
    data_dir: PathBuf,

    /// Caller identity for this invocation (the host would authenticate this)
    #[arg(short, long, default_value = "deployer")]
    caller: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-time mint of the full supply to the caller
    Init,

    /// Show token metadata
    Info,

    /// Show the balance of an account
    Balance {
        /// Account to query
        account: String,
    },

    /// Show the allowance granted by an owner to a spender
    Allowance {
        /// Owner account
        owner: String,
        /// Spender account
        spender: String,
    },

    /// Transfer tokens from the caller to an account
    Transfer {
        /// Recipient account
        to: String,
        /// Amount in base units (decimal)
        amount: String,
    },

    /// Set the caller's allowance for a spender
    Approve {
        /// Spender account
        spender: String,
        /// Amount in base units (decimal)
        amount: String,
    },

    /// Transfer tokens between accounts against the caller's allowance
    TransferFrom {
        /// Owner account to debit
        from: String,
        /// Recipient account
        to: String,
        /// Amount in base units (decimal)
        amount: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let state = AppState::open(args.data_dir, &args.caller)?;

    match args.command {
        Commands::Init => cli::cmd_init(state),
        Commands::Info => cli::cmd_info(&state),
        Commands::Balance { account } => cli::cmd_balance(&state, &account),
        Commands::Allowance { owner, spender } => cli::cmd_allowance(&state, &owner, &spender),
        Commands::Transfer { to, amount } => cli::cmd_transfer(state, &to, &amount),
        Commands::Approve { spender, amount } => cli::cmd_approve(state, &spender, &amount),
        Commands::TransferFrom { from, to, amount } => {
            cli::cmd_transfer_from(state, &from, &to, &amount)
        }
    }
}
