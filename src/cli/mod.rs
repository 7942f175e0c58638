//! Command handlers for the simulator binary

pub mod commands;

pub use commands::{
    cmd_allowance, cmd_approve, cmd_balance, cmd_info, cmd_init, cmd_transfer, cmd_transfer_from,
    AppState, CliResult,
};
