//! # CLI Interface
//!
//! Defines the command-line argument structure for the `clink` binary
//! using `clap` derive. Two subcommands: `demo` and `version`.

use clap::{Parser, Subcommand};

use crate::logging::LogFormat;

/// CLINK ledger command-line harness.
///
/// Constructs an in-process ledger and drives it through a scripted
/// deployment scenario: role grants, minting, transfers, delegated
/// transfers, a pause round-trip, and a burn. The resulting event journal
/// is printed as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "clink",
    about = "CLINK ledger command-line harness",
    version,
    propagate_version = true
)]
pub struct ClinkCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the CLINK binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scripted deployment scenario against a fresh ledger.
    Demo(DemoArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Genesis issuance, in whole tokens, credited to the deployer.
    #[arg(long, env = "CLINK_INITIAL_SUPPLY", default_value_t = 100_000_000)]
    pub initial_supply: u64,

    /// Hard supply cap, in whole tokens. Immutable once the ledger exists.
    #[arg(long, env = "CLINK_MAX_SUPPLY", default_value_t = 1_000_000_000)]
    pub max_supply: u64,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Skip the JSON journal dump at the end of the run.
    #[arg(long)]
    pub no_journal: bool,
}
