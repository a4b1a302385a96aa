// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # CLINK Harness
//!
//! Entry point for the `clink` binary. This is the invocation layer the
//! ledger core was built against: it authenticates nobody and persists
//! nothing — it simply constructs a ledger, plays the role of each caller
//! in turn, and shows the results.
//!
//! The `demo` subcommand mirrors the deployment script: construct with a
//! genesis supply, hand the minter and pauser roles to accounts other than
//! the deployer, then walk the full operation surface — mint, transfer,
//! approve, delegated transfer, pause/unpause, burn — and dump the event
//! journal.

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;

use clink_ledger::address::{Address, ADDRESS_LENGTH};
use clink_ledger::config;
use clink_ledger::error::LedgerError;
use clink_ledger::ledger::Ledger;
use clink_ledger::roles::Role;

use cli::{ClinkCli, Commands, DemoArgs};

fn main() -> Result<()> {
    let cli = ClinkCli::parse();

    match cli.command {
        Commands::Demo(args) => run_demo(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Derives a deterministic demo address from a short tag. Tags longer
/// than the address width are truncated.
fn demo_address(tag: &str) -> Address {
    let mut bytes = [0u8; ADDRESS_LENGTH];
    for (slot, byte) in bytes.iter_mut().zip(tag.bytes()) {
        *slot = byte;
    }
    Address::from_bytes(bytes)
}

/// Runs the scripted deployment scenario.
fn run_demo(args: DemoArgs) -> Result<()> {
    logging::init_logging("clink=info,clink_ledger=debug", args.log_format);

    let deployer = demo_address("clink-deployer");
    let minter = demo_address("clink-minter");
    let pauser = demo_address("clink-pauser");
    let alice = demo_address("clink-alice");
    let bob = demo_address("clink-bob");

    let initial_supply = config::whole_tokens(args.initial_supply);
    let max_supply = config::whole_tokens(args.max_supply);

    tracing::info!(
        deployer = %deployer,
        initial_supply = args.initial_supply,
        max_supply = args.max_supply,
        "deploying ledger"
    );
    let mut ledger =
        Ledger::new(deployer, initial_supply, max_supply).context("failed to deploy ledger")?;

    // Hand operational roles to dedicated accounts — the deployer keeps
    // administration, day-to-day levers live elsewhere.
    ledger
        .grant_role(deployer, Role::Minter, minter)
        .context("failed to grant minter role")?;
    ledger
        .grant_role(deployer, Role::Pauser, pauser)
        .context("failed to grant pauser role")?;
    tracing::info!(minter = %minter, pauser = %pauser, "operational roles granted");

    // Mint fresh supply to alice.
    let minted = config::whole_tokens(1_000);
    ledger
        .mint(minter, alice, minted)
        .context("mint to alice failed")?;

    // Direct transfer deployer -> bob.
    let transferred = config::whole_tokens(2_500);
    ledger
        .transfer(deployer, bob, transferred)
        .context("transfer to bob failed")?;

    // Delegated transfer: alice approves bob, bob spends half of it.
    ledger
        .approve(alice, bob, config::whole_tokens(400))
        .context("approval failed")?;
    ledger
        .transfer_from(bob, alice, bob, config::whole_tokens(200))
        .context("delegated transfer failed")?;

    // Pause round-trip: while paused, transfers bounce and supply
    // control keeps working.
    ledger.pause(pauser).context("pause failed")?;
    match ledger.transfer(deployer, alice, config::whole_tokens(1)) {
        Err(LedgerError::Paused) => {
            tracing::info!("transfer rejected while paused, as designed")
        }
        Err(other) => return Err(other).context("unexpected rejection while paused"),
        Ok(()) => bail!("transfer unexpectedly succeeded while paused"),
    }
    ledger
        .mint(minter, alice, config::whole_tokens(50))
        .context("mint while paused failed")?;
    ledger.unpause(pauser).context("unpause failed")?;

    // Alice burns part of her holdings.
    ledger
        .burn(alice, config::whole_tokens(100))
        .context("burn failed")?;

    println!("Demo run complete.");
    println!("  Token          : {} ({})", ledger.name(), ledger.symbol());
    println!("  Total supply   : {}", ledger.total_supply());
    println!("  Max supply     : {}", ledger.max_supply());
    println!("  Deployer       : {}", ledger.balance_of(deployer));
    println!("  Alice          : {}", ledger.balance_of(alice));
    println!("  Bob            : {}", ledger.balance_of(bob));
    println!("  Alice -> Bob   : {} allowed", ledger.allowance(alice, bob));
    println!("  Events emitted : {}", ledger.events().len());

    if !args.no_journal {
        let journal =
            serde_json::to_string_pretty(ledger.events()).context("failed to encode journal")?;
        println!("{}", journal);
    }

    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("clink {}", env!("CARGO_PKG_VERSION"));
    println!(
        "token {} ({}, {} decimals)",
        config::TOKEN_NAME,
        config::TOKEN_SYMBOL,
        config::TOKEN_DECIMALS
    );
}
