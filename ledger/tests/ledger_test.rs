//! Integration tests for the ledger state machine.
//!
//! These tests exercise full operation sequences across module boundaries,
//! simulating the deployment harness: construct as a deployer, hand roles
//! to separate accounts, then move value around and assert on balances,
//! supply, and the emitted journal.

use clink_ledger::address::Address;
use clink_ledger::error::LedgerError;
use clink_ledger::events::Event;
use clink_ledger::ledger::Ledger;
use clink_ledger::roles::Role;

const INITIAL_SUPPLY: u128 = 100_000_000;
const MAX_SUPPLY: u128 = 1_000_000_000;

fn deployer() -> Address {
    Address::from_bytes([0x01; 20])
}

fn minter() -> Address {
    Address::from_bytes([0x02; 20])
}

fn pauser() -> Address {
    Address::from_bytes([0x03; 20])
}

fn user() -> Address {
    Address::from_bytes([0x04; 20])
}

/// Helper: deployed ledger with minter/pauser roles granted to separate
/// accounts, the way the deployment harness sets things up.
fn deployed() -> Ledger {
    let mut ledger = Ledger::new(deployer(), INITIAL_SUPPLY, MAX_SUPPLY).unwrap();
    ledger.grant_role(deployer(), Role::Minter, minter()).unwrap();
    ledger.grant_role(deployer(), Role::Pauser, pauser()).unwrap();
    ledger
}

/// Sum of balances over every account these tests ever touch.
fn held_by_all(ledger: &Ledger) -> u128 {
    [deployer(), minter(), pauser(), user()]
        .iter()
        .map(|a| ledger.balance_of(*a))
        .sum()
}

// ---------------------------------------------------------------------------
// Deployment
// ---------------------------------------------------------------------------

#[test]
fn deployment_credits_initial_supply_to_deployer() {
    let ledger = deployed();
    assert_eq!(ledger.balance_of(deployer()), INITIAL_SUPPLY);
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
    assert_eq!(ledger.max_supply(), MAX_SUPPLY);
}

#[test]
fn deployment_grants_admin_to_deployer() {
    let ledger = deployed();
    assert!(ledger.has_role(Role::Admin, deployer()));
    // Role assignment is decoupled from construction identity.
    assert!(ledger.has_role(Role::Minter, minter()));
    assert!(ledger.has_role(Role::Pauser, pauser()));
    assert!(!ledger.has_role(Role::Admin, minter()));
}

#[test]
fn deployment_sets_metadata() {
    let ledger = deployed();
    assert_eq!(ledger.name(), "Clink");
    assert_eq!(ledger.symbol(), "CLINK");
}

#[test]
fn deployment_starts_active() {
    let ledger = deployed();
    assert!(!ledger.is_paused());
}

// ---------------------------------------------------------------------------
// Minting
// ---------------------------------------------------------------------------

#[test]
fn minter_can_mint() {
    let mut ledger = deployed();

    ledger.mint(minter(), user(), 1_000).unwrap();
    assert_eq!(ledger.balance_of(user()), 1_000);
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY + 1_000);
}

#[test]
fn non_minter_cannot_mint() {
    let mut ledger = deployed();

    let result = ledger.mint(user(), user(), 1_000);
    assert!(matches!(
        result.unwrap_err(),
        LedgerError::Unauthorized {
            role: Role::Minter,
            ..
        }
    ));
    assert_eq!(ledger.balance_of(user()), 0);
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
}

#[test]
fn mint_past_cap_rejected_and_supply_unchanged() {
    let mut ledger = deployed();
    let headroom = ledger.max_supply() - ledger.total_supply();

    let result = ledger.mint(minter(), user(), headroom + 1);
    assert!(matches!(
        result.unwrap_err(),
        LedgerError::ExceedsMaxSupply { .. }
    ));
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
    assert_eq!(ledger.balance_of(user()), 0);
}

#[test]
fn mint_up_to_cap_succeeds() {
    let mut ledger = deployed();
    let headroom = ledger.max_supply() - ledger.total_supply();

    ledger.mint(minter(), user(), headroom).unwrap();
    assert_eq!(ledger.total_supply(), ledger.max_supply());

    // The cap is now exhausted — even one more unit is too many.
    let result = ledger.mint(minter(), user(), 1);
    assert!(result.is_err());
}

#[test]
fn zero_amount_mint_still_journals() {
    let mut ledger = deployed();
    let before = ledger.events().len();

    ledger.mint(minter(), user(), 0).unwrap();
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
    assert_eq!(ledger.events().len(), before + 2);
    assert!(matches!(
        ledger.events().last().unwrap().event,
        Event::SupplyChanged { delta: 0 }
    ));
}

#[test]
fn mint_to_zero_address_rejected() {
    let mut ledger = deployed();
    let result = ledger.mint(minter(), Address::ZERO, 1_000);
    assert!(matches!(result.unwrap_err(), LedgerError::InvalidRecipient));
}

// ---------------------------------------------------------------------------
// Burning
// ---------------------------------------------------------------------------

#[test]
fn holder_can_burn_own_tokens() {
    let mut ledger = deployed();

    ledger.transfer(deployer(), user(), 1_000).unwrap();
    ledger.burn(user(), 500).unwrap();

    assert_eq!(ledger.balance_of(user()), 500);
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY - 500);
}

#[test]
fn burn_beyond_balance_rejected() {
    let mut ledger = deployed();
    ledger.transfer(deployer(), user(), 100).unwrap();

    let result = ledger.burn(user(), 200);
    assert!(matches!(
        result.unwrap_err(),
        LedgerError::InsufficientBalance {
            available: 100,
            requested: 200,
        }
    ));
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
}

#[test]
fn burn_emits_transfer_to_zero() {
    let mut ledger = deployed();
    ledger.transfer(deployer(), user(), 1_000).unwrap();
    ledger.burn(user(), 400).unwrap();

    let events: Vec<&Event> = ledger.events().iter().map(|r| &r.event).collect();
    let n = events.len();
    assert_eq!(
        *events[n - 2],
        Event::Transfer {
            from: user(),
            to: Address::ZERO,
            amount: 400,
        }
    );
    assert_eq!(*events[n - 1], Event::SupplyChanged { delta: -400 });
}

// ---------------------------------------------------------------------------
// Pausing
// ---------------------------------------------------------------------------

#[test]
fn pause_blocks_transfers_until_unpause() {
    let mut ledger = deployed();

    ledger.pause(pauser()).unwrap();
    assert!(ledger.is_paused());

    let result = ledger.transfer(deployer(), user(), 100);
    assert!(matches!(result.unwrap_err(), LedgerError::Paused));

    ledger.unpause(pauser()).unwrap();
    assert!(!ledger.is_paused());

    // The very same transfer now goes through.
    ledger.transfer(deployer(), user(), 100).unwrap();
    assert_eq!(ledger.balance_of(user()), 100);
}

#[test]
fn pause_blocks_delegated_transfers() {
    let mut ledger = deployed();
    ledger.approve(deployer(), user(), 1_000).unwrap();
    ledger.pause(pauser()).unwrap();

    let result = ledger.transfer_from(user(), deployer(), minter(), 100);
    assert!(matches!(result.unwrap_err(), LedgerError::Paused));
}

#[test]
fn non_pauser_cannot_pause() {
    let mut ledger = deployed();
    let result = ledger.pause(user());
    assert!(matches!(
        result.unwrap_err(),
        LedgerError::Unauthorized {
            role: Role::Pauser,
            ..
        }
    ));
    assert!(!ledger.is_paused());
}

#[test]
fn double_pause_and_double_unpause_rejected() {
    let mut ledger = deployed();

    ledger.pause(pauser()).unwrap();
    assert!(matches!(
        ledger.pause(pauser()).unwrap_err(),
        LedgerError::AlreadyPaused
    ));

    ledger.unpause(pauser()).unwrap();
    assert!(matches!(
        ledger.unpause(pauser()).unwrap_err(),
        LedgerError::NotPaused
    ));
}

#[test]
fn approve_mint_and_burn_proceed_while_paused() {
    let mut ledger = deployed();
    ledger.transfer(deployer(), user(), 1_000).unwrap();
    ledger.pause(pauser()).unwrap();

    // Supply control and approvals are orthogonal to the transfer freeze.
    ledger.approve(deployer(), user(), 500).unwrap();
    ledger.mint(minter(), user(), 200).unwrap();
    ledger.burn(user(), 300).unwrap();

    assert_eq!(ledger.allowance(deployer(), user()), 500);
    assert_eq!(ledger.balance_of(user()), 900);
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY - 100);
}

// ---------------------------------------------------------------------------
// Transfers
// ---------------------------------------------------------------------------

#[test]
fn transfer_between_accounts() {
    let mut ledger = deployed();

    ledger.transfer(deployer(), user(), 1_000).unwrap();
    assert_eq!(ledger.balance_of(user()), 1_000);

    ledger.transfer(user(), minter(), 1_000).unwrap();
    assert_eq!(ledger.balance_of(user()), 0);
    assert_eq!(ledger.balance_of(minter()), 1_000);
}

#[test]
fn transfer_to_zero_address_rejected() {
    let mut ledger = deployed();
    let result = ledger.transfer(deployer(), Address::ZERO, 100);
    assert!(matches!(result.unwrap_err(), LedgerError::InvalidRecipient));
}

#[test]
fn zero_amount_transfer_journals() {
    let mut ledger = deployed();
    let before = ledger.events().len();

    ledger.transfer(deployer(), user(), 0).unwrap();
    assert_eq!(ledger.events().len(), before + 1);
}

// ---------------------------------------------------------------------------
// Allowances
// ---------------------------------------------------------------------------

#[test]
fn approve_then_read_roundtrip() {
    let mut ledger = deployed();

    ledger.approve(deployer(), user(), 1_000).unwrap();
    assert_eq!(ledger.allowance(deployer(), user()), 1_000);
}

#[test]
fn delegated_transfer_decrements_allowance_exactly() {
    let mut ledger = deployed();
    ledger.approve(deployer(), user(), 1_000).unwrap();

    ledger
        .transfer_from(user(), deployer(), minter(), 500)
        .unwrap();
    assert_eq!(ledger.balance_of(minter()), 500);
    assert_eq!(ledger.allowance(deployer(), user()), 500);

    // The remaining 500 will not cover 600.
    let result = ledger.transfer_from(user(), deployer(), minter(), 600);
    assert!(matches!(
        result.unwrap_err(),
        LedgerError::InsufficientAllowance {
            approved: 500,
            requested: 600,
        }
    ));
    assert_eq!(ledger.allowance(deployer(), user()), 500);
}

#[test]
fn delegated_transfer_emits_owner_as_from() {
    let mut ledger = deployed();
    ledger.approve(deployer(), user(), 1_000).unwrap();
    ledger
        .transfer_from(user(), deployer(), minter(), 250)
        .unwrap();

    assert_eq!(
        ledger.events().last().unwrap().event,
        Event::Transfer {
            from: deployer(),
            to: minter(),
            amount: 250,
        }
    );
}

// ---------------------------------------------------------------------------
// Role Administration
// ---------------------------------------------------------------------------

#[test]
fn regranting_held_role_changes_nothing_but_the_journal() {
    let mut ledger = deployed();

    let before = ledger.events().len();
    ledger.grant_role(deployer(), Role::Minter, minter()).unwrap();
    assert!(ledger.has_role(Role::Minter, minter()));
    assert_eq!(ledger.events().len(), before + 1);
}

#[test]
fn revoking_absent_role_changes_nothing_but_the_journal() {
    let mut ledger = deployed();

    let before = ledger.events().len();
    ledger.revoke_role(deployer(), Role::Minter, user()).unwrap();
    assert!(!ledger.has_role(Role::Minter, user()));
    assert_eq!(ledger.events().len(), before + 1);
}

#[test]
fn revoked_minter_loses_capability() {
    let mut ledger = deployed();

    ledger.revoke_role(deployer(), Role::Minter, minter()).unwrap();
    let result = ledger.mint(minter(), user(), 100);
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

#[test]
fn supply_equals_sum_of_balances_through_a_workout() {
    let mut ledger = deployed();

    ledger.transfer(deployer(), user(), 10_000).unwrap();
    ledger.mint(minter(), minter(), 2_500).unwrap();
    ledger.approve(user(), minter(), 4_000).unwrap();
    ledger.transfer_from(minter(), user(), pauser(), 3_000).unwrap();
    ledger.burn(pauser(), 1_000).unwrap();
    ledger.pause(pauser()).unwrap();
    ledger.mint(minter(), user(), 123).unwrap();
    ledger.unpause(pauser()).unwrap();
    ledger.transfer(minter(), deployer(), 2_500).unwrap();

    assert_eq!(held_by_all(&ledger), ledger.total_supply());
    assert!(ledger.total_supply() <= ledger.max_supply());
}

#[test]
fn failed_operations_leave_state_unchanged() {
    let mut ledger = deployed();
    ledger.transfer(deployer(), user(), 1_000).unwrap();
    ledger.approve(user(), minter(), 200).unwrap();

    let supply = ledger.total_supply();
    let held = held_by_all(&ledger);
    let journal_len = ledger.events().len();

    // A batch of rejected operations of every kind.
    assert!(ledger.transfer(user(), minter(), 5_000).is_err());
    assert!(ledger.transfer_from(minter(), user(), pauser(), 300).is_err());
    assert!(ledger.mint(user(), user(), 100).is_err());
    assert!(ledger.burn(minter(), 1).is_err());
    assert!(ledger.pause(user()).is_err());
    assert!(ledger.grant_role(user(), Role::Admin, user()).is_err());

    assert_eq!(ledger.total_supply(), supply);
    assert_eq!(held_by_all(&ledger), held);
    assert_eq!(ledger.events().len(), journal_len);
}

// ---------------------------------------------------------------------------
// Journal
// ---------------------------------------------------------------------------

#[test]
fn journal_sequence_is_strictly_increasing() {
    let mut ledger = deployed();
    ledger.transfer(deployer(), user(), 10).unwrap();
    ledger.mint(minter(), user(), 5).unwrap();
    ledger.burn(user(), 3).unwrap();

    let seqs: Vec<u64> = ledger.events().iter().map(|r| r.seq).collect();
    for window in seqs.windows(2) {
        assert_eq!(window[1], window[0] + 1);
    }
}

#[test]
fn mint_journals_transfer_from_zero() {
    let mut ledger = deployed();
    ledger.mint(minter(), user(), 1_000).unwrap();

    let events: Vec<&Event> = ledger.events().iter().map(|r| &r.event).collect();
    let n = events.len();
    assert_eq!(
        *events[n - 2],
        Event::Transfer {
            from: Address::ZERO,
            to: user(),
            amount: 1_000,
        }
    );
    assert_eq!(*events[n - 1], Event::SupplyChanged { delta: 1_000 });
}

#[test]
fn journal_serializes_for_observers() {
    let mut ledger = deployed();
    ledger.transfer(deployer(), user(), 42).unwrap();

    let json = serde_json::to_string(ledger.events()).unwrap();
    assert!(json.contains("Transfer"));
    assert!(json.contains("42"));
}
