// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # CLINK Ledger — Core Library
//!
//! A fungible-value ledger with administrative controls: a single asset,
//! per-account balances, allowance-based delegated transfers, role-gated
//! mint and burn against a hard supply cap, and a pause switch that halts
//! balance movement without halting administration.
//!
//! The whole thing is one synchronous state machine. An external caller —
//! which has already authenticated the caller's identity — invokes one
//! operation at a time against a [`ledger::Ledger`] held by `&mut`. Every
//! operation either completes (all checks, all mutations, all event
//! records) or fails with a specific [`error::LedgerError`] and touches
//! nothing. There is no ambient state: two ledgers in the same process are
//! fully independent, which is exactly what the test suite leans on.
//!
//! ## Architecture
//!
//! - **address** — Fixed-width account identities. The zero address is the
//!   mint/burn sentinel and never a valid recipient.
//! - **roles** — Who may do what. Roles are data (sets of addresses), not
//!   types; the administrator role governs all grants, including its own.
//! - **pause** — The kill switch. Strict semantics: pausing a paused ledger
//!   is an error, not a shrug.
//! - **supply** — Total issuance against an immutable cap. Mint is
//!   role-gated; burn only ever targets the caller's own funds.
//! - **accounts** — Balances and allowances. Transfer and delegated
//!   transfer consult the pause gate; approve does not.
//! - **ledger** — The facade that wires the four components together and
//!   appends event records after every successful mutation.
//! - **events** — The append-only journal. Observers read it; the core
//!   never does.
//! - **config** — Token constants. Magic numbers live here and nowhere else.
//!
//! ## Design Principles
//!
//! 1. All monetary arithmetic is checked — wrapping arithmetic and money
//!    do not mix.
//! 2. Check-then-act: every precondition is verified before the first
//!    mutation, so a failed operation leaves state byte-for-byte unchanged.
//! 3. Errors are specific. Callers assert on the exact rejection reason,
//!    never on "it failed".
//! 4. Every public type is serializable (serde) for wire transport and
//!    persistent storage.

pub mod accounts;
pub mod address;
pub mod config;
pub mod error;
pub mod events;
pub mod ledger;
pub mod pause;
pub mod roles;
pub mod supply;
