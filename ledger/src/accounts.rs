//! # Account Ledger
//!
//! Per-account balances and per-(owner, spender) allowances, with the three
//! balance-moving operations: transfer, approve, and delegated transfer.
//! Absent entries read as zero — an account "exists" the moment something
//! credits it or approves it, and never before.
//!
//! Invariants enforced here:
//!
//! - No balance or allowance is ever negative (amounts are unsigned and
//!   every debit is preceded by a sufficiency check).
//! - A transfer debits and credits atomically: every precondition, including
//!   the receiving side's range check, is verified before the first write.
//! - An allowance is a hard ceiling. Delegated transfers decrement it by
//!   exactly the amount moved; there is no "unlimited" sentinel.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::address::{address_map, allowance_map, Address};
use crate::error::LedgerError;
use crate::pause::PauseGate;

/// Balances and allowances for a single ledger instance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccountLedger {
    /// Account balances in base units. Absent entry reads as zero.
    #[serde(with = "address_map")]
    balances: HashMap<Address, u128>,

    /// Allowances keyed by (owner, spender). Absent entry reads as zero.
    #[serde(with = "allowance_map")]
    allowances: HashMap<(Address, Address), u128>,
}

impl AccountLedger {
    /// Creates an empty account ledger.
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// Returns `account`'s balance, zero for unseen accounts.
    pub fn balance_of(&self, account: Address) -> u128 {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Returns the allowance for (owner, spender), zero by default.
    pub fn allowance(&self, owner: Address, spender: Address) -> u128 {
        self.allowances.get(&(owner, spender)).copied().unwrap_or(0)
    }

    /// Sum of all balances. Equals total supply at all times — the test
    /// suite asserts exactly that.
    pub fn total_held(&self) -> u128 {
        self.balances.values().copied().sum()
    }

    /// Number of accounts with a balance entry (zero entries included).
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }

    /// Moves `amount` from `caller` to `to`.
    ///
    /// Zero-amount transfers are legal — the facade still emits a record
    /// for them.
    ///
    /// # Errors
    ///
    /// In check order: [`LedgerError::Paused`] if the gate is closed,
    /// [`LedgerError::InvalidRecipient`] if `to` is the zero address,
    /// [`LedgerError::InsufficientBalance`] if `caller` holds less than
    /// `amount`.
    pub fn transfer(
        &mut self,
        gate: &PauseGate,
        caller: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        gate.ensure_active()?;
        if to.is_zero() {
            return Err(LedgerError::InvalidRecipient);
        }
        let available = self.balance_of(caller);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        if caller != to {
            // Receiving side must stay in range before anything mutates.
            self.balance_of(to)
                .checked_add(amount)
                .ok_or(LedgerError::AmountOverflow)?;
        }
        self.debit(caller, amount)?;
        self.credit(to, amount)?;
        Ok(())
    }

    /// Sets (overwrites, never adds to) the allowance `caller` grants to
    /// `spender`. No balance check — an allowance may exceed the owner's
    /// balance — and no pause check: approvals stay open while transfers
    /// are halted.
    pub fn approve(&mut self, caller: Address, spender: Address, amount: u128) {
        self.allowances.insert((caller, spender), amount);
    }

    /// Moves `amount` from `owner` to `to`, spending `caller`'s allowance.
    ///
    /// # Errors
    ///
    /// In check order: [`LedgerError::Paused`],
    /// [`LedgerError::InsufficientAllowance`] if the (owner, caller)
    /// allowance covers less than `amount`,
    /// [`LedgerError::InsufficientBalance`] if `owner` holds less than
    /// `amount`, [`LedgerError::InvalidRecipient`] if `to` is the zero
    /// address.
    pub fn transfer_from(
        &mut self,
        gate: &PauseGate,
        caller: Address,
        owner: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        gate.ensure_active()?;
        let approved = self.allowance(owner, caller);
        if approved < amount {
            return Err(LedgerError::InsufficientAllowance {
                approved,
                requested: amount,
            });
        }
        let available = self.balance_of(owner);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        if to.is_zero() {
            return Err(LedgerError::InvalidRecipient);
        }
        if owner != to {
            self.balance_of(to)
                .checked_add(amount)
                .ok_or(LedgerError::AmountOverflow)?;
        }
        self.allowances.insert((owner, caller), approved - amount);
        self.debit(owner, amount)?;
        self.credit(to, amount)?;
        Ok(())
    }

    /// Credits `amount` to `account`. Creates the entry if absent.
    pub(crate) fn credit(&mut self, account: Address, amount: u128) -> Result<u128, LedgerError> {
        let balance = self.balances.entry(account).or_insert(0);
        let updated = balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        *balance = updated;
        Ok(updated)
    }

    /// Debits `amount` from `account`.
    pub(crate) fn debit(&mut self, account: Address, amount: u128) -> Result<u128, LedgerError> {
        let available = self.balance_of(account);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        let balance = self.balances.entry(account).or_insert(0);
        *balance -= amount;
        Ok(*balance)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
