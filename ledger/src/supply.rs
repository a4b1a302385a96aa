//! # Supply Controller
//!
//! Tracks total issuance against an immutable cap and owns the two
//! supply-changing operations. Mint requires the minter role and respects
//! the cap; burn is open to anyone but only ever targets the caller's own
//! balance — there is no delegated burn path.
//!
//! Neither operation consults the pause gate. Halting transfers and
//! halting issuance are separate levers, and tying them together would
//! leave an operator unable to unwind supply during an incident freeze.

use serde::{Deserialize, Serialize};

use crate::accounts::AccountLedger;
use crate::address::Address;
use crate::error::LedgerError;
use crate::roles::{Role, RoleRegistry};

/// Total supply bookkeeping for a single ledger instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SupplyController {
    /// Units currently in circulation. Always `<= max_supply`, always
    /// equal to the sum of all balances.
    total_supply: u128,

    /// The hard cap. Fixed at construction, never mutated.
    max_supply: u128,
}

impl SupplyController {
    /// Creates a controller with zero issued supply. The genesis credit
    /// flows through [`mint`](Self::mint) like any other issuance.
    pub(crate) fn new(max_supply: u128) -> Self {
        Self {
            total_supply: 0,
            max_supply,
        }
    }

    /// Units currently in circulation.
    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// The immutable supply cap.
    pub fn max_supply(&self) -> u128 {
        self.max_supply
    }

    /// Units that can still be minted before hitting the cap.
    pub fn headroom(&self) -> u128 {
        self.max_supply - self.total_supply
    }

    /// Mints `amount` to `to`, growing total supply.
    ///
    /// A zero-amount mint is permitted: it passes every check, changes
    /// nothing, and the facade still journals it — consistent with
    /// zero-amount transfer semantics.
    ///
    /// # Errors
    ///
    /// In check order: [`LedgerError::Unauthorized`] unless `caller` holds
    /// [`Role::Minter`], [`LedgerError::InvalidRecipient`] if `to` is the
    /// zero address, [`LedgerError::ExceedsMaxSupply`] if issuance would
    /// pass the cap. All checks precede all mutations.
    pub fn mint(
        &mut self,
        registry: &RoleRegistry,
        accounts: &mut AccountLedger,
        caller: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        registry.ensure(Role::Minter, caller)?;
        if to.is_zero() {
            return Err(LedgerError::InvalidRecipient);
        }
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        if new_supply > self.max_supply {
            return Err(LedgerError::ExceedsMaxSupply {
                requested: amount,
                headroom: self.headroom(),
            });
        }
        accounts.credit(to, amount)?;
        self.total_supply = new_supply;
        Ok(())
    }

    /// Burns `amount` from the caller's own balance, shrinking total
    /// supply.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if the caller holds
    /// less than `amount`.
    pub fn burn(
        &mut self,
        accounts: &mut AccountLedger,
        caller: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        // Supply >= any single balance, so this only fails if the ledger
        // is already corrupt — surfaced rather than wrapped regardless.
        let new_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        accounts.debit(caller, amount)?;
        self.total_supply = new_supply;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
