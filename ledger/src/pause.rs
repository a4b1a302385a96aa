//! # Pause Gate
//!
//! A single boolean with strict edge-case policy: pausing a paused ledger
//! fails with [`LedgerError::AlreadyPaused`], unpausing an active one with
//! [`LedgerError::NotPaused`]. No silent no-ops — an operator who pauses
//! twice is confused about the ledger's state, and the error says so.
//!
//! Only transfer and delegated transfer consult the gate. Mint, burn,
//! approve, and all reads proceed while paused: supply control and
//! transfer control are deliberately orthogonal.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::LedgerError;
use crate::roles::{Role, RoleRegistry};

/// The transfer kill switch. Default state: not paused.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PauseGate {
    paused: bool,
}

impl PauseGate {
    /// Creates a gate in the active (unpaused) state.
    pub fn new() -> Self {
        Self { paused: false }
    }

    /// Returns `true` if balance-moving operations are halted.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Halts balance-moving operations.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] unless `caller` holds
    /// [`Role::Pauser`]. Returns [`LedgerError::AlreadyPaused`] if the
    /// gate is already closed.
    pub fn pause(&mut self, registry: &RoleRegistry, caller: Address) -> Result<(), LedgerError> {
        registry.ensure(Role::Pauser, caller)?;
        if self.paused {
            return Err(LedgerError::AlreadyPaused);
        }
        self.paused = true;
        Ok(())
    }

    /// Resumes balance-moving operations.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] unless `caller` holds
    /// [`Role::Pauser`]. Returns [`LedgerError::NotPaused`] if the gate
    /// is already open.
    pub fn unpause(&mut self, registry: &RoleRegistry, caller: Address) -> Result<(), LedgerError> {
        registry.ensure(Role::Pauser, caller)?;
        if !self.paused {
            return Err(LedgerError::NotPaused);
        }
        self.paused = false;
        Ok(())
    }

    /// Fails with [`LedgerError::Paused`] if the gate is closed. Consulted
    /// by transfer paths before any mutation.
    pub(crate) fn ensure_active(&self) -> Result<(), LedgerError> {
        if self.paused {
            Err(LedgerError::Paused)
        } else {
            Ok(())
        }
    }
}
