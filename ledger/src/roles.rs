//! # Role Registry
//!
//! Maps roles to sets of account addresses and answers membership queries.
//! Roles are data, not types: "whoever holds this role may do X" is a set
//! lookup at the top of each privileged operation, not dispatch.
//!
//! The administrator role is self-referential — it governs grant and revoke
//! of every role, including itself. The account that constructs the ledger
//! receives it automatically; from there, administration can be handed off
//! or widened at will. Grant and revoke are idempotent: re-granting a held
//! role or revoking an absent one is not an error.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::address::Address;
use crate::error::LedgerError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A named capability grantable to account addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Governs grant/revoke of all roles, including itself.
    Admin,
    /// May mint new supply, within the cap.
    Minter,
    /// May pause and unpause balance-moving operations.
    Pauser,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "administrator"),
            Role::Minter => write!(f, "minter"),
            Role::Pauser => write!(f, "pauser"),
        }
    }
}

// ---------------------------------------------------------------------------
// RoleRegistry
// ---------------------------------------------------------------------------

/// Role membership sets for a single ledger instance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoleRegistry {
    /// Members per role. Absent role key reads as an empty set.
    members: HashMap<Role, HashSet<Address>>,
}

impl RoleRegistry {
    /// Creates an empty registry. The ledger constructor seeds the
    /// deployer's roles before the registry is ever consulted.
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }

    /// Returns `true` if `account` holds `role`.
    pub fn has_role(&self, role: Role, account: Address) -> bool {
        self.members
            .get(&role)
            .map(|set| set.contains(&account))
            .unwrap_or(false)
    }

    /// Number of accounts holding `role`.
    pub fn member_count(&self, role: Role) -> usize {
        self.members.get(&role).map(|set| set.len()).unwrap_or(0)
    }

    /// Grants `role` to `account`. Idempotent on membership.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] unless `caller` holds
    /// [`Role::Admin`].
    pub fn grant(
        &mut self,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), LedgerError> {
        self.ensure(Role::Admin, caller)?;
        self.insert(role, account);
        Ok(())
    }

    /// Revokes `role` from `account`. Idempotent on membership.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] unless `caller` holds
    /// [`Role::Admin`].
    pub fn revoke(
        &mut self,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), LedgerError> {
        self.ensure(Role::Admin, caller)?;
        if let Some(set) = self.members.get_mut(&role) {
            set.remove(&account);
        }
        Ok(())
    }

    /// Fails with [`LedgerError::Unauthorized`] unless `account` holds
    /// `role`. Consulted at the top of every privileged operation.
    pub(crate) fn ensure(&self, role: Role, account: Address) -> Result<(), LedgerError> {
        if self.has_role(role, account) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized { role, account })
        }
    }

    /// Adds membership without an authorization check. Construction only.
    pub(crate) fn insert(&mut self, role: Role, account: Address) {
        self.members.entry(role).or_default().insert(account);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
