//! # The Ledger State Machine
//!
//! [`Ledger`] is the facade that owns the four components — role registry,
//! pause gate, supply controller, account ledger — plus the token metadata
//! and the event journal. Every public operation takes the caller's
//! address explicitly: authentication happened upstream, authorization
//! happens here.
//!
//! Operations run to completion, serialized by the `&mut self` receiver.
//! There is no interior mutability and no static state, so independent
//! ledger instances never interfere — construct as many as a test needs.
//!
//! Event emission is layered strictly *after* mutation: the components
//! know nothing about the journal, and a failed operation journals
//! nothing.

use serde::{Deserialize, Serialize};

use crate::accounts::AccountLedger;
use crate::address::Address;
use crate::config;
use crate::error::LedgerError;
use crate::events::{Event, EventRecord, Journal};
use crate::pause::PauseGate;
use crate::roles::{Role, RoleRegistry};
use crate::supply::SupplyController;

// ---------------------------------------------------------------------------
// TokenMetadata
// ---------------------------------------------------------------------------

/// Immutable token descriptors, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display decimal places. The ledger never divides; this is for
    /// front ends.
    pub decimals: u8,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: config::TOKEN_NAME.to_string(),
            symbol: config::TOKEN_SYMBOL.to_string(),
            decimals: config::TOKEN_DECIMALS,
        }
    }
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// A complete fungible-value ledger instance.
///
/// # Examples
///
/// ```
/// use clink_ledger::address::Address;
/// use clink_ledger::ledger::Ledger;
///
/// let deployer = Address::from_bytes([1; 20]);
/// let mut ledger = Ledger::new(deployer, 1_000_000, 10_000_000).unwrap();
///
/// let user = Address::from_bytes([2; 20]);
/// ledger.transfer(deployer, user, 250).unwrap();
/// assert_eq!(ledger.balance_of(user), 250);
/// assert_eq!(ledger.total_supply(), 1_000_000);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ledger {
    metadata: TokenMetadata,
    roles: RoleRegistry,
    gate: PauseGate,
    supply: SupplyController,
    accounts: AccountLedger,
    journal: Journal,
}

impl Ledger {
    /// Constructs a ledger with the default CLINK metadata.
    ///
    /// The deployer receives the administrator, minter, and pauser roles
    /// and the entire initial supply. `max_supply` is immutable from here
    /// on.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ExceedsMaxSupply`] if `initial_supply`
    /// exceeds `max_supply` — the genesis credit is a mint in all but name
    /// and obeys the same cap. Returns [`LedgerError::AmountOverflow`] if
    /// `max_supply` exceeds `i128::MAX`, which would make supply deltas
    /// unrepresentable in the journal.
    pub fn new(
        deployer: Address,
        initial_supply: u128,
        max_supply: u128,
    ) -> Result<Self, LedgerError> {
        Self::with_metadata(TokenMetadata::default(), deployer, initial_supply, max_supply)
    }

    /// Constructs a ledger with explicit metadata. Same semantics as
    /// [`new`](Self::new) otherwise.
    pub fn with_metadata(
        metadata: TokenMetadata,
        deployer: Address,
        initial_supply: u128,
        max_supply: u128,
    ) -> Result<Self, LedgerError> {
        if max_supply > i128::MAX as u128 {
            return Err(LedgerError::AmountOverflow);
        }

        let mut ledger = Self {
            metadata,
            roles: RoleRegistry::new(),
            gate: PauseGate::new(),
            supply: SupplyController::new(max_supply),
            accounts: AccountLedger::new(),
            journal: Journal::new(),
        };

        for role in [Role::Admin, Role::Minter, Role::Pauser] {
            ledger.roles.insert(role, deployer);
            ledger.journal.append(Event::RoleChanged {
                role,
                account: deployer,
                granted: true,
            });
        }

        // Genesis issuance goes through the regular mint path — the
        // deployer just received the minter role, and the cap applies.
        ledger.supply.mint(
            &ledger.roles,
            &mut ledger.accounts,
            deployer,
            deployer,
            initial_supply,
        )?;
        ledger.journal.append(Event::Transfer {
            from: Address::ZERO,
            to: deployer,
            amount: initial_supply,
        });
        ledger.journal.append(Event::SupplyChanged {
            delta: initial_supply as i128,
        });

        tracing::debug!(
            deployer = %deployer,
            initial_supply = %initial_supply,
            max_supply = %max_supply,
            "ledger constructed"
        );
        Ok(ledger)
    }

    // -- Read-only introspection --------------------------------------------

    /// Token name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    /// Display decimals.
    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    /// `account`'s balance, zero for unseen accounts.
    pub fn balance_of(&self, account: Address) -> u128 {
        self.accounts.balance_of(account)
    }

    /// The allowance `owner` has granted `spender`, zero by default.
    pub fn allowance(&self, owner: Address, spender: Address) -> u128 {
        self.accounts.allowance(owner, spender)
    }

    /// Whether `account` holds `role`.
    pub fn has_role(&self, role: Role, account: Address) -> bool {
        self.roles.has_role(role, account)
    }

    /// Whether balance-moving operations are halted.
    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    /// Units currently in circulation.
    pub fn total_supply(&self) -> u128 {
        self.supply.total_supply()
    }

    /// The immutable supply cap.
    pub fn max_supply(&self) -> u128 {
        self.supply.max_supply()
    }

    /// The event journal, ordered by operation completion.
    pub fn events(&self) -> &[EventRecord] {
        self.journal.records()
    }

    // -- Balance movement ---------------------------------------------------

    /// Moves `amount` from the caller to `to`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Paused`], [`LedgerError::InvalidRecipient`], or
    /// [`LedgerError::InsufficientBalance`], in that check order.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.accounts.transfer(&self.gate, caller, to, amount)?;
        self.journal.append(Event::Transfer {
            from: caller,
            to,
            amount,
        });
        tracing::debug!(from = %caller, to = %to, amount = %amount, "transfer");
        Ok(())
    }

    /// Sets the allowance the caller grants `spender`. Overwrites, never
    /// adds. Permitted while paused.
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.accounts.approve(caller, spender, amount);
        self.journal.append(Event::Approval {
            owner: caller,
            spender,
            amount,
        });
        tracing::debug!(owner = %caller, spender = %spender, amount = %amount, "approval");
        Ok(())
    }

    /// Moves `amount` from `owner` to `to`, spending the caller's
    /// allowance.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Paused`], [`LedgerError::InsufficientAllowance`],
    /// [`LedgerError::InsufficientBalance`], or
    /// [`LedgerError::InvalidRecipient`], in that check order.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        owner: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.accounts
            .transfer_from(&self.gate, caller, owner, to, amount)?;
        self.journal.append(Event::Transfer {
            from: owner,
            to,
            amount,
        });
        tracing::debug!(
            spender = %caller,
            from = %owner,
            to = %to,
            amount = %amount,
            "delegated transfer"
        );
        Ok(())
    }

    // -- Supply control -----------------------------------------------------

    /// Mints `amount` new units to `to`. Minter role required; the cap
    /// applies; zero-amount mints are journaled no-ops.
    pub fn mint(&mut self, caller: Address, to: Address, amount: u128) -> Result<(), LedgerError> {
        self.supply
            .mint(&self.roles, &mut self.accounts, caller, to, amount)?;
        self.journal.append(Event::Transfer {
            from: Address::ZERO,
            to,
            amount,
        });
        // amount <= headroom <= max_supply <= i128::MAX, checked at
        // construction, so the cast cannot truncate.
        self.journal.append(Event::SupplyChanged {
            delta: amount as i128,
        });
        tracing::debug!(minter = %caller, to = %to, amount = %amount, "mint");
        Ok(())
    }

    /// Burns `amount` from the caller's own balance. Open to any holder.
    pub fn burn(&mut self, caller: Address, amount: u128) -> Result<(), LedgerError> {
        self.supply.burn(&mut self.accounts, caller, amount)?;
        self.journal.append(Event::Transfer {
            from: caller,
            to: Address::ZERO,
            amount,
        });
        self.journal.append(Event::SupplyChanged {
            delta: -(amount as i128),
        });
        tracing::debug!(from = %caller, amount = %amount, "burn");
        Ok(())
    }

    // -- Administration -----------------------------------------------------

    /// Grants `role` to `account`. Admin role required; idempotent on
    /// membership, always journaled.
    pub fn grant_role(
        &mut self,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), LedgerError> {
        self.roles.grant(caller, role, account)?;
        self.journal.append(Event::RoleChanged {
            role,
            account,
            granted: true,
        });
        tracing::debug!(admin = %caller, %role, account = %account, "role granted");
        Ok(())
    }

    /// Revokes `role` from `account`. Admin role required; idempotent on
    /// membership, always journaled.
    pub fn revoke_role(
        &mut self,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), LedgerError> {
        self.roles.revoke(caller, role, account)?;
        self.journal.append(Event::RoleChanged {
            role,
            account,
            granted: false,
        });
        tracing::debug!(admin = %caller, %role, account = %account, "role revoked");
        Ok(())
    }

    /// Halts transfers. Pauser role required; strict — fails if already
    /// paused.
    pub fn pause(&mut self, caller: Address) -> Result<(), LedgerError> {
        self.gate.pause(&self.roles, caller)?;
        self.journal
            .append(Event::PauseStateChanged { paused: true });
        tracing::debug!(pauser = %caller, "paused");
        Ok(())
    }

    /// Resumes transfers. Pauser role required; strict — fails if not
    /// paused.
    pub fn unpause(&mut self, caller: Address) -> Result<(), LedgerError> {
        self.gate.unpause(&self.roles, caller)?;
        self.journal
            .append(Event::PauseStateChanged { paused: false });
        tracing::debug!(pauser = %caller, "unpaused");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
