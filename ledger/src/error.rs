//! # Ledger Error Taxonomy
//!
//! Every way an operation can be rejected, in one enum. All of these are
//! recoverable at the call site — none poison the ledger instance — and a
//! failed operation performs zero mutation, so retrying after fixing the
//! cause is always safe.

use thiserror::Error;

use crate::address::Address;
use crate::roles::Role;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The caller does not hold the role required for this operation.
    #[error("unauthorized: {account} does not hold the {role} role")]
    Unauthorized {
        /// The role the operation requires.
        role: Role,
        /// The caller that lacks it.
        account: Address,
    },

    /// Balance-moving operations are halted by the pause gate.
    #[error("transfers are paused")]
    Paused,

    /// Tried to pause a ledger that is already paused.
    #[error("already paused")]
    AlreadyPaused,

    /// Tried to unpause a ledger that is not paused.
    #[error("not paused")]
    NotPaused,

    /// The debited account holds less than the requested amount.
    #[error("insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance {
        /// Current balance of the debited account.
        available: u128,
        /// Amount the caller tried to move.
        requested: u128,
    },

    /// The spender's allowance covers less than the requested amount.
    #[error("insufficient allowance: approved {approved}, requested {requested}")]
    InsufficientAllowance {
        /// Current allowance for the (owner, spender) pair.
        approved: u128,
        /// Amount the spender tried to move.
        requested: u128,
    },

    /// Minting this amount would push total supply past the configured cap.
    #[error("mint would exceed maximum supply cap: requested {requested}, headroom {headroom}")]
    ExceedsMaxSupply {
        /// Amount the caller tried to mint.
        requested: u128,
        /// How much could still be minted before hitting the cap.
        headroom: u128,
    },

    /// The target of a transfer or mint is the null/zero address.
    #[error("invalid recipient: the zero address cannot receive funds")]
    InvalidRecipient,

    /// Arithmetic would leave the numeric range.
    ///
    /// Unreachable on supply-bounded paths while the cap invariant holds,
    /// but surfaced as an error rather than a panic all the same.
    #[error("amount overflow: operation would exceed the numeric range")]
    AmountOverflow,
}
