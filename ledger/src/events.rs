//! # Event Journal
//!
//! Every successful operation appends one or more [`Event`] records to the
//! ledger's [`Journal`]. The journal is strictly append-only and ordered by
//! operation completion; records carry a monotonically increasing sequence
//! number and a wall-clock timestamp.
//!
//! The core never reads its own journal. It exists for external observers:
//! the test harness asserts on record presence and fields, and the CLI
//! dumps it as JSON after a demo run. Keeping emission out of the mutation
//! logic means the state machine can be tested without ever touching it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::Address;
use crate::roles::Role;

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A single ledger event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Value moved between accounts. Mints use `from = Address::ZERO`,
    /// burns use `to = Address::ZERO`.
    Transfer {
        /// Debited account (zero for mints).
        from: Address,
        /// Credited account (zero for burns).
        to: Address,
        /// Amount moved, in base units.
        amount: u128,
    },

    /// An allowance was set (always an overwrite, never an increment).
    Approval {
        /// The account whose funds may be spent.
        owner: Address,
        /// The account permitted to spend them.
        spender: Address,
        /// The new allowance ceiling.
        amount: u128,
    },

    /// Role membership changed. Emitted even when the grant or revoke was
    /// a no-op on membership — idempotent calls still leave a record.
    RoleChanged {
        /// The role in question.
        role: Role,
        /// The affected account.
        account: Address,
        /// `true` for grant, `false` for revoke.
        granted: bool,
    },

    /// The pause gate flipped.
    PauseStateChanged {
        /// The new pause state.
        paused: bool,
    },

    /// Total supply changed. Positive for mints, negative for burns.
    SupplyChanged {
        /// Signed supply delta in base units.
        delta: i128,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Transfer { from, to, amount } => {
                write!(f, "Transfer({} -> {}, {})", from, to, amount)
            }
            Event::Approval {
                owner,
                spender,
                amount,
            } => write!(f, "Approval({} allows {}, {})", owner, spender, amount),
            Event::RoleChanged {
                role,
                account,
                granted,
            } => {
                let verb = if *granted { "granted to" } else { "revoked from" };
                write!(f, "RoleChanged({} {} {})", role, verb, account)
            }
            Event::PauseStateChanged { paused } => {
                write!(f, "PauseStateChanged({})", paused)
            }
            Event::SupplyChanged { delta } => write!(f, "SupplyChanged({:+})", delta),
        }
    }
}

// ---------------------------------------------------------------------------
// EventRecord & Journal
// ---------------------------------------------------------------------------

/// An event plus its position and time of emission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the journal. Strictly increasing, gap-free.
    pub seq: u64,
    /// Wall-clock time of emission.
    pub at: DateTime<Utc>,
    /// The event itself.
    pub event: Event,
}

/// The append-only event log of a single ledger instance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Journal {
    records: Vec<EventRecord>,
}

impl Journal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends an event, stamping it with the next sequence number.
    pub(crate) fn append(&mut self, event: Event) {
        let seq = self.records.len() as u64;
        self.records.push(EventRecord {
            seq,
            at: Utc::now(),
            event,
        });
    }

    /// All records, in emission order.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    /// Number of records emitted so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
