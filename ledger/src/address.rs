//! # Account Addresses
//!
//! An [`Address`] is the opaque identity of a ledger account: 20 bytes,
//! hex-encoded for humans, comparable and hashable for machines. Accounts
//! have no creation or destruction lifecycle — an address "exists" the
//! moment something credits it or approves it.
//!
//! The all-zeroes address is special. It is never a valid transfer or mint
//! recipient, and it appears as the `from`/`to` sentinel in mint and burn
//! [`Transfer`](crate::events::Event::Transfer) records, mirroring the
//! convention of every fungible-token ledger worth interoperating with.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Address width in bytes.
pub const ADDRESS_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing an address from its hex form.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The hex string could not be decoded.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// The decoded data has an unexpected length.
    #[error("invalid address length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        got: usize,
    },
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A 20-byte account identity.
///
/// # Examples
///
/// ```
/// use clink_ledger::address::Address;
///
/// let addr = Address::from_bytes([0xAB; 20]);
/// let hex = addr.to_hex();
/// let recovered: Address = hex.parse().unwrap();
/// assert_eq!(addr, recovered);
/// assert!(!addr.is_zero());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The null identity — invalid as a recipient, used as the mint/burn
    /// sentinel in transfer records.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// Creates an address from raw bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Returns the 40-character hex encoding, without a `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a hex-encoded address. A leading `0x` is accepted and ignored.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        if bytes.len() != ADDRESS_LENGTH {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_LENGTH,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; ADDRESS_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Returns `true` if this is the null identity.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{}...)", &self.to_hex()[..8])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ---------------------------------------------------------------------------
// Serde helper: serialize HashMap<Address, V> with hex-string keys
// ---------------------------------------------------------------------------

/// Serde helper module for serializing/deserializing `HashMap<Address, V>`
/// as a JSON object with hex-encoded string keys.
///
/// JSON requires map keys to be strings, but `Address` wraps `[u8; 20]`
/// which serde would serialize as an array. This module converts keys
/// to/from their hex representation so the map serializes correctly.
pub mod address_map {
    use super::Address;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    pub fn serialize<V, S>(map: &HashMap<Address, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut ser_map = serializer.serialize_map(Some(map.len()))?;
        for (key, value) in map {
            ser_map.serialize_entry(&key.to_hex(), value)?;
        }
        ser_map.end()
    }

    pub fn deserialize<'de, V, D>(deserializer: D) -> Result<HashMap<Address, V>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let string_map: HashMap<String, V> = HashMap::deserialize(deserializer)?;
        string_map
            .into_iter()
            .map(|(key, value)| {
                Address::from_hex(&key)
                    .map(|addr| (addr, value))
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }
}

/// Serde helper module for `HashMap<(Address, Address), V>` — allowances
/// keyed by (owner, spender) pairs. Keys serialize as `"ownerhex:spenderhex"`.
pub mod allowance_map {
    use super::Address;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    pub fn serialize<V, S>(
        map: &HashMap<(Address, Address), V>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut ser_map = serializer.serialize_map(Some(map.len()))?;
        for ((owner, spender), value) in map {
            let key = format!("{}:{}", owner.to_hex(), spender.to_hex());
            ser_map.serialize_entry(&key, value)?;
        }
        ser_map.end()
    }

    pub fn deserialize<'de, V, D>(
        deserializer: D,
    ) -> Result<HashMap<(Address, Address), V>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let string_map: HashMap<String, V> = HashMap::deserialize(deserializer)?;
        string_map
            .into_iter()
            .map(|(key, value)| {
                let (owner_hex, spender_hex) = key
                    .split_once(':')
                    .ok_or_else(|| serde::de::Error::custom("missing ':' in allowance key"))?;
                let owner = Address::from_hex(owner_hex).map_err(serde::de::Error::custom)?;
                let spender = Address::from_hex(spender_hex).map_err(serde::de::Error::custom)?;
                Ok(((owner, spender), value))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
