//! Registry types
//!
//! This module defines the data model for the token list registry:
//! - Opaque 20-byte addresses used for both caller identities and tokens
//! - Token lists with per-token activation status
//! - Observable registry events
//! - Read-only list metadata snapshots

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::error::AddressParseError;

/// Sequential identifier of a list; ids start at 1 and 0 is never valid
pub type ListId = u64;

/// Opaque 20-byte address identifying a caller or a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// The zero address, used as the null identity
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create an address from raw bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Raw byte view of the address
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Check whether this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        let raw: [u8; 20] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressParseError::BadLength(bytes.len()))?;
        Ok(Address(raw))
    }
}

// Addresses serialize as the 0x-prefixed hex string so event-log JSON
// carries the same representation external consumers use.
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A named grouping of tokens with per-token activation status
///
/// Absence of a status entry is equivalent to inactive. The active token
/// count is maintained alongside the status map and always equals the
/// number of entries currently marked active.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenList {
    /// Informational list name; not required to be unique across lists
    name: String,
    /// Number of tokens currently active in this list
    active_token_count: u64,
    /// Activation status keyed by token address
    status: HashMap<Address, bool>,
}

impl TokenList {
    /// Create a new, empty list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active_token_count: 0,
            status: HashMap::new(),
        }
    }

    /// Get the list name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of currently active tokens
    pub fn active_token_count(&self) -> u64 {
        self.active_token_count
    }

    /// Check whether a token is currently active in this list
    pub fn is_active(&self, token: &Address) -> bool {
        self.status.get(token).copied().unwrap_or(false)
    }

    /// Mark a token active and bump the count
    ///
    /// Callers must have verified the token is not already active.
    pub(crate) fn activate(&mut self, token: Address) {
        self.status.insert(token, true);
        self.active_token_count += 1;
    }

    /// Mark a token inactive and decrement the count
    ///
    /// Callers must have verified the token is currently active.
    pub(crate) fn deactivate(&mut self, token: Address) {
        self.status.insert(token, false);
        self.active_token_count -= 1;
    }
}

/// Read-only snapshot of a list's metadata
///
/// Queries for out-of-range list ids return the zero-valued record rather
/// than failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcrSnapshot {
    /// The list name, empty for unknown lists
    pub list_name: String,
    /// Number of currently active tokens, 0 for unknown lists
    pub active_token_count: u64,
}

/// Observable registry event, appended to the event log on every committed
/// state change
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A list was created
    AddList {
        list_id: ListId,
        list_name: String,
    },
    /// A token was activated in a list
    AddToken {
        list_id: ListId,
        token: Address,
    },
    /// A token was deactivated in a list
    RemoveToken {
        list_id: ListId,
        token: Address,
    },
    /// Ownership of the registry changed hands
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
}
