//! Registry error types
//!
//! A single error enumeration covers every rejection the registry can
//! produce. Each variant carries the identifiers needed to diagnose the
//! failed call; every error leaves registry state unchanged.

use thiserror::Error;

use crate::types::registry_types::{Address, ListId};

/// Error during registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller of a mutating operation is not the current owner
    #[error("caller {caller} is not the registry owner")]
    Unauthorized {
        /// Identity that attempted the call
        caller: Address,
    },

    /// Ownership transfer targeted the zero address
    #[error("new owner must not be the zero address")]
    InvalidOwner,

    /// Referenced list id is 0 or exceeds the current list count
    #[error("list {list_id} does not exist")]
    InvalidList {
        /// The out-of-range id
        list_id: ListId,
    },

    /// Attempted activation of a token already active in the target list
    #[error("token {token} is already active in list {list_id}")]
    DuplicateToken {
        list_id: ListId,
        token: Address,
    },

    /// Attempted deactivation of a token not currently active in the target list
    #[error("token {token} is not active in list {list_id}")]
    InactiveToken {
        list_id: ListId,
        token: Address,
    },
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error parsing an [`Address`] from its hex representation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddressParseError {
    /// Decoded byte length was not 20
    #[error("address must decode to 20 bytes, got {0}")]
    BadLength(usize),

    /// Input contained non-hex characters or odd length
    #[error("invalid hex in address: {0}")]
    BadHex(#[from] hex::FromHexError),
}
