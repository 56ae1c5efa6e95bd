//! Ownership
//!
//! Single-owner access control for the registry. Every mutating operation
//! consults [`Ownership::require_owner`] before touching state; ownership
//! moves only through a one-step transfer and can never become the zero
//! address.

use tracing::warn;

use crate::types::error::{RegistryError, RegistryResult};
use crate::types::registry_types::{Address, RegistryEvent};

/// Holds the current owner identity and enforces owner-only access
#[derive(Clone, Debug)]
pub struct Ownership {
    owner: Address,
}

impl Ownership {
    /// Create a new ownership record with the deployer as owner
    pub fn new(deployer: Address) -> Self {
        Self { owner: deployer }
    }

    /// Get the current owner
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Fail with [`RegistryError::Unauthorized`] unless `caller` is the
    /// current owner. Pure check, no side effects on state.
    pub fn require_owner(&self, caller: Address) -> RegistryResult<()> {
        if caller != self.owner {
            warn!(%caller, owner = %self.owner, "unauthorized registry call");
            return Err(RegistryError::Unauthorized { caller });
        }
        Ok(())
    }

    /// Transfer ownership to `new_owner`
    ///
    /// Rejects non-owner callers and the zero address as target. On success
    /// the returned event records the handover; the new owner is effective
    /// for the very next authorization check.
    pub fn transfer(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> RegistryResult<RegistryEvent> {
        self.require_owner(caller)?;
        if new_owner.is_zero() {
            return Err(RegistryError::InvalidOwner);
        }

        let previous_owner = self.owner;
        self.owner = new_owner;

        Ok(RegistryEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(last: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[19] = last;
        Address::from_bytes(bytes)
    }

    #[test]
    fn test_deployer_is_initial_owner() {
        let ownership = Ownership::new(addr(1));
        assert_eq!(ownership.owner(), addr(1));
        assert!(ownership.require_owner(addr(1)).is_ok());
    }

    #[test]
    fn test_non_owner_is_rejected() {
        let ownership = Ownership::new(addr(1));
        assert_eq!(
            ownership.require_owner(addr(2)),
            Err(RegistryError::Unauthorized { caller: addr(2) })
        );
    }

    #[test]
    fn test_transfer_swaps_owner() {
        let mut ownership = Ownership::new(addr(1));
        let event = ownership.transfer(addr(1), addr(2)).expect("transfer");

        assert_eq!(
            event,
            RegistryEvent::OwnershipTransferred {
                previous_owner: addr(1),
                new_owner: addr(2),
            }
        );
        assert_eq!(ownership.owner(), addr(2));
        // The former owner lost access the moment the transfer committed
        assert_eq!(
            ownership.require_owner(addr(1)),
            Err(RegistryError::Unauthorized { caller: addr(1) })
        );
    }

    #[test]
    fn test_transfer_rejects_zero_address() {
        let mut ownership = Ownership::new(addr(1));
        assert_eq!(
            ownership.transfer(addr(1), Address::ZERO),
            Err(RegistryError::InvalidOwner)
        );
        assert_eq!(ownership.owner(), addr(1));
    }

    #[test]
    fn test_transfer_rejects_non_owner_caller() {
        let mut ownership = Ownership::new(addr(1));
        assert_eq!(
            ownership.transfer(addr(2), addr(3)),
            Err(RegistryError::Unauthorized { caller: addr(2) })
        );
        assert_eq!(ownership.owner(), addr(1));
    }
}
