//! Token List Registry
//!
//! The registry is a single-writer state machine: it owns all lists and
//! per-list token activation records, gates every mutation through the
//! current owner identity, and appends an event to the observable log for
//! each committed change. Batch operations validate every element before
//! applying any of them, so a failed call leaves state exactly as it was.

use std::collections::HashSet;

use parking_lot::RwLock;
use tracing::debug;

use crate::core::event_log::EventLog;
use crate::core::ownership::Ownership;
use crate::types::error::{RegistryError, RegistryResult};
use crate::types::registry_types::{Address, ListId, RegistryEvent, TcrSnapshot, TokenList};

/// Interior registry state guarded by a single lock
///
/// Keeping ownership and the list table behind one lock makes every
/// operation serializable: a call holds the lock for its full duration, so
/// no other call observes a half-applied batch or a stale owner.
#[derive(Debug)]
struct RegistryState {
    ownership: Ownership,
    /// Lists in creation order; list id `k` lives at index `k - 1`
    lists: Vec<TokenList>,
}

impl RegistryState {
    /// Look up a list by id, `None` when the id is 0 or out of range
    fn list(&self, list_id: ListId) -> Option<&TokenList> {
        if list_id == 0 {
            return None;
        }
        self.lists.get(list_id as usize - 1)
    }

    /// Mutable list lookup, failing with [`RegistryError::InvalidList`]
    fn list_mut(&mut self, list_id: ListId) -> RegistryResult<&mut TokenList> {
        if list_id == 0 || list_id as usize > self.lists.len() {
            return Err(RegistryError::InvalidList { list_id });
        }
        Ok(&mut self.lists[list_id as usize - 1])
    }
}

/// Registry of named token lists with per-list activation tracking
///
/// All mutating operations take the caller identity explicitly and require
/// it to match the current owner. Read-only queries are open to any caller
/// and never fail on out-of-range input.
#[derive(Debug)]
pub struct TokenListRegistry {
    state: RwLock<RegistryState>,
    events: EventLog,
}

impl TokenListRegistry {
    /// Create a new registry owned by `deployer`
    pub fn new(deployer: Address) -> Self {
        Self {
            state: RwLock::new(RegistryState {
                ownership: Ownership::new(deployer),
                lists: Vec::new(),
            }),
            events: EventLog::new(),
        }
    }

    /// Get the current owner
    pub fn owner(&self) -> Address {
        self.state.read().ownership.owner()
    }

    /// Transfer ownership of the registry to `new_owner`
    ///
    /// Fails with `Unauthorized` for non-owner callers and `InvalidOwner`
    /// for the zero address. Effective for the very next call.
    pub fn transfer_ownership(&self, caller: Address, new_owner: Address) -> RegistryResult<()> {
        let mut state = self.state.write();
        let event = state.ownership.transfer(caller, new_owner)?;

        debug!(%caller, %new_owner, "registry ownership transferred");
        self.events.append(event);
        Ok(())
    }

    /// Create a new list and return its id
    ///
    /// Ids are assigned by a monotonically increasing counter, so the k-th
    /// successful call returns k and the valid-list check is a bounds
    /// comparison. Names are informational and may repeat across lists.
    pub fn add_list(&self, caller: Address, name: impl Into<String>) -> RegistryResult<ListId> {
        let mut state = self.state.write();
        state.ownership.require_owner(caller)?;

        let name = name.into();
        state.lists.push(TokenList::new(name.clone()));
        let list_id = state.lists.len() as ListId;

        debug!(list_id, list_name = %name, "list created");
        self.events.append(RegistryEvent::AddList {
            list_id,
            list_name: name,
        });
        Ok(list_id)
    }

    /// Total number of lists ever created
    pub fn list_count(&self) -> u64 {
        self.state.read().lists.len() as u64
    }

    /// Activate a batch of tokens in a list
    ///
    /// All-or-nothing: every token is validated against the stored state and
    /// against the earlier entries of the same batch before anything is
    /// applied. The first token already active (or repeated within the
    /// batch) fails the whole call with `DuplicateToken` and no state
    /// change. On success one `AddToken` event is emitted per token, in
    /// input order.
    pub fn add_tokens(
        &self,
        caller: Address,
        list_id: ListId,
        tokens: &[Address],
    ) -> RegistryResult<()> {
        let mut state = self.state.write();
        state.ownership.require_owner(caller)?;
        let list = state.list_mut(list_id)?;

        // Phase 1: validate the whole batch
        let mut batch = HashSet::new();
        for token in tokens {
            if list.is_active(token) || !batch.insert(*token) {
                return Err(RegistryError::DuplicateToken {
                    list_id,
                    token: *token,
                });
            }
        }

        // Phase 2: apply, then log the whole batch in input order
        let mut emitted = Vec::with_capacity(tokens.len());
        for token in tokens {
            list.activate(*token);
            emitted.push(RegistryEvent::AddToken {
                list_id,
                token: *token,
            });
        }
        self.events.extend(emitted);

        debug!(list_id, added = tokens.len(), "tokens activated");
        Ok(())
    }

    /// Deactivate a batch of tokens in a list
    ///
    /// Mirror of [`add_tokens`](Self::add_tokens): any token not currently
    /// active (including one already consumed earlier in the same batch)
    /// fails the whole call with `InactiveToken` before any state change.
    pub fn remove_tokens(
        &self,
        caller: Address,
        list_id: ListId,
        tokens: &[Address],
    ) -> RegistryResult<()> {
        let mut state = self.state.write();
        state.ownership.require_owner(caller)?;
        let list = state.list_mut(list_id)?;

        // Phase 1: validate the whole batch
        let mut batch = HashSet::new();
        for token in tokens {
            if !list.is_active(token) || !batch.insert(*token) {
                return Err(RegistryError::InactiveToken {
                    list_id,
                    token: *token,
                });
            }
        }

        // Phase 2: apply, then log the whole batch in input order
        let mut emitted = Vec::with_capacity(tokens.len());
        for token in tokens {
            list.deactivate(*token);
            emitted.push(RegistryEvent::RemoveToken {
                list_id,
                token: *token,
            });
        }
        self.events.extend(emitted);

        debug!(list_id, removed = tokens.len(), "tokens deactivated");
        Ok(())
    }

    /// Check whether a token is currently active in a list
    ///
    /// Never fails: a pair that was never activated, or an out-of-range
    /// list id, simply reads as inactive.
    pub fn is_token_active(&self, list_id: ListId, token: &Address) -> bool {
        self.state
            .read()
            .list(list_id)
            .map(|list| list.is_active(token))
            .unwrap_or(false)
    }

    /// Read-only metadata snapshot of a list
    ///
    /// Out-of-range ids return the zero-valued record (empty name, count 0)
    /// rather than failing.
    pub fn tcr(&self, list_id: ListId) -> TcrSnapshot {
        self.state
            .read()
            .list(list_id)
            .map(|list| TcrSnapshot {
                list_name: list.name().to_string(),
                active_token_count: list.active_token_count(),
            })
            .unwrap_or_default()
    }

    /// Handle onto the append-only event log
    pub fn event_log(&self) -> &EventLog {
        &self.events
    }

    /// Snapshot of all events logged so far, in commit order
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.events()
    }
}
