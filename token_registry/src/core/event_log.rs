//! Event Log
//!
//! Append-only log of committed registry state changes. The registry writes
//! to it and never reads it back; external consumers take snapshots for
//! audit trails. Cloning the log yields a handle onto the same underlying
//! entries, so a consumer can hold one independently of the registry.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::registry_types::RegistryEvent;

/// Append-only, externally observable registry event log
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Arc<RwLock<Vec<RegistryEvent>>>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single event
    pub(crate) fn append(&self, event: RegistryEvent) {
        self.entries.write().push(event);
    }

    /// Append a batch of events in order
    pub(crate) fn extend(&self, events: impl IntoIterator<Item = RegistryEvent>) {
        self.entries.write().extend(events);
    }

    /// Snapshot of all events logged so far, in commit order
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.entries.read().clone()
    }

    /// Number of events logged so far
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let log = EventLog::new();
        assert!(log.is_empty());

        log.append(RegistryEvent::AddList {
            list_id: 1,
            list_name: "first".to_string(),
        });
        log.append(RegistryEvent::AddList {
            list_id: 2,
            list_name: "second".to_string(),
        });

        let events = log.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            RegistryEvent::AddList {
                list_id: 1,
                list_name: "first".to_string(),
            }
        );
        assert_eq!(
            events[1],
            RegistryEvent::AddList {
                list_id: 2,
                list_name: "second".to_string(),
            }
        );
    }

    #[test]
    fn test_cloned_handle_sees_same_entries() {
        let log = EventLog::new();
        let handle = log.clone();

        log.append(RegistryEvent::AddList {
            list_id: 1,
            list_name: "shared".to_string(),
        });

        assert_eq!(handle.len(), 1);
        assert_eq!(handle.events(), log.events());
    }
}
