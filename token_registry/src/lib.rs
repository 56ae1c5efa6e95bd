// Token List Registry Library Entry Point

// Module declarations - expose all modules through the library
pub mod core;
pub mod types;

// Re-export key components for easier access
pub use crate::core::event_log::EventLog;
pub use crate::core::ownership::Ownership;
pub use crate::core::registry::TokenListRegistry;
pub use crate::types::error::{AddressParseError, RegistryError, RegistryResult};
pub use crate::types::registry_types::{Address, ListId, RegistryEvent, TcrSnapshot, TokenList};

/// Returns the version of the library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
