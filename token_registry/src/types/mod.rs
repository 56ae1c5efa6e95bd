// Types Module Declarations
pub mod error;
pub mod registry_types;

pub use error::{AddressParseError, RegistryError, RegistryResult};
pub use registry_types::{Address, ListId, RegistryEvent, TcrSnapshot, TokenList};
