//! Core Module: the registry state machine, ownership gating, and the
//! observable event log.

pub mod event_log;
pub mod ownership;
pub mod registry;

pub use event_log::EventLog;
pub use ownership::Ownership;
pub use registry::TokenListRegistry;
