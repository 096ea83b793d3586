//! Network relay contract.
//!
//! Messages a transport collaborator carries between two peers playing the
//! same game. Framing, encryption and retries belong to the transport; this
//! module only maps messages onto `Game` operations.

pub mod message;

pub use message::RelayMessage;
