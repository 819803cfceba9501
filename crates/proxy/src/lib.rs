//! Proxy identifier registry and instance wiring for the extension host.
//!
//! The editor runs extensions in an isolated process. Every service that can
//! be called across that boundary is addressed by a [`ProxyIdentifier`]
//! declared in a per-side [`IdentifierTable`]. During startup wiring,
//! concrete implementations are bound through an [`InstanceCollection`] and,
//! once the collection covers the whole table, handed to a
//! [`DispatchService`] that routes the actual calls.
//!
//! This crate owns the registration contract only; transports and wire
//! formats live with the dispatch service implementation.

#![warn(missing_docs)]

pub mod collection;
pub mod dispatch;
pub mod error;
pub mod identifier;

pub use collection::{InstanceCollection, InstanceSetter};
pub use dispatch::{DispatchService, InstanceDescriptor, LocalDispatchRegistry};
pub use error::{Result, WiringError};
pub use identifier::{IdentifierTable, Origin, ProxyIdentifier};
