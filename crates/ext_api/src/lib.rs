//! Extension-host API surface.
//!
//! Declares the two context tables addressing remote-callable services
//! ([`HostContext`] for services the extension process calls into the host,
//! [`ExtHostContext`] for the reverse direction), the shape traits those
//! identifiers bind to, and the startup wiring entry points.
//!
//! The method sets on the shape traits are representative, not the full
//! editor API; feature teams extend them alongside their implementations on
//! both sides.

#![warn(missing_docs)]

pub mod contexts;
pub mod shapes;
pub mod wiring;

pub use contexts::{ExtHostContext, HostContext};
pub use shapes::ShapeError;
pub use wiring::{ExtHostServices, HostServices, wire_ext_host, wire_host};
