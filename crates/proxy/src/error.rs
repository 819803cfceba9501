//! Wiring failure types.

use thiserror::Error;

use crate::identifier::Origin;

/// Failures surfaced while wiring proxy instances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
	/// An identifier declared for the finishing side was never bound.
	///
	/// Fatal at startup: wiring is expected to be exhaustive, so there is no
	/// retry or recovery path.
	#[error("no instance bound for proxy identifier `{name}` ({origin} side, nid {nid})")]
	MissingBinding {
		/// Symbolic name of the unbound identifier.
		name: &'static str,
		/// Side that owns the missing implementation.
		origin: Origin,
		/// Numeric id within that side.
		nid: u32,
	},
}

/// Convenience alias for wiring results.
pub type Result<T> = std::result::Result<T, WiringError>;
