//! Proxy identifier tokens and per-side allocation tables.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Which process owns the implementation behind an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
	/// The editor's primary process.
	Host,
	/// The isolated extension-execution process.
	ExtHost,
}

impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Origin::Host => f.write_str("host"),
			Origin::ExtHost => f.write_str("exthost"),
		}
	}
}

/// Token addressing one remote-callable service.
///
/// `S` is the shape trait the service implements; it only exists at the type
/// level and pins [`InstanceCollection::define`](crate::InstanceCollection::define)
/// and [`LocalDispatchRegistry::get`](crate::LocalDispatchRegistry::get) to
/// the right instance type. Identity is `(origin, nid)`: copies of one
/// registration compare equal, and two registrations on the same side never
/// share a nid.
pub struct ProxyIdentifier<S: ?Sized> {
	name: &'static str,
	origin: Origin,
	nid: u32,
	_shape: PhantomData<fn() -> S>,
}

impl<S: ?Sized> ProxyIdentifier<S> {
	fn new(name: &'static str, origin: Origin, nid: u32) -> Self {
		Self {
			name,
			origin,
			nid,
			_shape: PhantomData,
		}
	}

	/// Symbolic name, as declared in the table.
	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Side that owns the implementation.
	#[inline]
	pub fn origin(&self) -> Origin {
		self.origin
	}

	/// Numeric id, unique within the owning side.
	#[inline]
	pub fn nid(&self) -> u32 {
		self.nid
	}

	/// Map key used by collections and registries.
	#[inline]
	pub(crate) fn key(&self) -> (Origin, u32) {
		(self.origin, self.nid)
	}
}

// Manual impls: deriving would bound `S`, which is phantom.
impl<S: ?Sized> Clone for ProxyIdentifier<S> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<S: ?Sized> Copy for ProxyIdentifier<S> {}

impl<S: ?Sized> PartialEq for ProxyIdentifier<S> {
	fn eq(&self, other: &Self) -> bool {
		self.key() == other.key()
	}
}

impl<S: ?Sized> Eq for ProxyIdentifier<S> {}

impl<S: ?Sized> Hash for ProxyIdentifier<S> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.key().hash(state);
	}
}

impl<S: ?Sized> fmt::Debug for ProxyIdentifier<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProxyIdentifier")
			.field("name", &self.name)
			.field("origin", &self.origin)
			.field("nid", &self.nid)
			.finish()
	}
}

/// Per-side allocation table for proxy identifiers.
///
/// Each side of the process boundary builds exactly one table at startup and
/// registers every service it exposes. Registration order fixes the nids, so
/// both processes must build their tables from the same declaration.
pub struct IdentifierTable {
	origin: Origin,
	names: Vec<&'static str>,
}

impl IdentifierTable {
	/// Creates an empty table for `origin`.
	pub fn new(origin: Origin) -> Self {
		Self {
			origin,
			names: Vec::new(),
		}
	}

	/// Registers `name` and returns its identifier.
	///
	/// # Panics
	///
	/// Panics if `name` was already registered in this table. Table
	/// construction is a deterministic startup path; a duplicate is a
	/// programming error, not a runtime condition.
	pub fn register<S: ?Sized>(&mut self, name: &'static str) -> ProxyIdentifier<S> {
		assert!(
			!self.names.contains(&name),
			"duplicate proxy identifier {name:?} on {} side",
			self.origin
		);
		let nid = u32::try_from(self.names.len()).unwrap_or_else(|_| {
			panic!("proxy identifier table overflow on {} side", self.origin)
		});
		self.names.push(name);
		ProxyIdentifier::new(name, self.origin, nid)
	}

	/// Side this table allocates for.
	#[inline]
	pub fn origin(&self) -> Origin {
		self.origin
	}

	/// Number of registered identifiers.
	#[inline]
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Returns true if nothing was registered yet.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Iterates `(nid, name)` pairs in registration order.
	pub fn entries(&self) -> impl Iterator<Item = (u32, &'static str)> + '_ {
		self.names
			.iter()
			.enumerate()
			.map(|(idx, name)| (idx as u32, *name))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	trait SomeShape: Send + Sync {}
	trait OtherShape: Send + Sync {}

	#[test]
	fn nids_are_sequential_per_table() {
		let mut table = IdentifierTable::new(Origin::Host);
		let a: ProxyIdentifier<dyn SomeShape> = table.register("HostA");
		let b: ProxyIdentifier<dyn OtherShape> = table.register("HostB");
		assert_eq!(a.nid(), 0);
		assert_eq!(b.nid(), 1);
		assert_eq!(table.len(), 2);
	}

	#[test]
	fn identity_is_origin_and_nid() {
		let mut table = IdentifierTable::new(Origin::ExtHost);
		let a: ProxyIdentifier<dyn SomeShape> = table.register("ExtA");
		let copy = a;
		assert_eq!(a, copy);
		assert_eq!(a.origin(), Origin::ExtHost);
		assert_eq!(a.name(), "ExtA");
	}

	#[test]
	#[should_panic(expected = "duplicate proxy identifier")]
	fn duplicate_name_panics() {
		let mut table = IdentifierTable::new(Origin::Host);
		let _: ProxyIdentifier<dyn SomeShape> = table.register("HostA");
		let _: ProxyIdentifier<dyn SomeShape> = table.register("HostA");
	}

	#[test]
	fn entries_preserve_registration_order() {
		let mut table = IdentifierTable::new(Origin::Host);
		let _: ProxyIdentifier<dyn SomeShape> = table.register("First");
		let _: ProxyIdentifier<dyn OtherShape> = table.register("Second");
		let entries: Vec<_> = table.entries().collect();
		assert_eq!(entries, vec![(0, "First"), (1, "Second")]);
	}
}
