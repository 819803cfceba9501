//! Seam between startup wiring and the cross-process call router.

use std::any::Any;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::identifier::{Origin, ProxyIdentifier};

/// Identity of one binding as handed to the dispatch service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceDescriptor {
	/// Side that owns the implementation.
	pub origin: Origin,
	/// Numeric id within that side.
	pub nid: u32,
	/// Symbolic name, kept for diagnostics.
	pub name: &'static str,
}

/// Registration surface of the cross-process call router.
///
/// The real router lives with the transport and is out of scope here; wiring
/// only needs somewhere to hand completed bindings. Erased instances hold an
/// `Arc` of the shape trait object named by the identifier they were bound
/// under.
pub trait DispatchService {
	/// Stores one bound instance under its identifier.
	fn register_instance(&mut self, descriptor: InstanceDescriptor, instance: Box<dyn Any + Send + Sync>);
}

/// In-process dispatch registry.
///
/// Backs tests and single-process embedding. Nothing crosses a process
/// boundary: [`get`](Self::get) hands back the same `Arc` that wiring bound.
#[derive(Default)]
pub struct LocalDispatchRegistry {
	instances: FxHashMap<(Origin, u32), Box<dyn Any + Send + Sync>>,
}

impl LocalDispatchRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Typed lookup of a registered instance.
	///
	/// Returns `None` when the identifier was never registered or was bound
	/// under a different shape type.
	pub fn get<S>(&self, id: ProxyIdentifier<S>) -> Option<Arc<S>>
	where
		S: ?Sized + Send + Sync + 'static,
	{
		self.instances
			.get(&id.key())
			.and_then(|erased| erased.downcast_ref::<Arc<S>>())
			.map(Arc::clone)
	}

	/// Number of registered instances.
	#[inline]
	pub fn len(&self) -> usize {
		self.instances.len()
	}

	/// Returns true if nothing is registered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.instances.is_empty()
	}
}

impl DispatchService for LocalDispatchRegistry {
	fn register_instance(&mut self, descriptor: InstanceDescriptor, instance: Box<dyn Any + Send + Sync>) {
		self.instances.insert((descriptor.origin, descriptor.nid), instance);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::identifier::IdentifierTable;

	trait Emitter: Send + Sync {
		fn tag(&self) -> &'static str;
	}

	trait Sink: Send + Sync {}

	struct Stub;

	impl Emitter for Stub {
		fn tag(&self) -> &'static str {
			"stub"
		}
	}

	fn bind(registry: &mut LocalDispatchRegistry, id: ProxyIdentifier<dyn Emitter>) {
		let instance: Arc<dyn Emitter> = Arc::new(Stub);
		registry.register_instance(
			InstanceDescriptor {
				origin: id.origin(),
				nid: id.nid(),
				name: id.name(),
			},
			Box::new(instance),
		);
	}

	#[test]
	fn get_returns_the_bound_instance() {
		let mut table = IdentifierTable::new(Origin::Host);
		let emitter: ProxyIdentifier<dyn Emitter> = table.register("Emitter");

		let mut registry = LocalDispatchRegistry::new();
		bind(&mut registry, emitter);

		assert_eq!(registry.len(), 1);
		assert_eq!(registry.get(emitter).unwrap().tag(), "stub");
	}

	#[test]
	fn get_with_mismatched_shape_type_is_none() {
		let mut table = IdentifierTable::new(Origin::Host);
		let emitter: ProxyIdentifier<dyn Emitter> = table.register("Emitter");
		// Separate table, same side: the keys collide by construction.
		let mut other = IdentifierTable::new(Origin::Host);
		let sink: ProxyIdentifier<dyn Sink> = other.register("Sink");
		assert_eq!((sink.origin(), sink.nid()), (emitter.origin(), emitter.nid()));

		let mut registry = LocalDispatchRegistry::new();
		bind(&mut registry, emitter);

		assert!(registry.get(sink).is_none());
		assert!(registry.get(emitter).is_some());
	}

	#[test]
	fn get_with_unregistered_nid_is_none() {
		let mut table = IdentifierTable::new(Origin::Host);
		let bound: ProxyIdentifier<dyn Emitter> = table.register("Bound");
		let unbound: ProxyIdentifier<dyn Emitter> = table.register("Unbound");

		let mut registry = LocalDispatchRegistry::new();
		bind(&mut registry, bound);

		assert!(registry.get(unbound).is_none());
	}
}
