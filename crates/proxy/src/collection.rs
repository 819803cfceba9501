//! Runtime binding of service implementations to proxy identifiers.

use std::any::Any;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, error, trace};

use crate::dispatch::{DispatchService, InstanceDescriptor};
use crate::error::{Result, WiringError};
use crate::identifier::{IdentifierTable, Origin, ProxyIdentifier};

/// Accumulates service bindings during startup wiring.
///
/// Bindings are keyed by identifier identity and may cover both sides while
/// wiring runs; [`finish`](Self::finish) consumes the collection against one
/// side's table. Binding the same identifier twice overwrites silently, last
/// write wins.
#[derive(Default)]
pub struct InstanceCollection {
	instances: FxHashMap<(Origin, u32), Box<dyn Any + Send + Sync>>,
}

impl InstanceCollection {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a binding for `id`.
	///
	/// The returned setter records exactly one instance; call
	/// [`InstanceSetter::set`] to complete the binding.
	pub fn define<S>(&mut self, id: ProxyIdentifier<S>) -> InstanceSetter<'_, S>
	where
		S: ?Sized + Send + Sync + 'static,
	{
		InstanceSetter { collection: self, id }
	}

	/// Number of bound instances.
	#[inline]
	pub fn len(&self) -> usize {
		self.instances.len()
	}

	/// Returns true if nothing is bound.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.instances.is_empty()
	}

	/// Validates the bindings against `table` and commits them to `dispatch`.
	///
	/// Every identifier in the table must have a bound instance. Validation
	/// runs over the whole table before anything is registered, so a failed
	/// finish commits nothing to the dispatch service. Bindings for the
	/// other side are discarded with the collection.
	pub fn finish(mut self, table: &IdentifierTable, dispatch: &mut dyn DispatchService) -> Result<()> {
		let origin = table.origin();
		let mut committed = Vec::with_capacity(table.len());
		for (nid, name) in table.entries() {
			match self.instances.remove(&(origin, nid)) {
				Some(instance) => {
					committed.push((InstanceDescriptor { origin, nid, name }, instance));
				}
				None => {
					error!(%origin, nid, name, "proxy instance never bound");
					return Err(WiringError::MissingBinding { name, origin, nid });
				}
			}
		}
		for (descriptor, instance) in committed {
			trace!(name = descriptor.name, "registering proxy instance");
			dispatch.register_instance(descriptor, instance);
		}
		debug!(%origin, count = table.len(), "proxy wiring complete");
		Ok(())
	}
}

/// Single-use capability to bind one instance, returned by
/// [`InstanceCollection::define`].
pub struct InstanceSetter<'a, S>
where
	S: ?Sized + Send + Sync + 'static,
{
	collection: &'a mut InstanceCollection,
	id: ProxyIdentifier<S>,
}

impl<S> InstanceSetter<'_, S>
where
	S: ?Sized + Send + Sync + 'static,
{
	/// Records `instance` under the setter's identifier and returns it
	/// unchanged, allowing fluent assignment at the call site.
	pub fn set(self, instance: Arc<S>) -> Arc<S> {
		trace!(name = self.id.name(), origin = %self.id.origin(), "bound proxy instance");
		self.collection
			.instances
			.insert(self.id.key(), Box::new(Arc::clone(&instance)));
		instance
	}
}
