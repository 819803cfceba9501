//! Startup wiring entry points.
//!
//! Each side wires its services by filling a service struct and handing it
//! to the matching `wire_*` function. The structs carry one field per
//! declared identifier, so a service added to a context without a
//! counterpart here (or vice versa) fails to compile instead of surfacing as
//! a missing binding at startup.
//!
//! Partial or dynamic wiring (tests, embedders that stub services) can still
//! drive [`InstanceCollection`] directly.

use std::sync::Arc;

use vellum_proxy::{DispatchService, InstanceCollection, Result};

use crate::contexts::{ExtHostContext, HostContext};
use crate::shapes::{
	ExtCommandsShape, ExtConfigurationShape, ExtDocumentsShape, ExtExtensionsShape,
	ExtWorkspaceShape, HostCommandsShape, HostConfigurationShape, HostDiagnosticsShape,
	HostDocumentsShape, HostMessagesShape, HostOutputShape, HostStatusBarShape,
};

/// The complete set of host-side service implementations.
pub struct HostServices {
	/// Command registration and execution.
	pub commands: Arc<dyn HostCommandsShape>,
	/// Configuration writes.
	pub configuration: Arc<dyn HostConfigurationShape>,
	/// Diagnostics publication.
	pub diagnostics: Arc<dyn HostDiagnosticsShape>,
	/// Document lifecycle.
	pub documents: Arc<dyn HostDocumentsShape>,
	/// User-facing messages.
	pub messages: Arc<dyn HostMessagesShape>,
	/// Status bar entries.
	pub status_bar: Arc<dyn HostStatusBarShape>,
	/// Output channels.
	pub output: Arc<dyn HostOutputShape>,
}

/// Binds every host-side service and commits the bindings to `dispatch`.
pub fn wire_host(ctx: &HostContext, services: HostServices, dispatch: &mut dyn DispatchService) -> Result<()> {
	let mut collection = InstanceCollection::new();
	collection.define(ctx.commands).set(services.commands);
	collection.define(ctx.configuration).set(services.configuration);
	collection.define(ctx.diagnostics).set(services.diagnostics);
	collection.define(ctx.documents).set(services.documents);
	collection.define(ctx.messages).set(services.messages);
	collection.define(ctx.status_bar).set(services.status_bar);
	collection.define(ctx.output).set(services.output);
	collection.finish(ctx.table(), dispatch)
}

/// The complete set of extension-side service implementations.
pub struct ExtHostServices {
	/// Contributed command invocation.
	pub commands: Arc<dyn ExtCommandsShape>,
	/// Configuration pushes.
	pub configuration: Arc<dyn ExtConfigurationShape>,
	/// Document synchronization.
	pub documents: Arc<dyn ExtDocumentsShape>,
	/// Workspace state pushes.
	pub workspace: Arc<dyn ExtWorkspaceShape>,
	/// Extension lifecycle control.
	pub extensions: Arc<dyn ExtExtensionsShape>,
}

/// Binds every extension-side service and commits the bindings to `dispatch`.
pub fn wire_ext_host(
	ctx: &ExtHostContext,
	services: ExtHostServices,
	dispatch: &mut dyn DispatchService,
) -> Result<()> {
	let mut collection = InstanceCollection::new();
	collection.define(ctx.commands).set(services.commands);
	collection.define(ctx.configuration).set(services.configuration);
	collection.define(ctx.documents).set(services.documents);
	collection.define(ctx.workspace).set(services.workspace);
	collection.define(ctx.extensions).set(services.extensions);
	collection.finish(ctx.table(), dispatch)
}
