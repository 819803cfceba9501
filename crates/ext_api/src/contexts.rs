//! Context tables: the static identifier namespaces for each side.
//!
//! Each process builds both contexts once at startup and keeps them for the
//! life of the process. Identifiers are created only here, so nids are fixed
//! by declaration order and agree across the boundary as long as both
//! processes run the same build.

use vellum_proxy::{IdentifierTable, Origin, ProxyIdentifier};

use crate::shapes::{
	ExtCommandsShape, ExtConfigurationShape, ExtDocumentsShape, ExtExtensionsShape,
	ExtWorkspaceShape, HostCommandsShape, HostConfigurationShape, HostDiagnosticsShape,
	HostDocumentsShape, HostMessagesShape, HostOutputShape, HostStatusBarShape,
};

/// Services implemented in the host process, callable from extensions.
pub struct HostContext {
	table: IdentifierTable,
	/// Command registration and execution.
	pub commands: ProxyIdentifier<dyn HostCommandsShape>,
	/// Configuration writes.
	pub configuration: ProxyIdentifier<dyn HostConfigurationShape>,
	/// Diagnostics publication.
	pub diagnostics: ProxyIdentifier<dyn HostDiagnosticsShape>,
	/// Document lifecycle.
	pub documents: ProxyIdentifier<dyn HostDocumentsShape>,
	/// User-facing messages.
	pub messages: ProxyIdentifier<dyn HostMessagesShape>,
	/// Status bar entries.
	pub status_bar: ProxyIdentifier<dyn HostStatusBarShape>,
	/// Output channels.
	pub output: ProxyIdentifier<dyn HostOutputShape>,
}

impl HostContext {
	/// Builds the host-side identifier namespace.
	pub fn new() -> Self {
		let mut table = IdentifierTable::new(Origin::Host);
		let commands = table.register("HostCommands");
		let configuration = table.register("HostConfiguration");
		let diagnostics = table.register("HostDiagnostics");
		let documents = table.register("HostDocuments");
		let messages = table.register("HostMessages");
		let status_bar = table.register("HostStatusBar");
		let output = table.register("HostOutput");
		Self {
			table,
			commands,
			configuration,
			diagnostics,
			documents,
			messages,
			status_bar,
			output,
		}
	}

	/// The full host-side table, consumed by wiring.
	pub fn table(&self) -> &IdentifierTable {
		&self.table
	}
}

impl Default for HostContext {
	fn default() -> Self {
		Self::new()
	}
}

/// Services implemented in the extension process, callable from the host.
pub struct ExtHostContext {
	table: IdentifierTable,
	/// Contributed command invocation.
	pub commands: ProxyIdentifier<dyn ExtCommandsShape>,
	/// Configuration pushes.
	pub configuration: ProxyIdentifier<dyn ExtConfigurationShape>,
	/// Document synchronization.
	pub documents: ProxyIdentifier<dyn ExtDocumentsShape>,
	/// Workspace state pushes.
	pub workspace: ProxyIdentifier<dyn ExtWorkspaceShape>,
	/// Extension lifecycle control.
	pub extensions: ProxyIdentifier<dyn ExtExtensionsShape>,
}

impl ExtHostContext {
	/// Builds the extension-side identifier namespace.
	pub fn new() -> Self {
		let mut table = IdentifierTable::new(Origin::ExtHost);
		let commands = table.register("ExtHostCommands");
		let configuration = table.register("ExtHostConfiguration");
		let documents = table.register("ExtHostDocuments");
		let workspace = table.register("ExtHostWorkspace");
		let extensions = table.register("ExtHostExtensions");
		Self {
			table,
			commands,
			configuration,
			documents,
			workspace,
			extensions,
		}
	}

	/// The full extension-side table, consumed by wiring.
	pub fn table(&self) -> &IdentifierTable {
		&self.table
	}
}

impl Default for ExtHostContext {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn host_table_covers_every_identifier() {
		let ctx = HostContext::new();
		assert_eq!(ctx.table().len(), 7);
		assert_eq!(ctx.table().origin(), Origin::Host);
		let names: Vec<_> = ctx.table().entries().map(|(_, name)| name).collect();
		assert!(names.contains(&"HostCommands"));
		assert!(names.contains(&"HostOutput"));
	}

	#[test]
	fn ext_host_table_covers_every_identifier() {
		let ctx = ExtHostContext::new();
		assert_eq!(ctx.table().len(), 5);
		assert_eq!(ctx.table().origin(), Origin::ExtHost);
	}

	#[test]
	fn nids_are_stable_across_instances() {
		let a = HostContext::new();
		let b = HostContext::new();
		assert_eq!(a.commands, b.commands);
		assert_eq!(a.output, b.output);
	}
}
