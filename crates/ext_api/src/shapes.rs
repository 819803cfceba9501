//! Shape traits for remote-callable services.
//!
//! A shape is the method surface one side exposes to the other. Concrete
//! implementations must supply every operation; there are no default
//! methods, so an incomplete implementation fails to compile rather than
//! failing at call time.
//!
//! Payloads cross the boundary as [`serde_json::Value`]; the transport
//! serializes them, so shapes stay codec-agnostic.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure surfaced by a remote shape call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
	/// The remote side reported a failure.
	#[error("remote call failed: {0}")]
	Remote(String),
	/// The operation is not supported by the remote implementation.
	#[error("unsupported operation: {0}")]
	Unsupported(&'static str),
}

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
	/// Informational message.
	Info,
	/// Warning message.
	Warning,
	/// Error message.
	Error,
}

// Host-side shapes: callable from the extension process into the host.

/// Command registration and execution on the host.
#[async_trait]
pub trait HostCommandsShape: Send + Sync {
	/// Makes a contributed command invocable from the host side.
	async fn register_command(&self, id: &str) -> Result<(), ShapeError>;

	/// Removes a previously registered command.
	async fn unregister_command(&self, id: &str) -> Result<(), ShapeError>;

	/// Executes a command by id with positional arguments.
	async fn execute_command(&self, id: &str, args: Vec<Value>) -> Result<Value, ShapeError>;
}

/// Configuration writes issued by extensions.
#[async_trait]
pub trait HostConfigurationShape: Send + Sync {
	/// Updates one configuration key, `None` removes it.
	async fn update_value(&self, key: &str, value: Option<Value>) -> Result<(), ShapeError>;
}

/// Diagnostics published by extensions.
#[async_trait]
pub trait HostDiagnosticsShape: Send + Sync {
	/// Replaces the diagnostics of `owner` for one resource.
	async fn change(&self, owner: &str, uri: &str, entries: Vec<Value>) -> Result<(), ShapeError>;

	/// Drops every diagnostic published by `owner`.
	async fn clear(&self, owner: &str) -> Result<(), ShapeError>;
}

/// Document lifecycle requests from extensions.
#[async_trait]
pub trait HostDocumentsShape: Send + Sync {
	/// Opens (or reuses) the document at `uri` and returns its metadata.
	async fn try_open_document(&self, uri: &str) -> Result<Value, ShapeError>;

	/// Saves the document at `uri`, returns false if there was nothing to save.
	async fn try_save_document(&self, uri: &str) -> Result<bool, ShapeError>;
}

/// User-facing messages requested by extensions.
#[async_trait]
pub trait HostMessagesShape: Send + Sync {
	/// Shows a message with optional action items; resolves to the index of
	/// the chosen action, if any.
	async fn show_message(
		&self,
		severity: MessageSeverity,
		message: &str,
		actions: Vec<String>,
	) -> Result<Option<usize>, ShapeError>;
}

/// Status bar entries contributed by extensions.
#[async_trait]
pub trait HostStatusBarShape: Send + Sync {
	/// Creates or updates one entry.
	async fn set_entry(&self, id: &str, text: &str) -> Result<(), ShapeError>;

	/// Removes one entry.
	async fn dispose_entry(&self, id: &str) -> Result<(), ShapeError>;
}

/// Output channel writes from extensions.
#[async_trait]
pub trait HostOutputShape: Send + Sync {
	/// Appends a chunk to the named channel, creating it on first use.
	async fn append(&self, channel: &str, chunk: &str) -> Result<(), ShapeError>;
}

// Extension-side shapes: callable from the host into the extension process.

/// Invocation of commands contributed by extensions.
#[async_trait]
pub trait ExtCommandsShape: Send + Sync {
	/// Runs a contributed command inside the extension process.
	async fn execute_contributed_command(&self, id: &str, args: Vec<Value>) -> Result<Value, ShapeError>;
}

/// Configuration pushes into the extension process.
#[async_trait]
pub trait ExtConfigurationShape: Send + Sync {
	/// Delivers a full configuration snapshot after a change.
	async fn accept_configuration_changed(&self, snapshot: Value) -> Result<(), ShapeError>;
}

/// Document synchronization into the extension process.
#[async_trait]
pub trait ExtDocumentsShape: Send + Sync {
	/// Applies incremental content changes to the mirrored document.
	async fn accept_model_changed(&self, uri: &str, changes: Vec<Value>, dirty: bool) -> Result<(), ShapeError>;

	/// Marks the mirrored document as saved.
	async fn accept_model_saved(&self, uri: &str) -> Result<(), ShapeError>;
}

/// Workspace state pushes into the extension process.
#[async_trait]
pub trait ExtWorkspaceShape: Send + Sync {
	/// Delivers the workspace folder set, `None` when no workspace is open.
	async fn accept_workspace_data(&self, workspace: Option<Value>) -> Result<(), ShapeError>;
}

/// Extension lifecycle control.
#[async_trait]
pub trait ExtExtensionsShape: Send + Sync {
	/// Activates an extension; returns false if it was already active.
	async fn activate(&self, extension_id: &str, reason: Value) -> Result<bool, ShapeError>;

	/// Deactivates an extension before host shutdown.
	async fn deactivate(&self, extension_id: &str) -> Result<(), ShapeError>;
}
