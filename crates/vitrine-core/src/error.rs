//! Error types for the DOM boundary.

use thiserror::Error;

/// Error type for mounting views into the document.
///
/// A missing container is a soft failure by design: the caller logs it and
/// skips the section instead of failing the page.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
	/// Window object not available.
	#[error("window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("document object not available")]
	NoDocument,
	/// The mount target selector matched nothing.
	#[error("container `{0}` not found")]
	ContainerNotFound(String),
	/// Failed to create an element.
	#[error("failed to create element")]
	CreateElementFailed,
	/// Failed to attach an event listener.
	#[error("failed to attach `{0}` listener")]
	ListenerAttachFailed(String),
}
