//! Controller lifecycle phases.

/// The phases a page controller moves through.
///
/// The happy path is `Loading → DataLoaded → Rendered → Interactive`;
/// any failure drops straight to `Error` and stays there for the rest of
/// the page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
	/// Fetching the three JSON documents.
	#[default]
	Loading,
	/// Data passed the all-or-nothing gate.
	DataLoaded,
	/// Components mounted and sections rendered.
	Rendered,
	/// Page-level listeners attached; the page is live.
	Interactive,
	/// Unrecoverable failure; the error view owns the document.
	Error,
}

impl Phase {
	/// Whether the controller reached a terminal state.
	pub fn is_terminal(&self) -> bool {
		matches!(self, Self::Interactive | Self::Error)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_loading() {
		assert_eq!(Phase::default(), Phase::Loading);
	}

	#[test]
	fn test_terminal_phases() {
		assert!(Phase::Interactive.is_terminal());
		assert!(Phase::Error.is_terminal());
		assert!(!Phase::Loading.is_terminal());
		assert!(!Phase::DataLoaded.is_terminal());
		assert!(!Phase::Rendered.is_terminal());
	}
}
