//! DOM event types bound by Vitrine components.
//!
//! Trimmed to the events this project actually listens for; parsing an
//! unknown event name is an error rather than a silent fallback.

use std::str::FromStr;

use thiserror::Error;

/// A DOM event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Mouse click.
	Click,
	/// Key pressed down.
	KeyDown,
	/// Pointer entered an element.
	MouseEnter,
	/// Pointer left an element.
	MouseLeave,
	/// Viewport scrolled.
	Scroll,
	/// Viewport resized.
	Resize,
	/// Value changed (also fired by `MediaQueryList`).
	Change,
}

/// Error returned when parsing an unrecognized event name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event type `{0}`")]
pub struct UnknownEventType(pub String);

impl EventType {
	/// Returns the DOM event name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::KeyDown => "keydown",
			Self::MouseEnter => "mouseenter",
			Self::MouseLeave => "mouseleave",
			Self::Scroll => "scroll",
			Self::Resize => "resize",
			Self::Change => "change",
		}
	}
}

impl FromStr for EventType {
	type Err = UnknownEventType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"click" => Ok(Self::Click),
			"keydown" => Ok(Self::KeyDown),
			"mouseenter" => Ok(Self::MouseEnter),
			"mouseleave" => Ok(Self::MouseLeave),
			"scroll" => Ok(Self::Scroll),
			"resize" => Ok(Self::Resize),
			"change" => Ok(Self::Change),
			unknown => Err(UnknownEventType(unknown.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_round_trip() {
		for event in [
			EventType::Click,
			EventType::KeyDown,
			EventType::MouseEnter,
			EventType::MouseLeave,
			EventType::Scroll,
			EventType::Resize,
			EventType::Change,
		] {
			assert_eq!(event.as_str().parse::<EventType>(), Ok(event));
		}
	}

	#[test]
	fn test_unknown_event() {
		let err = "swipe".parse::<EventType>().unwrap_err();
		assert_eq!(err, UnknownEventType("swipe".to_string()));
	}
}
