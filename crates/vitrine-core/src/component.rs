//! Component trait definition.

use crate::page::Page;

/// Trait for reusable UI components.
///
/// A component owns its input data and renders it to a [`Page`] without
/// touching the document; mounting and event binding are separate, WASM-only
/// steps on the concrete type. `render` must stay pure so component markup
/// can be asserted in ordinary unit tests.
///
/// # Example
///
/// ```
/// use vitrine_core::{Component, Page, PageElement, IntoPage};
///
/// struct Greeting {
/// 	name: String,
/// }
///
/// impl Component for Greeting {
/// 	fn render(&self) -> Page {
/// 		PageElement::new("div")
/// 			.attr("class", "greeting")
/// 			.child(format!("Hello, {}!", self.name))
/// 			.into_page()
/// 	}
///
/// 	fn name() -> &'static str {
/// 		"Greeting"
/// 	}
/// }
///
/// let greeting = Greeting { name: "World".to_string() };
/// assert_eq!(
/// 	greeting.render().render_to_string(),
/// 	"<div class=\"greeting\">Hello, World!</div>"
/// );
/// ```
pub trait Component {
	/// Renders the component to a view tree.
	fn render(&self) -> Page;

	/// Returns the component's name, used in log messages.
	fn name() -> &'static str
	where
		Self: Sized;
}
