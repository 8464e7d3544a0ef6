//! Page types for component rendering.
//!
//! The [`Page`] enum is the unified representation of renderable content: DOM
//! elements, text nodes, fragments, or nothing. Components produce a `Page`
//! from plain data; [`Page::render_to_string`] turns it into HTML. Rendering
//! is pure and runs on any target, which is what makes component markup
//! unit-testable off-browser.
//!
//! ## Example
//!
//! ```
//! use vitrine_core::page::{IntoPage, PageElement};
//!
//! let view = PageElement::new("div")
//! 	.attr("class", "container")
//! 	.child("Hello, World!")
//! 	.into_page();
//!
//! assert_eq!(view.render_to_string(), "<div class=\"container\">Hello, World!</div>");
//! ```

pub mod event;
mod markup;
mod util;

pub use markup::emphasized;
pub(crate) use util::html_escape;
pub use util::{BOOLEAN_ATTRS, is_boolean_attr_truthy};

use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node (escaped on render).
	Text(Cow<'static, str>),
	/// A fragment containing multiple views, with no wrapper element.
	Fragment(Vec<Page>),
	/// An empty view that renders nothing.
	Empty,
}

/// Represents a DOM element in the view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes in insertion order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl PageElement {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds an attribute only when a value is present.
	///
	/// Absent values emit nothing at all — no empty attribute is rendered.
	pub fn attr_opt(
		self,
		name: impl Into<Cow<'static, str>>,
		value: Option<impl Into<Cow<'static, str>>>,
	) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	/// Adds a boolean attribute.
	///
	/// Boolean attributes in HTML are either present (true) or absent
	/// (false). When true, the attribute is added with its own name as the
	/// value (e.g., `disabled="disabled"`); when false nothing is added.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value {
			let name = name.into();
			self.attr(name.clone(), name)
		} else {
			self
		}
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl Page {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					// Skip boolean attributes carrying falsy values
					let name_str: &str = name.as_ref();
					if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(value) {
						continue;
					}

					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a [`Page`].
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_void_element_detection() {
		assert!(PageElement::new("br").is_void());
		assert!(PageElement::new("img").is_void());
		assert!(!PageElement::new("div").is_void());
	}

	#[test]
	fn test_render_simple_element() {
		let view = PageElement::new("div").into_page();
		assert_eq!(view.render_to_string(), "<div></div>");
	}

	#[test]
	fn test_render_element_with_attrs() {
		let view = PageElement::new("div")
			.attr("class", "container")
			.attr("id", "main")
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<div class=\"container\" id=\"main\"></div>"
		);
	}

	#[test]
	fn test_render_void_element() {
		let view = PageElement::new("img").attr("src", "a.jpg").into_page();
		assert_eq!(view.render_to_string(), "<img src=\"a.jpg\" />");
	}

	#[test]
	fn test_render_nested_children() {
		let view = PageElement::new("div")
			.child("Hello, ")
			.child(PageElement::new("strong").child("World"))
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[test]
	fn test_render_text_with_escaping() {
		let view = Page::text("<script>alert('xss')</script>");
		assert_eq!(
			view.render_to_string(),
			"&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
		);
	}

	#[test]
	fn test_attr_value_escaping() {
		let view = PageElement::new("img")
			.attr("alt", "Tower \"A\" & annex")
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<img alt=\"Tower &quot;A&quot; &amp; annex\" />"
		);
	}

	#[test]
	fn test_render_fragment() {
		let view = Page::fragment(["One", "Two", "Three"]);
		assert_eq!(view.render_to_string(), "OneTwoThree");
	}

	#[test]
	fn test_render_empty() {
		assert_eq!(Page::empty().render_to_string(), "");
	}

	#[test]
	fn test_attr_opt_skips_absent_values() {
		let with = PageElement::new("a")
			.attr_opt("target", Some("_blank"))
			.into_page();
		let without = PageElement::new("a").attr_opt("target", None::<&str>).into_page();
		assert_eq!(with.render_to_string(), "<a target=\"_blank\"></a>");
		assert_eq!(without.render_to_string(), "<a></a>");
	}

	#[test]
	fn test_boolean_attr_falsy_not_rendered() {
		let view = PageElement::new("button")
			.attr("disabled", "false")
			.into_page();
		assert_eq!(view.render_to_string(), "<button></button>");
	}

	#[test]
	fn test_bool_attr_builder() {
		let on = PageElement::new("button").bool_attr("disabled", true).into_page();
		let off = PageElement::new("button").bool_attr("disabled", false).into_page();
		assert_eq!(on.render_to_string(), "<button disabled=\"disabled\"></button>");
		assert_eq!(off.render_to_string(), "<button></button>");
	}

	#[test]
	fn test_into_page_option() {
		assert_eq!(Some("Hello").into_page().render_to_string(), "Hello");
		assert_eq!(None::<String>.into_page().render_to_string(), "");
	}

	#[test]
	fn test_into_page_vec_and_tuple() {
		assert_eq!(vec!["A", "B", "C"].into_page().render_to_string(), "ABC");
		assert_eq!(("Hello, ", "World!").into_page().render_to_string(), "Hello, World!");
	}
}
