//! Inline emphasis translation for copy text.
//!
//! Marketing copy in the JSON data carries a minimal inline syntax:
//! `**bold**` and `*italic*`. Rather than splicing raw HTML into the view
//! tree, the spans are translated into real `strong`/`em` elements, so the
//! surrounding text still goes through normal escaping.

use super::{IntoPage, Page, PageElement};

/// Translates `**bold**` / `*italic*` spans in `text` into a view fragment.
///
/// Matching is non-greedy and an unmatched marker is kept as literal text.
///
/// ```
/// use vitrine_core::page::emphasized;
///
/// let view = emphasized("last **3** units");
/// assert_eq!(view.render_to_string(), "last <strong>3</strong> units");
/// ```
pub fn emphasized(text: &str) -> Page {
	let mut nodes = Vec::new();
	for (chunk, bold) in split_marked(text, "**") {
		if bold {
			nodes.push(
				PageElement::new("strong")
					.child(italic_spans(chunk))
					.into_page(),
			);
		} else {
			nodes.push(italic_spans(chunk));
		}
	}
	Page::Fragment(nodes)
}

fn italic_spans(text: &str) -> Page {
	let mut nodes = Vec::new();
	for (chunk, em) in split_marked(text, "*") {
		if em {
			nodes.push(
				PageElement::new("em")
					.child(chunk.to_string())
					.into_page(),
			);
		} else if !chunk.is_empty() {
			nodes.push(Page::text(chunk.to_string()));
		}
	}
	Page::Fragment(nodes)
}

/// Splits `text` into alternating plain/marked segments on `marker` pairs.
fn split_marked<'a>(text: &'a str, marker: &str) -> Vec<(&'a str, bool)> {
	let mut parts = Vec::new();
	let mut rest = text;
	loop {
		let Some(start) = rest.find(marker) else {
			if !rest.is_empty() {
				parts.push((rest, false));
			}
			break;
		};
		let after = &rest[start + marker.len()..];
		let Some(end) = after.find(marker) else {
			// Unmatched marker stays literal
			if !rest.is_empty() {
				parts.push((rest, false));
			}
			break;
		};
		if start > 0 {
			parts.push((&rest[..start], false));
		}
		parts.push((&after[..end], true));
		rest = &after[end + marker.len()..];
	}
	parts
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_plain_text_passes_through() {
		assert_eq!(emphasized("no markers here").render_to_string(), "no markers here");
	}

	#[test]
	fn test_bold_span() {
		assert_eq!(
			emphasized("only **3 units** left").render_to_string(),
			"only <strong>3 units</strong> left"
		);
	}

	#[test]
	fn test_italic_span() {
		assert_eq!(
			emphasized("a *quiet* street").render_to_string(),
			"a <em>quiet</em> street"
		);
	}

	#[test]
	fn test_mixed_spans() {
		assert_eq!(
			emphasized("**Launch** pricing *this month*").render_to_string(),
			"<strong>Launch</strong> pricing <em>this month</em>"
		);
	}

	#[test]
	fn test_unmatched_marker_is_literal() {
		assert_eq!(emphasized("5* rating").render_to_string(), "5* rating");
	}

	#[test]
	fn test_escaping_still_applies() {
		assert_eq!(
			emphasized("**<b>**").render_to_string(),
			"<strong>&lt;b&gt;</strong>"
		);
	}
}
