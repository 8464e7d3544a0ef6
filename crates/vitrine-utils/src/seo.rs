//! Meta-tag and SEO updates.
//!
//! The host HTML carries a fixed set of id-tagged meta elements; values
//! present in the page's [`SeoData`] are written into them, absent values
//! are skipped, and no tag is ever removed.

use vitrine_core::dom;
use vitrine_types::SeoData;

#[derive(Clone, Copy)]
enum Target {
	Text,
	Content,
	Href,
}

/// Applies SEO metadata to the document's fixed meta-tag slots.
///
/// The canonical URL falls back to the current location when the data does
/// not carry one.
pub fn update_meta_tags(seo: &SeoData) {
	let canonical = seo.canonical.clone().or_else(current_href);

	let title = seo.title.as_deref();
	let description = seo.description.as_deref();
	let og_image = seo.og_image.as_deref();
	let updates: [(&str, Target, Option<&str>); 13] = [
		("#page-title", Target::Text, title),
		("title", Target::Text, title),
		("#page-description", Target::Content, description),
		("#page-keywords", Target::Content, seo.keywords.as_deref()),
		("#page-author", Target::Content, seo.author.as_deref()),
		("#page-canonical", Target::Href, canonical.as_deref()),
		("#og-title", Target::Content, title),
		("#og-description", Target::Content, description),
		("#og-url", Target::Content, canonical.as_deref()),
		("#og-image", Target::Content, og_image),
		("#twitter-title", Target::Content, title),
		("#twitter-description", Target::Content, description),
		("#twitter-image", Target::Content, og_image),
	];

	for (selector, target, value) in updates {
		let (Some(element), Some(value)) = (dom::query(selector), value) else {
			continue;
		};
		match target {
			Target::Text => element.set_text_content(Some(value)),
			Target::Content => {
				let _ = element.set_attribute("content", value);
			}
			Target::Href => {
				let _ = element.set_attribute("href", value);
			}
		}
	}
}

/// Writes a JSON-LD payload into the `#structured-data` script tag.
pub fn update_structured_data(data: &serde_json::Value) {
	let Some(element) = dom::query("#structured-data") else {
		return;
	};
	if let Ok(encoded) = serde_json::to_string(data) {
		element.set_text_content(Some(&encoded));
	}
}

/// Points the `#theme-css` stylesheet link at a named theme.
pub fn load_theme_stylesheet(name: &str) {
	if let Some(link) = dom::query("#theme-css") {
		let _ = link.set_attribute("href", &format!("themes/{name}.css"));
	}
}

fn current_href() -> Option<String> {
	web_sys::window()?.location().href().ok()
}
