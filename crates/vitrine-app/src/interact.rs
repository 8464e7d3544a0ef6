//! Page-level interaction plumbing shared by both controllers.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, EventTarget, IntersectionObserver, IntersectionObserverEntry};

use vitrine_core::dom::{self, EventHandle};
use vitrine_core::{EventType, MountError, Page, warn_log};

/// Injects a section's markup into its container.
///
/// A missing container is a soft failure: it is logged and the section is
/// skipped, per the page-wide degradation rules.
pub fn mount_section(selector: &str, view: Page) {
	match dom::query(selector) {
		Some(container) => dom::set_html(&container, &view),
		None => warn_log!("container `{selector}` not found"),
	}
}

/// Shows the loading overlay.
pub fn show_loading_overlay() {
	if let Some(overlay) = dom::query("#loading-overlay") {
		let _ = overlay.class_list().remove_1("hidden");
	}
}

/// Hides the loading overlay.
pub fn hide_loading_overlay() {
	if let Some(overlay) = dom::query("#loading-overlay") {
		let _ = overlay.class_list().add_1("hidden");
	}
}

/// Document-wide smooth scrolling for in-page anchors.
pub fn bind_smooth_scroll() -> Result<EventHandle, MountError> {
	let document: EventTarget = dom::document()?.into();
	dom::listen(&document, EventType::Click, |event| {
		let Some(target) = event.target().and_then(|target| target.dyn_into::<Element>().ok())
		else {
			return;
		};
		let Ok(Some(link)) = target.closest("a[href^='#']") else {
			return;
		};
		let Some(href) = link.get_attribute("href") else {
			return;
		};
		event.prevent_default();
		dom::smooth_scroll_to(href.trim_start_matches('#'));
	})
}

/// Deferred image loading: swaps `data-src` into `src` the first time an
/// image approaches the viewport, then stops watching it.
pub struct LazyLoader {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl LazyLoader {
	/// Starts observing every `img[data-src]` in the document.
	pub fn observe() -> Option<Self> {
		let callback = Closure::wrap(Box::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if !entry.is_intersecting() {
						continue;
					}
					let image = entry.target();
					if let Some(src) = image.get_attribute("data-src") {
						let _ = image.set_attribute("src", &src);
						let _ = image.remove_attribute("data-src");
						observer.unobserve(&image);
					}
				}
			},
		)
			as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

		let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
		for image in dom::query_all("img[data-src]") {
			observer.observe(&image);
		}
		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for LazyLoader {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

impl std::fmt::Debug for LazyLoader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LazyLoader").finish()
	}
}
