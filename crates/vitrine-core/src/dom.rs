//! Thin DOM layer over `web-sys`.
//!
//! Everything here is WASM-only. The rest of the workspace builds view trees
//! and plain data; this module is where markup is injected, listeners are
//! attached, and the handful of shared page-level resources (the body scroll
//! lock, the animation-frame flag) live.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::MountError;
use crate::page::Page;
use crate::page::event::EventType;

/// Returns the window object.
pub fn window() -> Result<Window, MountError> {
	web_sys::window().ok_or(MountError::NoWindow)
}

/// Returns the document object.
pub fn document() -> Result<Document, MountError> {
	window()?.document().ok_or(MountError::NoDocument)
}

/// Queries a single element; absent or invalid selectors yield `None`.
pub fn query(selector: &str) -> Option<Element> {
	document().ok()?.query_selector(selector).ok().flatten()
}

/// Queries all matching elements in the document.
pub fn query_all(selector: &str) -> Vec<Element> {
	let Ok(doc) = document() else {
		return Vec::new();
	};
	match doc.query_selector_all(selector) {
		Ok(list) => collect_elements(&list),
		Err(_) => Vec::new(),
	}
}

/// Queries all matching elements below `root`.
pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
	match root.query_selector_all(selector) {
		Ok(list) => collect_elements(&list),
		Err(_) => Vec::new(),
	}
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
	let mut out = Vec::with_capacity(list.length() as usize);
	for i in 0..list.length() {
		if let Some(node) = list.get(i) {
			if let Ok(el) = node.dyn_into::<Element>() {
				out.push(el);
			}
		}
	}
	out
}

/// Looks up an element by id.
pub fn by_id(id: &str) -> Option<Element> {
	document().ok()?.get_element_by_id(id)
}

/// Resolves a mount target selector, failing with
/// [`MountError::ContainerNotFound`] when it matches nothing.
pub fn resolve_container(selector: &str) -> Result<Element, MountError> {
	query(selector).ok_or_else(|| MountError::ContainerNotFound(selector.to_string()))
}

/// Replaces the container's children with the rendered view.
pub fn set_html(container: &Element, view: &Page) {
	container.set_inner_html(&view.render_to_string());
}

/// Empties the container.
pub fn clear(container: &Element) {
	container.set_inner_html("");
}

/// Builds a detached element from a view tree and returns its root node.
pub fn element_from_page(view: &Page) -> Result<Element, MountError> {
	let doc = document()?;
	let host = doc
		.create_element("div")
		.map_err(|_| MountError::CreateElementFailed)?;
	host.set_inner_html(&view.render_to_string());
	host.first_element_child()
		.ok_or(MountError::CreateElementFailed)
}

/// Makes an element visible again (inline display cleared, `hidden` class
/// removed).
pub fn show(el: &Element) {
	if let Some(html) = el.dyn_ref::<HtmlElement>() {
		let _ = html.style().remove_property("display");
	}
	let _ = el.class_list().remove_1("hidden");
}

/// Hides an element (`display: none` plus the `hidden` class).
pub fn hide(el: &Element) {
	if let Some(html) = el.dyn_ref::<HtmlElement>() {
		let _ = html.style().set_property("display", "none");
	}
	let _ = el.class_list().add_1("hidden");
}

/// Toggles element visibility.
pub fn toggle(el: &Element) {
	let display_none = el
		.dyn_ref::<HtmlElement>()
		.and_then(|html| html.style().get_property_value("display").ok())
		.is_some_and(|value| value == "none");
	if display_none || el.class_list().contains("hidden") {
		show(el);
	} else {
		hide(el);
	}
}

/// Adds or removes a class depending on `on`.
pub fn toggle_class(el: &Element, class: &str, on: bool) {
	if on {
		let _ = el.class_list().add_1(class);
	} else {
		let _ = el.class_list().remove_1(class);
	}
}

/// Marks an element as busy-loading.
pub fn show_loading(el: &Element, text: &str) {
	let _ = el.class_list().add_1("loading");
	let _ = el.set_attribute("aria-busy", "true");
	if !text.is_empty() {
		let _ = el.set_attribute("data-loading-text", text);
	}
}

/// Clears the busy-loading markers.
pub fn hide_loading(el: &Element) {
	let _ = el.class_list().remove_1("loading");
	let _ = el.remove_attribute("aria-busy");
	let _ = el.remove_attribute("data-loading-text");
}

/// An attached event listener.
///
/// The handle owns the JS closure; dropping it detaches the listener, so a
/// re-mounted or destroyed component cannot leak handlers into the document.
pub struct EventHandle {
	target: EventTarget,
	event: &'static str,
	capture: bool,
	closure: Closure<dyn FnMut(Event)>,
}

impl Drop for EventHandle {
	fn drop(&mut self) {
		let function = self.closure.as_ref().unchecked_ref();
		let _ = if self.capture {
			self.target
				.remove_event_listener_with_callback_and_bool(self.event, function, true)
		} else {
			self.target
				.remove_event_listener_with_callback(self.event, function)
		};
	}
}

impl std::fmt::Debug for EventHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventHandle")
			.field("event", &self.event)
			.field("capture", &self.capture)
			.finish()
	}
}

/// Attaches a bubbling-phase event listener.
pub fn listen(
	target: &EventTarget,
	event: EventType,
	handler: impl FnMut(Event) + 'static,
) -> Result<EventHandle, MountError> {
	listen_inner(target, event, false, handler)
}

/// Attaches a capture-phase event listener.
pub fn listen_capture(
	target: &EventTarget,
	event: EventType,
	handler: impl FnMut(Event) + 'static,
) -> Result<EventHandle, MountError> {
	listen_inner(target, event, true, handler)
}

fn listen_inner(
	target: &EventTarget,
	event: EventType,
	capture: bool,
	handler: impl FnMut(Event) + 'static,
) -> Result<EventHandle, MountError> {
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	let function = closure.as_ref().unchecked_ref();
	let attached = if capture {
		target.add_event_listener_with_callback_and_bool(event.as_str(), function, true)
	} else {
		target.add_event_listener_with_callback(event.as_str(), function)
	};
	attached.map_err(|_| MountError::ListenerAttachFailed(event.as_str().to_string()))?;
	Ok(EventHandle {
		target: target.clone(),
		event: event.as_str(),
		capture,
		closure,
	})
}

thread_local! {
	static SCROLL_LOCKS: Cell<usize> = const { Cell::new(0) };
}

/// A reference-counted hold on the body scroll lock.
///
/// Any overlay (mobile nav drawer, image lightbox) acquires a guard while
/// open. Body scrolling is suppressed while at least one guard is alive and
/// restored when the last one drops, so overlapping overlays cannot race
/// each other back to a scrollable page.
#[derive(Debug)]
pub struct ScrollLock {
	_private: (),
}

impl ScrollLock {
	/// Acquires the lock, suppressing body scrolling.
	pub fn acquire() -> Self {
		SCROLL_LOCKS.with(|count| {
			if count.get() == 0 {
				if let Some(body) = document().ok().and_then(|doc| doc.body()) {
					let _ = body.style().set_property("overflow", "hidden");
				}
			}
			count.set(count.get() + 1);
		});
		Self { _private: () }
	}

	/// Number of live guards. Exposed for tests.
	pub fn active() -> usize {
		SCROLL_LOCKS.with(Cell::get)
	}
}

impl Drop for ScrollLock {
	fn drop(&mut self) {
		SCROLL_LOCKS.with(|count| {
			count.set(count.get().saturating_sub(1));
			if count.get() == 0 {
				if let Some(body) = document().ok().and_then(|doc| doc.body()) {
					let _ = body.style().remove_property("overflow");
				}
			}
		});
	}
}

/// Attaches a scroll listener whose work is coalesced through a single
/// in-flight animation frame: however fast scroll events arrive, at most one
/// `update` call is pending at a time.
pub fn on_scroll_frame(update: impl FnMut() + 'static) -> Result<EventHandle, MountError> {
	let ticking = Rc::new(Cell::new(false));
	let update = Rc::new(RefCell::new(update));
	let target: EventTarget = window()?.into();
	listen(&target, EventType::Scroll, move |_event| {
		if ticking.get() {
			return;
		}
		ticking.set(true);
		let tick = Rc::clone(&ticking);
		let update = Rc::clone(&update);
		let frame = Closure::once_into_js(move || {
			(&mut *update.borrow_mut())();
			tick.set(false);
		});
		let scheduled = window()
			.ok()
			.and_then(|win| win.request_animation_frame(frame.unchecked_ref()).ok());
		if scheduled.is_none() {
			ticking.set(false);
		}
	})
}

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> f64 {
	window()
		.ok()
		.and_then(|win| win.scroll_y().ok())
		.unwrap_or(0.0)
}

/// Smoothly scrolls to the section with the given id, leaving room for the
/// fixed site header (80px fallback plus a 20px margin).
pub fn smooth_scroll_to(section_id: &str) {
	let Ok(doc) = document() else {
		return;
	};
	let Some(section) = doc.get_element_by_id(section_id) else {
		return;
	};
	let header_height = query(".site-header")
		.and_then(|header| header.dyn_into::<HtmlElement>().ok())
		.map(|header| header.offset_height())
		.unwrap_or(80);
	let top = section
		.dyn_ref::<HtmlElement>()
		.map(|section| section.offset_top() - header_height - 20)
		.unwrap_or(0);

	let options = web_sys::ScrollToOptions::new();
	options.set_top(f64::from(top));
	options.set_behavior(web_sys::ScrollBehavior::Smooth);
	if let Ok(win) = window() {
		win.scroll_to_with_scroll_to_options(&options);
	}
}

/// Opens a URL in a new tab.
pub fn open_in_new_tab(url: &str) {
	if let Ok(win) = window() {
		let _ = win.open_with_url_and_target(url, "_blank");
	}
}

/// Navigates the current page.
pub fn navigate_to(url: &str) {
	if let Ok(win) = window() {
		let _ = win.location().set_href(url);
	}
}
