//! Site header with mobile nav drawer.
//!
//! The header renders brand, navigation, an optional call-to-action and an
//! optional back button. With an empty navigation list the desktop nav, the
//! mobile drawer and the menu toggle are all omitted — no empty nav markup
//! is ever emitted.

use vitrine_core::{Component, IntoPage, Page, PageElement};
use vitrine_types::NavItem;

/// Brand block data. Absent fields fall back to the "LP" logo, the
/// "Landing Page" title and an empty subtitle.
#[derive(Debug, Clone, Default)]
pub struct Brand {
	/// Logo text.
	pub logo: Option<String>,
	/// Brand title.
	pub title: Option<String>,
	/// Brand subtitle.
	pub subtitle: Option<String>,
}

/// Header call-to-action button.
#[derive(Debug, Clone)]
pub struct HeaderCta {
	/// Button text.
	pub text: String,
	/// Button target.
	pub href: String,
	/// Icon name.
	pub icon: Option<String>,
	/// Anchor target attribute.
	pub target: Option<String>,
}

/// Everything the header renders from.
#[derive(Debug, Clone, Default)]
pub struct HeaderData {
	/// Brand block.
	pub brand: Brand,
	/// Navigation entries; empty suppresses all nav markup.
	pub navigation: Vec<NavItem>,
	/// Optional call-to-action.
	pub cta: Option<HeaderCta>,
	/// Whether to render the back-to-listing link.
	pub show_back_button: bool,
}

/// The header component.
#[derive(Debug)]
pub struct Header {
	data: HeaderData,
	#[cfg(target_arch = "wasm32")]
	mounted: Option<wasm::Mounted>,
}

impl Header {
	/// Creates a header for the given data.
	pub fn new(data: HeaderData) -> Self {
		Self {
			data,
			#[cfg(target_arch = "wasm32")]
			mounted: None,
		}
	}
}

impl Component for Header {
	fn render(&self) -> Page {
		render_header(&self.data)
	}

	fn name() -> &'static str {
		"Header"
	}
}

fn render_header(data: &HeaderData) -> Page {
	let has_nav = !data.navigation.is_empty();

	let back_button = data.show_back_button.then(|| {
		PageElement::new("a")
			.attr("href", "index.html")
			.attr("class", "back-to-home")
			.child(icon("arrow-back-outline"))
			.child("Voltar ao início")
	});

	let menu_toggle = has_nav.then(|| {
		PageElement::new("button")
			.attr("class", "mobile-menu-toggle")
			.attr("id", "mobile-menu-toggle")
			.attr("aria-label", "Abrir menu")
			.child(icon("menu-outline"))
	});

	let header_container = PageElement::new("div")
		.attr("class", "header-container")
		.child(back_button)
		.child(
			PageElement::new("a")
				.attr("href", "index.html")
				.attr("class", "header-brand")
				.child(brand_block(&data.brand)),
		)
		.child(has_nav.then(|| desktop_nav(data)))
		.child(menu_toggle);

	let container = PageElement::new("div")
		.attr("class", "container")
		.child(header_container);

	(container, has_nav.then(|| mobile_drawer(data))).into_page()
}

fn brand_block(brand: &Brand) -> Page {
	(
		PageElement::new("div")
			.attr("class", "brand-logo")
			.child(brand.logo.clone().unwrap_or_else(|| "LP".to_string())),
		PageElement::new("div")
			.attr("class", "brand-info")
			.child(
				PageElement::new("h1")
					.attr("class", "brand-title")
					.child(brand.title.clone().unwrap_or_else(|| "Landing Page".to_string())),
			)
			.child(
				PageElement::new("p")
					.attr("class", "brand-subtitle")
					.child(brand.subtitle.clone().unwrap_or_default()),
			),
	)
		.into_page()
}

fn desktop_nav(data: &HeaderData) -> PageElement {
	PageElement::new("nav")
		.attr("class", "header-nav")
		.child(nav_list(&data.navigation, "nav-link", "nav-links"))
		.child(data.cta.as_ref().map(|cta| {
			PageElement::new("div")
				.attr("class", "header-cta")
				.child(cta_link(cta, "btn btn-primary"))
		}))
}

fn mobile_drawer(data: &HeaderData) -> PageElement {
	PageElement::new("div")
		.attr("class", "mobile-nav")
		.attr("id", "mobile-nav")
		.child(
			PageElement::new("div")
				.attr("class", "mobile-nav-header")
				.child(
					PageElement::new("div")
						.attr("class", "header-brand")
						.child(brand_block(&data.brand)),
				)
				.child(
					PageElement::new("button")
						.attr("class", "mobile-nav-close")
						.attr("id", "mobile-nav-close")
						.attr("aria-label", "Fechar menu")
						.child(icon("close-outline")),
				),
		)
		.child(nav_list(&data.navigation, "mobile-nav-link", "mobile-nav-links"))
		.child(data.cta.as_ref().map(|cta| {
			PageElement::new("div")
				.attr("class", "mobile-nav-cta")
				.child(cta_link(cta, "btn btn-primary btn-block"))
		}))
}

fn nav_list(navigation: &[NavItem], link_class: &'static str, list_class: &'static str) -> PageElement {
	PageElement::new("ul")
		.attr("class", list_class)
		.children(navigation.iter().map(|item| {
			PageElement::new("li").child(
				PageElement::new("a")
					.attr("href", item.href.clone())
					.attr("class", link_class)
					.attr("data-section", item.href.replace('#', ""))
					.child(item.label.clone()),
			)
		}))
}

fn cta_link(cta: &HeaderCta, class: &'static str) -> PageElement {
	PageElement::new("a")
		.attr("href", cta.href.clone())
		.attr("class", class)
		.attr_opt("target", cta.target.clone())
		.child(cta.icon.clone().map(icon))
		.child(cta.text.clone())
}

fn icon(name: impl Into<std::borrow::Cow<'static, str>>) -> PageElement {
	PageElement::new("ion-icon").attr("name", name)
}

#[cfg(target_arch = "wasm32")]
mod wasm {
	use std::cell::{Cell, RefCell};
	use std::collections::BTreeSet;
	use std::rc::Rc;

	use wasm_bindgen::closure::Closure;
	use wasm_bindgen::{JsCast, JsValue};
	use web_sys::{Element, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

	use vitrine_core::dom::{self, EventHandle, ScrollLock};
	use vitrine_core::{Component, EventType, MountError};

	use super::{Header, HeaderData};

	/// Live DOM state of a mounted header.
	#[derive(Debug)]
	pub(super) struct Mounted {
		container: Element,
		#[allow(dead_code)] // handles are held for their Drop side effect
		handles: Vec<EventHandle>,
		drawer: Option<Rc<RefCell<Drawer>>>,
		#[allow(dead_code)] // observer disconnects on drop
		observer: Option<SectionObserver>,
	}

	/// Mobile nav drawer state; the scroll lock lives exactly as long as the
	/// drawer is open.
	#[derive(Debug)]
	struct Drawer {
		panel: Element,
		lock: Option<ScrollLock>,
	}

	impl Drawer {
		fn open(&mut self) {
			let _ = self.panel.class_list().add_1("open");
			if self.lock.is_none() {
				self.lock = Some(ScrollLock::acquire());
			}
		}

		fn close(&mut self) {
			let _ = self.panel.class_list().remove_1("open");
			self.lock = None;
		}
	}

	struct SectionObserver {
		observer: IntersectionObserver,
		_callback: Closure<dyn FnMut(js_sys::Array)>,
	}

	impl Drop for SectionObserver {
		fn drop(&mut self) {
			self.observer.disconnect();
		}
	}

	impl std::fmt::Debug for SectionObserver {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			f.debug_struct("SectionObserver").finish()
		}
	}

	impl Header {
		/// Mounts the header into the element matched by `selector` and
		/// binds its listeners.
		pub fn mount(&mut self, selector: &str) -> Result<(), MountError> {
			let container = dom::resolve_container(selector)?;
			self.mount_into(container)
		}

		/// Re-renders with new data. A full re-mount, not incremental.
		pub fn update(&mut self, data: HeaderData) -> Result<(), MountError> {
			self.data = data;
			let Some(mounted) = self.mounted.take() else {
				return Ok(());
			};
			let container = mounted.container.clone();
			drop(mounted);
			self.mount_into(container)
		}

		/// Closes the mobile menu and empties the container.
		pub fn destroy(&mut self) {
			if let Some(mounted) = self.mounted.take() {
				if let Some(drawer) = &mounted.drawer {
					drawer.borrow_mut().close();
				}
				dom::clear(&mounted.container);
			}
		}

		fn mount_into(&mut self, container: Element) -> Result<(), MountError> {
			self.mounted = None;
			dom::set_html(&container, &self.render());

			let mut handles = Vec::new();
			let drawer = bind_drawer(&container, &mut handles)?;
			bind_nav_links(&container, &mut handles, drawer.clone())?;
			bind_scroll_state(&container, &mut handles)?;
			let observer = observe_sections(&container);

			self.mounted = Some(Mounted {
				container,
				handles,
				drawer,
				observer,
			});
			Ok(())
		}
	}

	fn bind_drawer(
		container: &Element,
		handles: &mut Vec<EventHandle>,
	) -> Result<Option<Rc<RefCell<Drawer>>>, MountError> {
		let toggle = container.query_selector("#mobile-menu-toggle").ok().flatten();
		let panel = container.query_selector("#mobile-nav").ok().flatten();
		let (Some(toggle), Some(panel)) = (toggle, panel) else {
			return Ok(None);
		};

		let drawer = Rc::new(RefCell::new(Drawer {
			panel: panel.clone(),
			lock: None,
		}));

		handles.push(dom::listen(toggle.as_ref(), EventType::Click, {
			let drawer = Rc::clone(&drawer);
			move |_event| drawer.borrow_mut().open()
		})?);

		if let Ok(Some(close)) = container.query_selector("#mobile-nav-close") {
			handles.push(dom::listen(close.as_ref(), EventType::Click, {
				let drawer = Rc::clone(&drawer);
				move |_event| drawer.borrow_mut().close()
			})?);
		}

		// Backdrop click: only when the panel itself is the event target
		handles.push(dom::listen(panel.as_ref(), EventType::Click, {
			let drawer = Rc::clone(&drawer);
			let panel = panel.clone();
			move |event| {
				let on_backdrop = event
					.target()
					.and_then(|target| target.dyn_into::<Element>().ok())
					.is_some_and(|target| target.is_same_node(Some(panel.as_ref())));
				if on_backdrop {
					drawer.borrow_mut().close();
				}
			}
		})?);

		let document: EventTarget = dom::document()?.into();
		handles.push(dom::listen(&document, EventType::KeyDown, {
			let drawer = Rc::clone(&drawer);
			move |event| {
				let escape = event
					.dyn_ref::<web_sys::KeyboardEvent>()
					.is_some_and(|key_event| key_event.key() == "Escape");
				if escape {
					drawer.borrow_mut().close();
				}
			}
		})?);

		Ok(Some(drawer))
	}

	fn bind_nav_links(
		container: &Element,
		handles: &mut Vec<EventHandle>,
		drawer: Option<Rc<RefCell<Drawer>>>,
	) -> Result<(), MountError> {
		for link in dom::query_within(container, ".nav-link, .mobile-nav-link") {
			let Some(href) = link.get_attribute("href") else {
				continue;
			};
			let Some(section_id) = href.strip_prefix('#').map(str::to_string) else {
				continue;
			};
			let drawer = drawer.clone();
			handles.push(dom::listen(link.as_ref(), EventType::Click, move |event| {
				event.prevent_default();
				dom::smooth_scroll_to(&section_id);
				if let Some(drawer) = &drawer {
					drawer.borrow_mut().close();
				}
			})?);
		}
		Ok(())
	}

	/// Toggles the `header-scrolled` class once the page scrolls past 50px,
	/// coalesced through a single in-flight animation frame.
	fn bind_scroll_state(container: &Element, handles: &mut Vec<EventHandle>) -> Result<(), MountError> {
		let element = container.clone();
		let scrolled = Cell::new(false);
		handles.push(dom::on_scroll_frame(move || {
			let now = dom::scroll_offset() > 50.0;
			if now != scrolled.get() {
				scrolled.set(now);
				dom::toggle_class(&element, "header-scrolled", now);
			}
		})?);
		Ok(())
	}

	/// Highlights the nav link of the currently visible section.
	///
	/// When several sections intersect at once, the topmost in document
	/// order wins; the set of intersecting ids is kept across observer
	/// callbacks so partial updates stay deterministic.
	fn observe_sections(container: &Element) -> Option<SectionObserver> {
		let sections = dom::query_all("section[id]");
		let links = dom::query_within(container, ".nav-link, .mobile-nav-link");
		if sections.is_empty() || links.is_empty() {
			return None;
		}

		let order: Vec<String> = sections.iter().map(Element::id).collect();
		let intersecting: Rc<RefCell<BTreeSet<String>>> = Rc::new(RefCell::new(BTreeSet::new()));

		let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				let id = entry.target().id();
				if entry.is_intersecting() {
					intersecting.borrow_mut().insert(id);
				} else {
					intersecting.borrow_mut().remove(&id);
				}
			}

			let visible = intersecting.borrow();
			let active = order.iter().find(|id| visible.contains(*id));
			for link in &links {
				let matches = active.is_some_and(|id| {
					link.get_attribute("data-section").as_deref() == Some(id.as_str())
				});
				dom::toggle_class(link, "active", matches);
			}
		}) as Box<dyn FnMut(js_sys::Array)>);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(0.3));
		options.set_root_margin("-80px 0px -80px 0px");
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
				.ok()?;
		for section in &sections {
			observer.observe(section);
		}

		Some(SectionObserver {
			observer,
			_callback: callback,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_types::NavItem;

	fn nav(items: &[(&str, &str)]) -> Vec<NavItem> {
		items
			.iter()
			.map(|(label, href)| NavItem {
				label: label.to_string(),
				href: href.to_string(),
			})
			.collect()
	}

	#[test]
	fn test_defaults_without_data() {
		let html = Header::new(HeaderData::default()).render().render_to_string();
		assert!(html.contains("<div class=\"brand-logo\">LP</div>"));
		assert!(html.contains("<h1 class=\"brand-title\">Landing Page</h1>"));
		assert!(html.contains("<p class=\"brand-subtitle\"></p>"));
		assert!(!html.contains("back-to-home"));
	}

	#[test]
	fn test_empty_navigation_omits_all_nav_markup() {
		let html = Header::new(HeaderData::default()).render().render_to_string();
		assert!(!html.contains("header-nav"));
		assert!(!html.contains("mobile-nav"));
		assert!(!html.contains("mobile-menu-toggle"));
		assert!(!html.contains("<nav"));
		assert!(!html.contains("<ul"));
	}

	#[test]
	fn test_navigation_renders_desktop_and_drawer() {
		let data = HeaderData {
			navigation: nav(&[("Início", "#hero"), ("Contato", "#contact")]),
			..HeaderData::default()
		};
		let html = Header::new(data).render().render_to_string();
		assert!(html.contains("class=\"header-nav\""));
		assert!(html.contains("id=\"mobile-nav\""));
		assert!(html.contains("id=\"mobile-menu-toggle\""));
		assert!(html.contains("data-section=\"hero\""));
		assert!(html.contains("data-section=\"contact\""));
		// Drawer repeats each link with its own class
		assert_eq!(html.matches("class=\"mobile-nav-link\"").count(), 2);
	}

	#[test]
	fn test_back_button() {
		let data = HeaderData {
			show_back_button: true,
			..HeaderData::default()
		};
		let html = Header::new(data).render().render_to_string();
		assert!(html.contains("class=\"back-to-home\""));
		assert!(html.contains("Voltar ao início"));
	}

	#[test]
	fn test_cta_renders_only_inside_nav() {
		// A CTA without navigation entries has nowhere to render.
		let data = HeaderData {
			cta: Some(HeaderCta {
				text: "Falar Conosco".to_string(),
				href: "https://wa.me/55".to_string(),
				icon: Some("logo-whatsapp".to_string()),
				target: Some("_blank".to_string()),
			}),
			..HeaderData::default()
		};
		let html = Header::new(data.clone()).render().render_to_string();
		assert!(!html.contains("header-cta"));

		let data = HeaderData {
			navigation: nav(&[("Início", "#hero")]),
			..data
		};
		let html = Header::new(data).render().render_to_string();
		assert!(html.contains("class=\"header-cta\""));
		assert!(html.contains("target=\"_blank\""));
		assert!(html.contains("name=\"logo-whatsapp\""));
		assert!(html.contains("btn btn-primary btn-block"));
	}
}
