//! Hero section with image gallery and fullscreen lightbox.
//!
//! CTAs tagged `whatsapp` or `contact` never navigate; they raise the
//! registered [`CtaClick`] callback so the page controller can resolve a
//! contact deep link. Every other CTA is a plain anchor.

use vitrine_core::{Callback, Component, IntoPage, Page, PageElement, emphasized};
use vitrine_types::{HeroCta, HeroData, HeroImage};

/// Fallback image used when a gallery asset fails to load.
pub const IMAGE_FALLBACK: &str = "media/placeholder-property.jpg";

/// Payload raised when an intercepted CTA is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaClick {
	/// CTA action tag (`whatsapp` or `contact`).
	pub action: String,
	/// WhatsApp template name, when the CTA names one.
	pub template: Option<String>,
	/// Visible button text.
	pub text: String,
}

/// The hero component.
#[derive(Debug)]
pub struct Hero {
	data: HeroData,
	on_cta: Option<Callback<CtaClick>>,
	#[cfg(target_arch = "wasm32")]
	mounted: Option<wasm::Mounted>,
}

impl Hero {
	/// Creates a hero for the given data.
	pub fn new(data: HeroData) -> Self {
		Self {
			data,
			on_cta: None,
			#[cfg(target_arch = "wasm32")]
			mounted: None,
		}
	}

	/// Registers the CTA callback. Must happen before `mount` for the
	/// binding step to see it.
	pub fn on_cta(&mut self, callback: Callback<CtaClick>) {
		self.on_cta = Some(callback);
	}
}

impl Component for Hero {
	fn render(&self) -> Page {
		render_hero(&self.data)
	}

	fn name() -> &'static str {
		"Hero"
	}
}

/// Returns true for CTA actions the component intercepts instead of
/// navigating.
pub fn is_intercepted_action(action: Option<&str>) -> bool {
	matches!(action, Some("whatsapp") | Some("contact"))
}

fn render_hero(data: &HeroData) -> Page {
	let content = PageElement::new("div")
		.attr("class", "hero-content")
		.child((!data.badge.is_empty()).then(|| {
			PageElement::new("span")
				.attr("class", "hero-badge")
				.child(data.badge.clone())
		}))
		.child(
			PageElement::new("h1")
				.attr("class", "hero-title")
				.child(data.title.clone()),
		)
		.child(
			PageElement::new("p")
				.attr("class", "hero-description")
				.child(data.description.clone()),
		)
		.child((!data.specs.is_empty()).then(|| {
			PageElement::new("div")
				.attr("class", "hero-specs")
				.children(data.specs.iter().map(|spec| {
					PageElement::new("div")
						.attr("class", "hero-spec")
						.child(
							PageElement::new("span")
								.attr("class", "hero-spec-value")
								.child(spec.value.clone()),
						)
						.child(
							PageElement::new("span")
								.attr("class", "hero-spec-label")
								.child(spec.label.clone()),
						)
				}))
		}))
		.child((!data.ctas.is_empty()).then(|| {
			PageElement::new("div")
				.attr("class", "hero-ctas")
				.children(data.ctas.iter().map(cta_anchor))
		}))
		.child((!data.highlight.is_empty()).then(|| {
			PageElement::new("div")
				.attr("class", "hero-highlight")
				.child(emphasized(&data.highlight))
		}));

	let container = PageElement::new("div").attr("class", "container").child(
		PageElement::new("div")
			.attr("class", "hero-container")
			.child(content)
			.child((!data.images.is_empty()).then(|| {
				PageElement::new("div")
					.attr("class", "hero-images")
					.child(render_gallery(&data.images))
			})),
	);

	let background = PageElement::new("div")
		.attr("class", "hero-bg-elements")
		.child(PageElement::new("div").attr("class", "hero-bg-shape shape-1"))
		.child(PageElement::new("div").attr("class", "hero-bg-shape shape-2"));

	(container, background, fullscreen_overlay()).into_page()
}

fn cta_anchor(cta: &HeroCta) -> PageElement {
	// Intercepted CTAs get a dead href; the click handler takes over.
	let href = cta.href.clone().unwrap_or_else(|| "#".to_string());
	let kind = cta.kind.clone().unwrap_or_else(|| "primary".to_string());
	PageElement::new("a")
		.attr("href", href)
		.attr("class", format!("hero-cta {kind}"))
		.attr_opt("target", cta.target.clone())
		.attr("data-action", cta.action.clone().unwrap_or_default())
		.attr("data-template", cta.template.clone().unwrap_or_default())
		.child(cta.icon.clone().map(|name| PageElement::new("ion-icon").attr("name", name)))
		.child(cta.text.clone())
}

fn render_gallery(images: &[HeroImage]) -> Page {
	let main = images
		.iter()
		.find(|image| image.size.as_deref() == Some("large"))
		.unwrap_or(&images[0]);
	let thumbnails = images
		.iter()
		.filter(|image| image.size.as_deref() == Some("small"));

	PageElement::new("div")
		.attr("class", "hero-gallery")
		.child(gallery_image(main, true))
		.children(thumbnails.map(|image| gallery_image(image, false)))
		.into_page()
}

fn gallery_image(image: &HeroImage, large: bool) -> PageElement {
	let class = if large { "hero-image large" } else { "hero-image" };
	let title = image.title.clone().unwrap_or_else(|| image.alt.clone());
	PageElement::new("div")
		.attr("class", class)
		.attr("data-image-src", image.src.clone())
		.child(
			PageElement::new("img")
				.attr("src", image.src.clone())
				.attr("alt", image.alt.clone())
				.attr("loading", "lazy")
				.attr("onerror", format!("this.src='{IMAGE_FALLBACK}'")),
		)
		.child(
			PageElement::new("div")
				.attr("class", "hero-image-overlay")
				.child(
					PageElement::new("h3")
						.attr("class", "hero-image-title")
						.child(title),
				),
		)
}

fn fullscreen_overlay() -> PageElement {
	PageElement::new("div")
		.attr("class", "hero-fullscreen-overlay")
		.attr("id", "hero-fullscreen")
		.child(
			PageElement::new("div")
				.attr("class", "hero-fullscreen-content")
				.child(
					PageElement::new("button")
						.attr("class", "hero-fullscreen-close")
						.attr("aria-label", "Fechar")
						.child(PageElement::new("ion-icon").attr("name", "close-outline")),
				)
				.child(
					PageElement::new("img")
						.attr("src", "")
						.attr("alt", "")
						.attr("class", "hero-fullscreen-image")
						.attr("id", "hero-fullscreen-image"),
				),
		)
}

#[cfg(target_arch = "wasm32")]
mod wasm {
	use std::cell::RefCell;
	use std::rc::Rc;

	use wasm_bindgen::JsCast;
	use web_sys::{Element, EventTarget, HtmlElement};

	use vitrine_core::dom::{self, EventHandle, ScrollLock};
	use vitrine_core::{Component, EventType, MountError};

	use super::{Hero, is_intercepted_action};

	#[derive(Debug)]
	pub(super) struct Mounted {
		container: Element,
		lightbox: Option<Rc<RefCell<Lightbox>>>,
		#[allow(dead_code)] // handles are held for their Drop side effect
		handles: Vec<EventHandle>,
	}

	/// Fullscreen image overlay; holds the scroll lock while open.
	#[derive(Debug)]
	struct Lightbox {
		overlay: Element,
		lock: Option<ScrollLock>,
	}

	impl Lightbox {
		fn open(&mut self, src: &str, alt: &str) {
			if let Ok(Some(image)) = self.overlay.query_selector("#hero-fullscreen-image") {
				let _ = image.set_attribute("src", src);
				let _ = image.set_attribute("alt", alt);
			}
			let _ = self.overlay.class_list().add_1("open");
			if self.lock.is_none() {
				self.lock = Some(ScrollLock::acquire());
			}
		}

		fn close(&mut self) {
			let _ = self.overlay.class_list().remove_1("open");
			self.lock = None;
		}
	}

	impl Hero {
		/// Mounts the hero into the element matched by `selector`.
		pub fn mount(&mut self, selector: &str) -> Result<(), MountError> {
			let container = dom::resolve_container(selector)?;
			self.mount_into(container)
		}

		/// Re-renders with new data.
		pub fn update(&mut self, data: vitrine_types::HeroData) -> Result<(), MountError> {
			self.data = data;
			let Some(mounted) = self.mounted.take() else {
				return Ok(());
			};
			let container = mounted.container.clone();
			drop(mounted);
			self.mount_into(container)
		}

		/// Closes the lightbox and empties the container.
		pub fn destroy(&mut self) {
			if let Some(mounted) = self.mounted.take() {
				if let Some(lightbox) = &mounted.lightbox {
					lightbox.borrow_mut().close();
				}
				dom::clear(&mounted.container);
			}
		}

		/// Marks the hero as loading.
		pub fn show_loading(&self) {
			if let Some(mounted) = &self.mounted {
				let _ = mounted.container.class_list().add_1("loading");
			}
		}

		/// Clears the loading marker.
		pub fn hide_loading(&self) {
			if let Some(mounted) = &self.mounted {
				let _ = mounted.container.class_list().remove_1("loading");
			}
		}

		/// Staggers the CSS entrance animation across hero sub-elements.
		/// Purely cosmetic.
		pub fn animate_in(&self) {
			let Some(mounted) = &self.mounted else {
				return;
			};
			let selectors =
				".hero-badge, .hero-title, .hero-description, .hero-specs, .hero-ctas, .hero-highlight";
			for (index, element) in dom::query_within(&mounted.container, selectors)
				.iter()
				.enumerate()
			{
				if let Some(html) = element.dyn_ref::<HtmlElement>() {
					let _ = html
						.style()
						.set_property("animation-delay", &format!("{:.1}s", index as f64 * 0.1));
				}
				let _ = element.class_list().add_1("animate-in");
			}
		}

		fn mount_into(&mut self, container: Element) -> Result<(), MountError> {
			self.mounted = None;
			dom::set_html(&container, &self.render());

			let mut handles = Vec::new();
			let lightbox = bind_lightbox(&container, &mut handles)?;
			bind_gallery(&container, &mut handles, lightbox.clone())?;
			self.bind_ctas(&container, &mut handles)?;
			bind_internal_links(&container, &mut handles)?;

			self.mounted = Some(Mounted {
				container,
				lightbox,
				handles,
			});
			Ok(())
		}

		fn bind_ctas(
			&self,
			container: &Element,
			handles: &mut Vec<EventHandle>,
		) -> Result<(), MountError> {
			for cta in dom::query_within(container, ".hero-cta") {
				let action = cta.get_attribute("data-action").unwrap_or_default();
				if !is_intercepted_action(Some(action.as_str())) {
					continue;
				}
				let template = cta
					.get_attribute("data-template")
					.filter(|template| !template.is_empty());
				let text = cta
					.text_content()
					.map(|text| text.trim().to_string())
					.unwrap_or_default();
				let on_cta = self.on_cta.clone();
				handles.push(dom::listen(cta.as_ref(), EventType::Click, move |event| {
					event.prevent_default();
					if let Some(callback) = &on_cta {
						callback.call(super::CtaClick {
							action: action.clone(),
							template: template.clone(),
							text: text.clone(),
						});
					}
				})?);
			}
			Ok(())
		}
	}

	fn bind_lightbox(
		container: &Element,
		handles: &mut Vec<EventHandle>,
	) -> Result<Option<Rc<RefCell<Lightbox>>>, MountError> {
		let Ok(Some(overlay)) = container.query_selector("#hero-fullscreen") else {
			return Ok(None);
		};

		let lightbox = Rc::new(RefCell::new(Lightbox {
			overlay: overlay.clone(),
			lock: None,
		}));

		if let Ok(Some(close)) = overlay.query_selector(".hero-fullscreen-close") {
			handles.push(dom::listen(close.as_ref(), EventType::Click, {
				let lightbox = Rc::clone(&lightbox);
				move |_event| lightbox.borrow_mut().close()
			})?);
		}

		// Backdrop click closes; clicks on the image itself do not
		handles.push(dom::listen(overlay.as_ref(), EventType::Click, {
			let lightbox = Rc::clone(&lightbox);
			let overlay = overlay.clone();
			move |event| {
				let on_backdrop = event
					.target()
					.and_then(|target| target.dyn_into::<Element>().ok())
					.is_some_and(|target| target.is_same_node(Some(overlay.as_ref())));
				if on_backdrop {
					lightbox.borrow_mut().close();
				}
			}
		})?);

		let document: EventTarget = dom::document()?.into();
		handles.push(dom::listen(&document, EventType::KeyDown, {
			let lightbox = Rc::clone(&lightbox);
			move |event| {
				let escape = event
					.dyn_ref::<web_sys::KeyboardEvent>()
					.is_some_and(|key_event| key_event.key() == "Escape");
				if escape {
					lightbox.borrow_mut().close();
				}
			}
		})?);

		Ok(Some(lightbox))
	}

	fn bind_gallery(
		container: &Element,
		handles: &mut Vec<EventHandle>,
		lightbox: Option<Rc<RefCell<Lightbox>>>,
	) -> Result<(), MountError> {
		let Some(lightbox) = lightbox else {
			return Ok(());
		};
		for image_element in dom::query_within(container, ".hero-image") {
			let src = image_element
				.get_attribute("data-image-src")
				.unwrap_or_default();
			let alt = image_element
				.query_selector("img")
				.ok()
				.flatten()
				.and_then(|img| img.get_attribute("alt"))
				.unwrap_or_default();
			let lightbox = Rc::clone(&lightbox);
			handles.push(dom::listen(
				image_element.as_ref(),
				EventType::Click,
				move |_event| lightbox.borrow_mut().open(&src, &alt),
			)?);
		}
		Ok(())
	}

	/// Smooth scroll for in-page CTAs; the dead `#` href of intercepted CTAs
	/// is skipped.
	fn bind_internal_links(
		container: &Element,
		handles: &mut Vec<EventHandle>,
	) -> Result<(), MountError> {
		for link in dom::query_within(container, "a[href^='#']") {
			let Some(href) = link.get_attribute("href") else {
				continue;
			};
			if href == "#" {
				continue;
			}
			let section_id = href.trim_start_matches('#').to_string();
			handles.push(dom::listen(link.as_ref(), EventType::Click, move |event| {
				event.prevent_default();
				dom::smooth_scroll_to(&section_id);
			})?);
		}
		Ok(())
	}
}
