//! Product card grid with client-side filtering.
//!
//! Three mutually exclusive card renders: a skeleton placeholder when no
//! product is given, an "unavailable" card for inactive products (which
//! never carries action buttons), and the full card. The mounted grid keeps
//! an id → node registry so filtering, updates and removals touch single
//! cards without re-rendering the container.

use vitrine_core::{IntoPage, Page, PageElement};
use vitrine_types::{Agent, CardData, Product};

/// Badge keyword that classifies a card as a launch.
pub const LAUNCH_KEYWORD: &str = "lançamento";

/// Exit animation length; the node is detached after the same duration the
/// animation declares, so the two cannot drift apart.
pub const EXIT_ANIMATION_MS: u32 = 300;

/// Fallback image for cards without one (or whose image fails to load).
pub const IMAGE_FALLBACK: &str = "media/placeholder-property.jpg";

/// Payload raised when a card's contact button is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
	/// Id of the product the visitor wants to talk about.
	pub product_id: String,
}

/// Filter selection for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterCriterion {
	/// Show every card.
	#[default]
	All,
	/// Show only featured products.
	Featured,
	/// Show only launch-badged products.
	Launch,
}

impl FilterCriterion {
	/// Parses a filter-button value; anything unrecognized falls back to
	/// [`FilterCriterion::All`].
	pub fn parse(value: &str) -> Self {
		match value {
			"featured" => Self::Featured,
			"launch" => Self::Launch,
			_ => Self::All,
		}
	}

	/// Whether a card with the given metadata stays visible under this
	/// criterion.
	pub fn matches(self, meta: &CardMeta) -> bool {
		match self {
			Self::All => true,
			Self::Featured => meta.featured,
			Self::Launch => meta.launch,
		}
	}
}

/// Filter-relevant metadata remembered per mounted card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardMeta {
	/// Product was flagged featured.
	pub featured: bool,
	/// Card badge matched the launch keyword (and the product was not
	/// featured — the badge class is exclusive).
	pub launch: bool,
}

impl CardMeta {
	/// Derives the metadata for a product.
	pub fn for_product(product: &Product) -> Self {
		Self {
			featured: product.featured,
			launch: badge_class(product.featured, product.card.badge.as_deref())
				== Some("launch"),
		}
	}
}

/// Card counts reported by [`ProductGrid::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStats {
	/// Cards currently in the registry.
	pub total: usize,
	/// Cards whose product was flagged featured.
	pub featured: usize,
}

/// Classifies the card badge: `featured` wins over `launch`, everything
/// else gets no badge class.
pub fn badge_class(featured: bool, badge: Option<&str>) -> Option<&'static str> {
	if featured {
		Some("featured")
	} else if badge.is_some_and(|badge| badge.to_lowercase().contains(LAUNCH_KEYWORD)) {
		Some("launch")
	} else {
		None
	}
}

/// Renders one card: skeleton without a product, unavailable for inactive
/// products, full card otherwise.
pub fn render(product: Option<&Product>, agent: Option<&Agent>) -> Page {
	match product {
		None => render_skeleton(),
		Some(product) if !product.active => render_unavailable(&product.card),
		Some(product) => render_card(product, agent),
	}
}

fn render_skeleton() -> Page {
	PageElement::new("div")
		.attr("class", "card-skeleton")
		.child(PageElement::new("div").attr("class", "skeleton-image skeleton"))
		.child(
			PageElement::new("div")
				.attr("class", "skeleton-content")
				.child(PageElement::new("div").attr("class", "skeleton-line skeleton"))
				.child(PageElement::new("div").attr("class", "skeleton-line short skeleton"))
				.child(PageElement::new("div").attr("class", "skeleton-line medium skeleton"))
				.child(PageElement::new("div").attr("class", "skeleton-line short skeleton")),
		)
		.into_page()
}

fn render_unavailable(card: &CardData) -> Page {
	let title = non_empty(&card.title).unwrap_or("Novo Empreendimento");
	let subtitle = non_empty(&card.subtitle).unwrap_or("Localização em breve");
	let description = non_empty(&card.description).unwrap_or("Mais informações em breve.");

	PageElement::new("article")
		.attr("class", "product-card unavailable")
		.child(
			PageElement::new("div")
				.attr("class", "card-image-container")
				.child(
					PageElement::new("img")
						.attr("src", card.image.clone().unwrap_or_else(|| IMAGE_FALLBACK.to_string()))
						.attr("alt", title.to_string())
						.attr("class", "card-image")
						.attr("loading", "lazy"),
				),
		)
		.child(
			PageElement::new("div")
				.attr("class", "card-content")
				.child(card_header(title, subtitle, description)),
		)
		.into_page()
}

fn render_card(product: &Product, agent: Option<&Agent>) -> Page {
	let card = &product.card;
	let badge = card.badge.as_ref().map(|badge| {
		let class = match badge_class(product.featured, Some(badge)) {
			Some(class) => format!("card-badge {class}"),
			None => "card-badge".to_string(),
		};
		PageElement::new("span").attr("class", class).child(badge.clone())
	});

	let specs = (!card.specs.is_empty()).then(|| {
		PageElement::new("div")
			.attr("class", "card-specs")
			.children(card.specs.iter().map(|spec| {
				PageElement::new("span")
					.attr("class", "card-spec")
					.child(spec.clone())
			}))
	});

	let highlights = (!card.highlights.is_empty()).then(|| {
		PageElement::new("div")
			.attr("class", "card-highlights")
			.child(
				PageElement::new("h4")
					.attr("class", "card-highlights-title")
					.child("Destaques"),
			)
			.child(
				PageElement::new("div")
					.attr("class", "card-highlights-list")
					.children(card.highlights.iter().map(|highlight| {
						PageElement::new("span")
							.attr("class", "card-highlight")
							.child(PageElement::new("ion-icon").attr("name", "checkmark-circle-outline"))
							.child(highlight.clone())
					})),
			)
	});

	let actions = PageElement::new("div")
		.attr("class", "card-actions")
		.child(
			PageElement::new("a")
				.attr("href", product.detail_url())
				.attr("class", "card-btn card-btn-primary")
				.child(PageElement::new("ion-icon").attr("name", "eye-outline"))
				.child("Ver Detalhes"),
		)
		.child(
			PageElement::new("a")
				.attr("href", "#")
				.attr("class", "card-btn card-btn-secondary")
				.attr("data-action", "contact")
				.attr("data-product-id", product.id.clone())
				.child(PageElement::new("ion-icon").attr("name", "chatbubble-outline"))
				.child("Contato"),
		);

	let byline = agent.map(|agent| {
		PageElement::new("div")
			.attr("class", "card-agent")
			.child(
				PageElement::new("span")
					.attr("class", "card-agent-name")
					.child(agent.name.clone()),
			)
			.child(
				PageElement::new("span")
					.attr("class", "card-agent-company")
					.child(agent.company.clone()),
			)
	});

	let footer = PageElement::new("footer")
		.attr("class", "card-footer")
		.child(
			PageElement::new("div")
				.attr("class", "card-price")
				.child(
					PageElement::new("span")
						.attr("class", "card-price-label")
						.child("Valores"),
				)
				.child(
					PageElement::new("span")
						.attr("class", "card-price-value")
						.child(card.price_range.clone().unwrap_or_else(|| "Consulte".to_string())),
				),
		)
		.child(actions)
		.child(byline);

	PageElement::new("article")
		.attr("class", "product-card animate-in")
		.attr("data-product-id", product.id.clone())
		.attr("data-featured", if product.featured { "true" } else { "false" })
		.child(
			PageElement::new("div")
				.attr("class", "card-image-container")
				.child(
					PageElement::new("img")
						.attr("src", card.image.clone().unwrap_or_else(|| IMAGE_FALLBACK.to_string()))
						.attr("alt", format!("{} - {}", card.title, card.subtitle))
						.attr("class", "card-image")
						.attr("loading", "lazy")
						.attr("onerror", format!("this.src='{IMAGE_FALLBACK}'")),
				)
				.child(badge),
		)
		.child(
			PageElement::new("div")
				.attr("class", "card-content")
				.child(card_header(&card.title, &card.subtitle, &card.description))
				.child(specs)
				.child(highlights)
				.child(footer),
		)
		.into_page()
}

fn card_header(title: &str, subtitle: &str, description: &str) -> PageElement {
	PageElement::new("header")
		.attr("class", "card-header")
		.child(
			PageElement::new("h3")
				.attr("class", "card-title")
				.child(title.to_string()),
		)
		.child(
			PageElement::new("p")
				.attr("class", "card-subtitle")
				.child(PageElement::new("ion-icon").attr("name", "location-outline"))
				.child(subtitle.to_string()),
		)
		.child(
			PageElement::new("p")
				.attr("class", "card-description")
				.child(description.to_string()),
		)
}

fn non_empty(value: &str) -> Option<&str> {
	(!value.is_empty()).then_some(value)
}

#[cfg(target_arch = "wasm32")]
pub use wasm::ProductGrid;

#[cfg(target_arch = "wasm32")]
mod wasm {
	use std::cell::RefCell;
	use std::collections::BTreeMap;
	use std::rc::Rc;

	use gloo_timers::callback::Timeout;
	use wasm_bindgen::JsCast;
	use web_sys::{Element, Event, HtmlElement};

	use vitrine_core::dom::{self, EventHandle};
	use vitrine_core::{Callback, EventType, MountError};
	use vitrine_types::{Agent, Product};

	use super::{CardMeta, ContactRequest, EXIT_ANIMATION_MS, FilterCriterion, GridStats, render};

	struct Card {
		element: Element,
		meta: CardMeta,
	}

	/// The mounted grid of product cards.
	pub struct ProductGrid {
		cards: Rc<RefCell<BTreeMap<String, Card>>>,
		on_contact: Option<Callback<ContactRequest>>,
		mounted: Option<Mounted>,
	}

	struct Mounted {
		container: Element,
		#[allow(dead_code)] // handles are held for their Drop side effect
		handles: Vec<EventHandle>,
	}

	impl Default for ProductGrid {
		fn default() -> Self {
			Self::new()
		}
	}

	impl ProductGrid {
		/// Creates an empty grid.
		pub fn new() -> Self {
			Self {
				cards: Rc::new(RefCell::new(BTreeMap::new())),
				on_contact: None,
				mounted: None,
			}
		}

		/// Registers the contact callback. Must happen before `mount`.
		pub fn on_contact(&mut self, callback: Callback<ContactRequest>) {
			self.on_contact = Some(callback);
		}

		/// Clears the container and renders one card per product, wiring
		/// the delegated listeners.
		pub fn mount(
			&mut self,
			selector: &str,
			products: &[Product],
			agents: &BTreeMap<String, Agent>,
		) -> Result<(), MountError> {
			let container = dom::resolve_container(selector)?;
			self.mounted = None;
			dom::clear(&container);

			let mut cards = BTreeMap::new();
			for (index, product) in products.iter().enumerate() {
				let agent = product
					.agent_id
					.as_deref()
					.and_then(|agent_id| agents.get(agent_id));
				let element = dom::element_from_page(&render(Some(product), agent))?;
				if let Some(html) = element.dyn_ref::<HtmlElement>() {
					let _ = html
						.style()
						.set_property("animation-delay", &format!("{:.1}s", index as f64 * 0.1));
				}
				container
					.append_child(&element)
					.map_err(|_| MountError::CreateElementFailed)?;
				cards.insert(
					product.id.clone(),
					Card {
						element,
						meta: CardMeta::for_product(product),
					},
				);
			}
			*self.cards.borrow_mut() = cards;

			let handles = self.bind(&container)?;
			self.mounted = Some(Mounted { container, handles });
			Ok(())
		}

		fn bind(&self, container: &Element) -> Result<Vec<EventHandle>, MountError> {
			let mut handles = Vec::new();

			let on_contact = self.on_contact.clone();
			handles.push(dom::listen(container.as_ref(), EventType::Click, move |event| {
				let Some(card) = event_card(&event) else {
					return;
				};
				let Some(product_id) = card.get_attribute("data-product-id") else {
					return;
				};

				let button = event
					.target()
					.and_then(|target| target.dyn_into::<Element>().ok())
					.and_then(|target| target.closest(".card-btn").ok().flatten());
				if let Some(button) = button {
					// Contact raises the callback; the details link keeps
					// its default navigation.
					if button.get_attribute("data-action").as_deref() == Some("contact") {
						event.prevent_default();
						event.stop_propagation();
						if let Some(callback) = &on_contact {
							callback.call(ContactRequest { product_id });
						}
					}
					return;
				}

				dom::navigate_to(&format!("product.html?id={product_id}"));
			})?);

			handles.push(dom::listen_capture(
				container.as_ref(),
				EventType::MouseEnter,
				hover_handler(true),
			)?);
			handles.push(dom::listen_capture(
				container.as_ref(),
				EventType::MouseLeave,
				hover_handler(false),
			)?);

			Ok(handles)
		}

		/// Shows and hides cards in place; nodes are never removed by a
		/// filter change.
		pub fn filter(&self, criterion: FilterCriterion) {
			for card in self.cards.borrow().values() {
				if criterion.matches(&card.meta) {
					if let Some(html) = card.element.dyn_ref::<HtmlElement>() {
						let _ = html.style().remove_property("display");
					}
					let _ = card.element.class_list().add_1("animate-in");
				} else {
					if let Some(html) = card.element.dyn_ref::<HtmlElement>() {
						let _ = html.style().set_property("display", "none");
					}
					let _ = card.element.class_list().remove_1("animate-in");
				}
			}
		}

		/// Re-renders one card in place.
		pub fn update_card(&self, product: &Product, agent: Option<&Agent>) -> Result<(), MountError> {
			let mut cards = self.cards.borrow_mut();
			let Some(card) = cards.get_mut(&product.id) else {
				return Ok(());
			};
			let replacement = dom::element_from_page(&render(Some(product), agent))?;
			card.element
				.insert_adjacent_element("beforebegin", &replacement)
				.map_err(|_| MountError::CreateElementFailed)?;
			card.element.remove();
			card.element = replacement;
			card.meta = CardMeta::for_product(product);
			Ok(())
		}

		/// Plays the exit animation, then detaches the node and forgets the
		/// card.
		pub fn remove_card(&self, product_id: &str) {
			let Some(element) = self
				.cards
				.borrow()
				.get(product_id)
				.map(|card| card.element.clone())
			else {
				return;
			};
			if let Some(html) = element.dyn_ref::<HtmlElement>() {
				let _ = html.style().set_property(
					"animation",
					&format!("cardSlideOut {EXIT_ANIMATION_MS}ms ease-in forwards"),
				);
			}
			let cards = Rc::clone(&self.cards);
			let product_id = product_id.to_string();
			Timeout::new(EXIT_ANIMATION_MS, move || {
				element.remove();
				cards.borrow_mut().remove(&product_id);
			})
			.forget();
		}

		/// Forgets every card without touching the DOM.
		pub fn clear(&self) {
			self.cards.borrow_mut().clear();
		}

		/// Counts the registered cards.
		pub fn stats(&self) -> GridStats {
			let cards = self.cards.borrow();
			GridStats {
				total: cards.len(),
				featured: cards.values().filter(|card| card.meta.featured).count(),
			}
		}
	}

	/// Resolves the available product card an event landed on, if any.
	fn event_card(event: &Event) -> Option<Element> {
		let target = event.target()?.dyn_into::<Element>().ok()?;
		let card = target.closest(".product-card").ok()??;
		if card.class_list().contains("unavailable") {
			return None;
		}
		Some(card)
	}

	fn hover_handler(entering: bool) -> impl FnMut(Event) {
		move |event| {
			let Some(card) = event_card(&event) else {
				return;
			};
			let image_scale = if entering { "scale(1.05)" } else { "scale(1)" };
			let badge_scale = if entering { "scale(1.1)" } else { "scale(1)" };
			set_transform(&card, ".card-image", image_scale);
			set_transform(&card, ".card-badge", badge_scale);
		}
	}

	fn set_transform(card: &Element, selector: &str, value: &str) {
		if let Ok(Some(element)) = card.query_selector(selector) {
			if let Some(html) = element.dyn_ref::<HtmlElement>() {
				let _ = html.style().set_property("transform", value);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use vitrine_types::Agent;

	fn product(json: &str) -> Product {
		serde_json::from_str(json).unwrap()
	}

	fn active_product() -> Product {
		product(
			r#"{
				"id": "horizonte",
				"active": true,
				"featured": true,
				"card": {
					"title": "Residencial Horizonte",
					"subtitle": "Água Verde, Curitiba",
					"description": "Apartamentos de 3 suítes.",
					"specs": ["280m²", "3 suítes"],
					"highlights": ["Rooftop", "Pet place"],
					"badge": "Destaque",
					"priceRange": "R$ 1,8 mi - R$ 2,4 mi",
					"image": "media/horizonte.jpg"
				},
				"basic": { "name": "Residencial Horizonte" }
			}"#,
		)
	}

	fn inactive_product() -> Product {
		product(
			r#"{
				"id": "reserva",
				"active": false,
				"card": { "title": "Reserva do Bosque" },
				"basic": { "name": "Reserva do Bosque" }
			}"#,
		)
	}

	#[test]
	fn test_skeleton_without_product() {
		let html = render(None, None).render_to_string();
		assert!(html.contains("card-skeleton"));
		assert!(html.contains("skeleton-image"));
	}

	#[test]
	fn test_inactive_renders_unavailable_without_actions() {
		let html = render(Some(&inactive_product()), None).render_to_string();
		assert!(html.contains("product-card unavailable"));
		assert!(html.contains("Reserva do Bosque"));
		// No contact or detail buttons, ever
		assert!(!html.contains("card-btn"));
		assert!(!html.contains("data-action"));
		assert!(!html.contains("Ver Detalhes"));
		assert!(!html.contains("Contato"));
	}

	#[test]
	fn test_unavailable_fallback_copy() {
		let html = render(
			Some(&product(r#"{ "id": "x", "basic": { "name": "X" } }"#)),
			None,
		)
		.render_to_string();
		assert!(html.contains("Novo Empreendimento"));
		assert!(html.contains("Localização em breve"));
		assert!(html.contains("Mais informações em breve."));
	}

	#[test]
	fn test_full_card_content() {
		let html = render(Some(&active_product()), None).render_to_string();
		assert!(html.contains("data-product-id=\"horizonte\""));
		assert!(html.contains("data-featured=\"true\""));
		assert!(html.contains("class=\"card-badge featured\""));
		assert!(html.contains("R$ 1,8 mi - R$ 2,4 mi"));
		assert!(html.contains("href=\"product.html?id=horizonte\""));
		assert!(html.contains("data-action=\"contact\""));
		assert!(html.contains("Destaques"));
		assert!(html.contains("Rooftop"));
	}

	#[test]
	fn test_price_fallback() {
		let mut product = active_product();
		product.card.price_range = None;
		let html = render(Some(&product), None).render_to_string();
		assert!(html.contains("Consulte"));
	}

	#[test]
	fn test_agent_byline() {
		let agent = Agent {
			name: "Ana Souza".to_string(),
			company: "Alfa Imóveis".to_string(),
			..Agent::default()
		};
		let html = render(Some(&active_product()), Some(&agent)).render_to_string();
		assert!(html.contains("class=\"card-agent-name\">Ana Souza</span>"));
		assert!(html.contains("class=\"card-agent-company\">Alfa Imóveis</span>"));

		let without = render(Some(&active_product()), None).render_to_string();
		assert!(!without.contains("card-agent"));
	}

	#[rstest]
	#[case(true, None, Some("featured"))]
	#[case(true, Some("Lançamento"), Some("featured"))] // featured wins
	#[case(false, Some("Lançamento"), Some("launch"))]
	#[case(false, Some("lançamento imediato"), Some("launch"))]
	#[case(false, Some("Destaque"), None)]
	#[case(false, None, None)]
	fn test_badge_class(
		#[case] featured: bool,
		#[case] badge: Option<&str>,
		#[case] expected: Option<&'static str>,
	) {
		assert_eq!(badge_class(featured, badge), expected);
	}

	#[rstest]
	#[case("all", FilterCriterion::All)]
	#[case("featured", FilterCriterion::Featured)]
	#[case("launch", FilterCriterion::Launch)]
	#[case("anything-else", FilterCriterion::All)]
	fn test_filter_parse(#[case] input: &str, #[case] expected: FilterCriterion) {
		assert_eq!(FilterCriterion::parse(input), expected);
	}

	#[test]
	fn test_filter_matches_by_meta() {
		let featured = CardMeta { featured: true, launch: false };
		let launch = CardMeta { featured: false, launch: true };
		let plain = CardMeta::default();

		assert!(FilterCriterion::All.matches(&featured));
		assert!(FilterCriterion::All.matches(&launch));
		assert!(FilterCriterion::All.matches(&plain));

		assert!(FilterCriterion::Featured.matches(&featured));
		assert!(!FilterCriterion::Featured.matches(&launch));
		assert!(!FilterCriterion::Featured.matches(&plain));

		assert!(FilterCriterion::Launch.matches(&launch));
		assert!(!FilterCriterion::Launch.matches(&featured));
		assert!(!FilterCriterion::Launch.matches(&plain));
	}

	#[test]
	fn test_filter_is_order_independent() {
		// Visibility is a pure function of (criterion, meta): applying
		// filters in any order ends at the same visible set.
		let metas = [
			CardMeta { featured: true, launch: false },
			CardMeta { featured: false, launch: true },
			CardMeta::default(),
		];
		let direct: Vec<bool> = metas
			.iter()
			.map(|meta| FilterCriterion::Featured.matches(meta))
			.collect();
		// Detour through Launch first, then Featured
		let _detour: Vec<bool> = metas
			.iter()
			.map(|meta| FilterCriterion::Launch.matches(meta))
			.collect();
		let after_detour: Vec<bool> = metas
			.iter()
			.map(|meta| FilterCriterion::Featured.matches(meta))
			.collect();
		assert_eq!(direct, after_detour);
		// And All restores everything
		assert!(metas.iter().all(|meta| FilterCriterion::All.matches(meta)));
	}

	#[test]
	fn test_card_meta_for_product() {
		let meta = CardMeta::for_product(&active_product());
		assert!(meta.featured);
		assert!(!meta.launch); // featured wins over the badge

		let mut launch = active_product();
		launch.featured = false;
		launch.card.badge = Some("Lançamento".to_string());
		let meta = CardMeta::for_product(&launch);
		assert!(!meta.featured);
		assert!(meta.launch);
	}
}
