//! Listing-page controller.
//!
//! Loads the three JSON documents, composes the header and the product
//! grid, renders stats, floating contact and footer, then wires filters,
//! contact resolution, smooth scroll and lazy images.

use std::cell::Cell;
use std::rc::Rc;

use vitrine_components::{ContactRequest, FilterCriterion, GridStats, Header, ProductGrid, ThemeSwitcher};
use vitrine_core::dom::{self, EventHandle};
use vitrine_core::{Callback, EventType, debug_log, info_log, warn_log};
use vitrine_types::{Product, SeoData, find_product};
use vitrine_utils::data::SiteData;
use vitrine_utils::{fetch, seo, urlq};

use crate::error_view;
use crate::interact::{self, LazyLoader};
use crate::lifecycle::Phase;
use crate::resolve::agent_whatsapp_link;
use crate::sections;

/// The listing-page controller.
pub struct LandingApp {
	site: Rc<SiteData>,
	products: Rc<Vec<Product>>,
	phase: Phase,
	current_filter: Rc<Cell<FilterCriterion>>,
	header: Header,
	grid: Rc<ProductGrid>,
	theme: ThemeSwitcher,
	#[allow(dead_code)] // handles are held for their Drop side effect
	handles: Vec<EventHandle>,
	#[allow(dead_code)] // observer disconnects on drop
	lazy: Option<LazyLoader>,
}

impl LandingApp {
	/// Drives a full page load. Returns the live controller, or `None`
	/// after surfacing a fatal error view.
	pub async fn run() -> Option<Self> {
		interact::show_loading_overlay();
		match Self::init().await {
			Ok(app) => {
				interact::hide_loading_overlay();
				info_log!("landing page initialized");
				Some(app)
			}
			Err(message) => {
				error_view::show_fatal(&message, false);
				debug_log!("landing phase: {:?}", Phase::Error);
				None
			}
		}
	}

	async fn init() -> Result<Self, String> {
		let mut phase = Phase::Loading;

		let data = fetch::load_site_data()
			.await
			.map_err(|err| err.to_string())?;
		advance(&mut phase, Phase::DataLoaded);

		let site = Rc::new(data);
		let products: Rc<Vec<Product>> = Rc::new(
			site.products
				.products
				.iter()
				.filter(|product| product.active)
				.cloned()
				.collect(),
		);

		seo::update_meta_tags(&SeoData {
			title: Some(site.config.site.title.clone()),
			description: Some(site.config.site.description.clone()),
			canonical: Some(site.config.site.url.clone()),
			og_image: Some(format!("{}/media/og-image.jpg", site.config.site.url)),
			..SeoData::default()
		});

		let theme = ThemeSwitcher::init();

		let default_link = default_whatsapp_link(&site);
		let mut header = Header::new(sections::landing_header_data(
			&site.config,
			default_link.clone(),
		));
		if let Err(err) = header.mount("#header-component") {
			warn_log!("header not mounted: {err}");
		}

		render_stats(&products, &site);

		let mut grid = ProductGrid::new();
		grid.on_contact(contact_callback(&site, &products));
		if let Err(err) = grid.mount("#products-grid", &products, &site.directory.agents) {
			warn_log!("product grid not mounted: {err}");
		}
		let grid = Rc::new(grid);

		toggle_empty_state(products.is_empty());
		render_floating_contact(&site, default_link.as_deref());
		render_footer(&site);
		advance(&mut phase, Phase::Rendered);

		let current_filter = Rc::new(Cell::new(FilterCriterion::All));
		let mut handles = bind_filters(&grid, &current_filter);
		bind_contact_links(&site, default_link.as_deref());
		if let Ok(handle) = interact::bind_smooth_scroll() {
			handles.push(handle);
		}
		let lazy = LazyLoader::observe();
		advance(&mut phase, Phase::Interactive);

		Ok(Self {
			site,
			products,
			phase,
			current_filter,
			header,
			grid,
			theme,
			handles,
			lazy,
		})
	}

	/// Current lifecycle phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// The active products being displayed.
	pub fn products(&self) -> &[Product] {
		&self.products
	}

	/// The loaded site data.
	pub fn site(&self) -> &SiteData {
		&self.site
	}

	/// The filter currently applied to the grid.
	pub fn current_filter(&self) -> FilterCriterion {
		self.current_filter.get()
	}

	/// Card counts from the grid registry.
	pub fn stats(&self) -> GridStats {
		self.grid.stats()
	}

	/// The mounted header component.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// The page's theme controller.
	pub fn theme(&self) -> &ThemeSwitcher {
		&self.theme
	}
}

fn advance(phase: &mut Phase, next: Phase) {
	*phase = next;
	debug_log!("landing phase: {next:?}");
}

fn default_whatsapp_link(site: &SiteData) -> Option<String> {
	let agent = site.directory.agents.get(&site.config.app.default_agent)?;
	agent_whatsapp_link(agent, &site.directory.whatsapp_templates, None, "")
}

fn render_stats(products: &[Product], site: &SiteData) {
	if let Some(counter) = dom::query("#total-products") {
		counter.set_text_content(Some(&products.len().to_string()));
	}
	if let Some(counter) = dom::query("#total-agents") {
		counter.set_text_content(Some(&site.directory.agents.len().to_string()));
	}
}

fn toggle_empty_state(empty: bool) {
	if let Some(element) = dom::query("#empty-state") {
		if empty {
			dom::show(&element);
		} else {
			dom::hide(&element);
		}
	}
}

fn render_floating_contact(site: &SiteData, whatsapp: Option<&str>) {
	let Some(agent) = site.directory.agents.get(&site.config.app.default_agent) else {
		return;
	};
	interact::mount_section(
		"#floating-contact",
		sections::floating_contact(whatsapp.unwrap_or("#"), &agent.contacts.email),
	);
}

fn render_footer(site: &SiteData) {
	let agent = site.directory.agents.get(&site.config.app.default_agent);
	let year = js_sys::Date::new_0().get_full_year() as i32;
	interact::mount_section(
		"#footer-component",
		sections::site_footer(&site.config, agent, year),
	);
}

/// One listener per filter button: marks it active, filters the grid and
/// mirrors the selection into the `filter` URL parameter.
fn bind_filters(
	grid: &Rc<ProductGrid>,
	current: &Rc<Cell<FilterCriterion>>,
) -> Vec<EventHandle> {
	let buttons = dom::query_all(".filter-btn");
	let mut handles = Vec::new();
	for button in &buttons {
		let all_buttons = buttons.clone();
		let grid = Rc::clone(grid);
		let current = Rc::clone(current);
		let clicked = button.clone();
		let listener = dom::listen(button.as_ref(), EventType::Click, move |_event| {
			for other in &all_buttons {
				let _ = other.class_list().remove_1("active");
			}
			let _ = clicked.class_list().add_1("active");

			let value = clicked.get_attribute("data-filter").unwrap_or_default();
			let criterion = FilterCriterion::parse(&value);
			current.set(criterion);
			grid.filter(criterion);

			if value == "all" {
				urlq::remove_url_param("filter");
			} else {
				urlq::set_url_param("filter", &value);
			}
		});
		if let Ok(handle) = listener {
			handles.push(handle);
		}
	}
	handles
}

fn bind_contact_links(site: &SiteData, whatsapp: Option<&str>) {
	if let (Some(link), Some(anchor)) = (whatsapp, dom::query("#contact-whatsapp")) {
		let _ = anchor.set_attribute("href", link);
	}
	if let Some(anchor) = dom::query("#contact-email") {
		if let Some(agent) = site.directory.agents.get(&site.config.app.default_agent) {
			let _ = anchor.set_attribute("href", &format!("mailto:{}", agent.contacts.email));
		}
	}
}

/// Resolves a card's contact request to a WhatsApp deep link in a new tab.
fn contact_callback(
	site: &Rc<SiteData>,
	products: &Rc<Vec<Product>>,
) -> Callback<ContactRequest> {
	let site = Rc::clone(site);
	let products = Rc::clone(products);
	Callback::new(move |request: ContactRequest| {
		let Some(product) = find_product(&products, &request.product_id) else {
			return;
		};
		let Some(agent) = product
			.agent_id
			.as_deref()
			.and_then(|agent_id| site.directory.agents.get(agent_id))
		else {
			return;
		};
		if let Some(link) = agent_whatsapp_link(
			agent,
			&site.directory.whatsapp_templates,
			None,
			&product.card.title,
		) {
			dom::open_in_new_tab(&link);
		}
	})
}
