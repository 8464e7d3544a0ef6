//! Detail-page controller.
//!
//! Resolves one product from the `id` query parameter, then composes the
//! header and hero components and renders the remaining sections directly
//! from markup builders. Missing id, unknown id and inactive product are
//! three distinct fatal conditions; missing optional sections degrade by
//! being skipped.

use std::rc::Rc;

use vitrine_components::hero::is_intercepted_action;
use vitrine_components::{CtaClick, Header, Hero, ThemeSwitcher};
use vitrine_core::dom::{self, EventHandle};
use vitrine_core::{Callback, debug_log, info_log, warn_log};
use vitrine_types::{Agent, Company, Product};
use vitrine_utils::data::SiteData;
use vitrine_utils::{fetch, seo, urlq};

use crate::error_view;
use crate::interact::{self, LazyLoader};
use crate::lifecycle::Phase;
use crate::resolve::{ResolveError, agent_whatsapp_link, resolve_product};
use crate::sections;

/// The detail-page controller.
pub struct ProductApp {
	site: Rc<SiteData>,
	product: Rc<Product>,
	agent: Option<Agent>,
	company: Option<Company>,
	phase: Phase,
	header: Header,
	hero: Option<Hero>,
	theme: ThemeSwitcher,
	#[allow(dead_code)] // handles are held for their Drop side effect
	handles: Vec<EventHandle>,
	#[allow(dead_code)] // observer disconnects on drop
	lazy: Option<LazyLoader>,
}

impl ProductApp {
	/// Drives a full page load. Returns the live controller, or `None`
	/// after surfacing a fatal error view with a link back to the listing.
	pub async fn run() -> Option<Self> {
		interact::show_loading_overlay();
		match Self::init().await {
			Ok(app) => {
				interact::hide_loading_overlay();
				info_log!("product page initialized for {}", app.product.basic.name);
				Some(app)
			}
			Err(message) => {
				error_view::show_fatal(&message, true);
				debug_log!("product phase: {:?}", Phase::Error);
				None
			}
		}
	}

	async fn init() -> Result<Self, String> {
		let mut phase = Phase::Loading;

		// The id is checked before anything is fetched
		let product_id = urlq::url_param("id")
			.filter(|id| !id.is_empty())
			.ok_or_else(|| ResolveError::MissingId.to_string())?;

		let data = fetch::load_site_data()
			.await
			.map_err(|err| err.to_string())?;
		advance(&mut phase, Phase::DataLoaded);

		let site = Rc::new(data);
		let product = Rc::new(
			resolve_product(&site.products.products, Some(&product_id))
				.map_err(|err| err.to_string())?
				.clone(),
		);
		let agent = product
			.agent_id
			.as_deref()
			.and_then(|agent_id| site.directory.agents.get(agent_id))
			.cloned();
		let company = product
			.company_id
			.as_deref()
			.and_then(|company_id| site.directory.companies.get(company_id))
			.cloned();

		if let Some(seo_data) = &product.seo {
			seo::update_meta_tags(seo_data);
			if let Some(structured) = &seo_data.structured_data {
				seo::update_structured_data(structured);
			}
		}
		if let Some(theme_name) = product.branding.as_ref().and_then(|branding| branding.theme.as_deref()) {
			seo::load_theme_stylesheet(theme_name);
		}

		let theme = ThemeSwitcher::init();

		let whatsapp = agent.as_ref().and_then(|agent| {
			agent_whatsapp_link(
				agent,
				&site.directory.whatsapp_templates,
				None,
				&product.basic.name,
			)
		});

		let mut header = Header::new(sections::product_header_data(&product, whatsapp.clone()));
		if let Err(err) = header.mount("#header-component") {
			warn_log!("header not mounted: {err}");
		}

		let hero = product.hero.clone().map(|hero_data| {
			let mut hero = Hero::new(hero_data);
			hero.on_cta(cta_callback(&site, &agent, &product.basic.name));
			if let Err(err) = hero.mount("#hero-component") {
				warn_log!("hero not mounted: {err}");
			}
			hero.animate_in();
			hero
		});

		render_sections(&product, agent.as_ref(), whatsapp.as_deref());
		advance(&mut phase, Phase::Rendered);

		let mut handles = Vec::new();
		if let Ok(handle) = interact::bind_smooth_scroll() {
			handles.push(handle);
		}
		let lazy = LazyLoader::observe();
		advance(&mut phase, Phase::Interactive);

		Ok(Self {
			site,
			product,
			agent,
			company,
			phase,
			header,
			hero,
			theme,
			handles,
			lazy,
		})
	}

	/// Current lifecycle phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// The resolved product.
	pub fn product(&self) -> &Product {
		&self.product
	}

	/// The product's agent, when the foreign key resolved.
	pub fn agent(&self) -> Option<&Agent> {
		self.agent.as_ref()
	}

	/// The product's company, when the foreign key resolved.
	pub fn company(&self) -> Option<&Company> {
		self.company.as_ref()
	}

	/// The loaded site data.
	pub fn site(&self) -> &SiteData {
		&self.site
	}

	/// The mounted header component.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// The mounted hero component, when the product carries hero data.
	pub fn hero(&self) -> Option<&Hero> {
		self.hero.as_ref()
	}

	/// The page's theme controller.
	pub fn theme(&self) -> &ThemeSwitcher {
		&self.theme
	}
}

fn advance(phase: &mut Phase, next: Phase) {
	*phase = next;
	debug_log!("product phase: {next:?}");
}

/// Renders the sections without a dedicated component. Absent data means a
/// silently skipped section; missing containers are logged inside
/// `mount_section`.
fn render_sections(product: &Product, agent: Option<&Agent>, whatsapp: Option<&str>) {
	let year = js_sys::Date::new_0().get_full_year() as i32;
	let whatsapp_href = whatsapp.unwrap_or("#");

	if let Some(features) = &product.features {
		interact::mount_section("#features-component", sections::features_section(features));
	}
	if let Some(location) = &product.location {
		interact::mount_section(
			"#location-component",
			sections::location_section(location, &product.basic.location.address),
		);
	}
	if let Some(agent) = agent {
		interact::mount_section("#agent-component", sections::agent_section(agent, whatsapp_href));
	}
	interact::mount_section(
		"#footer-component",
		sections::product_footer(product, agent, year),
	);
	if let Some(agent) = agent {
		interact::mount_section(
			"#floating-contact",
			sections::floating_contact(whatsapp_href, &agent.contacts.email),
		);
	}
}

/// Resolves an intercepted hero CTA to a WhatsApp deep link in a new tab,
/// honoring the CTA's template with the default as fallback.
fn cta_callback(
	site: &Rc<SiteData>,
	agent: &Option<Agent>,
	product_name: &str,
) -> Callback<CtaClick> {
	let site = Rc::clone(site);
	let agent = agent.clone();
	let product_name = product_name.to_string();
	Callback::new(move |click: CtaClick| {
		if !is_intercepted_action(Some(click.action.as_str())) {
			return;
		}
		let Some(agent) = &agent else {
			return;
		};
		if let Some(link) = agent_whatsapp_link(
			agent,
			&site.directory.whatsapp_templates,
			click.template.as_deref(),
			&product_name,
		) {
			dom::open_in_new_tab(&link);
		}
	})
}
