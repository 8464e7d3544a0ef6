//! Pure builders for page sections without a dedicated component.
//!
//! The detail page renders features, location, agent and footer straight
//! from markup builders; the listing page does the same for its footer and
//! the floating contact buttons. Keeping the builders pure keeps all of
//! this testable off-browser — the controllers only inject the result.

use vitrine_components::{Brand, HeaderCta, HeaderData};
use vitrine_core::{IntoPage, Page, PageElement};
use vitrine_types::{Agent, FeaturesSection, LocationSection, Product, SiteConfig};

/// Header data for the listing page: site brand, fixed in-page navigation
/// and the default WhatsApp CTA.
pub fn landing_header_data(config: &SiteConfig, whatsapp_href: Option<String>) -> HeaderData {
	HeaderData {
		brand: Brand {
			logo: Some("LP".to_string()),
			title: Some(config.site.title.clone()),
			subtitle: Some(config.site.description.clone()),
		},
		navigation: nav_items(&[
			("Início", "#hero"),
			("Empreendimentos", "#products"),
			("Contato", "#contact"),
		]),
		cta: Some(HeaderCta {
			text: "Falar Conosco".to_string(),
			href: whatsapp_href.unwrap_or_else(|| "#".to_string()),
			icon: Some("logo-whatsapp".to_string()),
			target: Some("_blank".to_string()),
		}),
		show_back_button: false,
	}
}

/// Header data for the detail page: product branding with fallbacks, the
/// product's own navigation, and the back button.
pub fn product_header_data(product: &Product, whatsapp_href: Option<String>) -> HeaderData {
	let branding = product.branding.as_ref();
	let address = &product.basic.location;
	HeaderData {
		brand: Brand {
			logo: Some(
				branding
					.and_then(|branding| branding.logo.clone())
					.unwrap_or_else(|| product.initials()),
			),
			title: Some(
				branding
					.and_then(|branding| branding.title.clone())
					.unwrap_or_else(|| product.basic.name.clone()),
			),
			subtitle: Some(
				branding
					.and_then(|branding| branding.subtitle.clone())
					.unwrap_or_else(|| format!("{}, {}", address.neighborhood, address.city)),
			),
		},
		navigation: product.navigation.clone(),
		cta: Some(HeaderCta {
			text: "Falar no WhatsApp".to_string(),
			href: whatsapp_href.unwrap_or_else(|| "#".to_string()),
			icon: Some("logo-whatsapp".to_string()),
			target: Some("_blank".to_string()),
		}),
		show_back_button: true,
	}
}

fn nav_items(items: &[(&str, &str)]) -> Vec<vitrine_types::NavItem> {
	items
		.iter()
		.map(|(label, href)| vitrine_types::NavItem {
			label: (*label).to_string(),
			href: (*href).to_string(),
		})
		.collect()
}

/// Floating WhatsApp/email contact buttons.
pub fn floating_contact(whatsapp_href: &str, email: &str) -> Page {
	(
		PageElement::new("a")
			.attr("href", whatsapp_href.to_string())
			.attr("class", "floating-btn whatsapp")
			.attr("target", "_blank")
			.attr("aria-label", "Falar no WhatsApp")
			.child(icon("logo-whatsapp"))
			.child("WhatsApp"),
		PageElement::new("a")
			.attr("href", format!("mailto:{email}"))
			.attr("class", "floating-btn email")
			.attr("aria-label", "Enviar email")
			.child(icon("mail-outline"))
			.child("Email"),
	)
		.into_page()
}

/// Listing-page footer: site info, default-agent contact block, social
/// links and the copyright line.
pub fn site_footer(config: &SiteConfig, agent: Option<&Agent>, year: i32) -> Page {
	let contact = agent.map(|agent| {
		PageElement::new("div")
			.attr("class", "footer-section")
			.child(PageElement::new("h4").child("Contato"))
			.child(PageElement::new("p").child(agent.name.clone()))
			.child(
				PageElement::new("p").child(format!("{} • {}", agent.creci, agent.company)),
			)
			.child(PageElement::new("p").child(mail_link(&agent.contacts.email)))
			.child(PageElement::new("p").child(tel_link(
				&agent.contacts.whatsapp.number,
				&agent.contacts.whatsapp.display,
			)))
	});

	let social = PageElement::new("div")
		.attr("class", "footer-section")
		.child(PageElement::new("h4").child("Redes Sociais"))
		.children(
			agent
				.map(|agent| {
					agent
						.social
						.iter()
						.filter(|(_, url)| !url.is_empty())
						.map(|(network, url)| {
							PageElement::new("a")
								.attr("href", url.clone())
								.attr("target", "_blank")
								.attr("rel", "noopener")
								.child(icon_owned(format!("logo-{network}")))
								.child(capitalize(network))
						})
						.collect::<Vec<_>>()
				})
				.unwrap_or_default(),
		);

	PageElement::new("div")
		.attr("class", "container")
		.child(
			PageElement::new("div")
				.attr("class", "footer-content")
				.child(
					PageElement::new("div")
						.attr("class", "footer-section")
						.child(PageElement::new("h3").child(config.site.title.clone()))
						.child(PageElement::new("p").child(config.site.description.clone())),
				)
				.child(contact)
				.child(social),
		)
		.child(
			PageElement::new("div")
				.attr("class", "footer-bottom")
				.child(PageElement::new("p").child(format!(
					"© {year} {}. Todos os direitos reservados.",
					config.site.title
				))),
		)
		.into_page()
}

/// Detail-page features section.
pub fn features_section(features: &FeaturesSection) -> Page {
	PageElement::new("div")
		.attr("class", "container")
		.child(
			PageElement::new("div")
				.attr("class", "section-header text-center")
				.child(PageElement::new("h2").child(features.title.clone()))
				.child(PageElement::new("p").child(features.description.clone())),
		)
		.child(
			PageElement::new("div")
				.attr("class", "features-grid")
				.children(features.items.iter().map(|item| {
					PageElement::new("div")
						.attr("class", "feature-item")
						.child(
							PageElement::new("div")
								.attr("class", "feature-icon")
								.child(icon_owned(item.icon.clone())),
						)
						.child(
							PageElement::new("h3")
								.attr("class", "feature-title")
								.child(item.title.clone()),
						)
						.child(
							PageElement::new("p")
								.attr("class", "feature-description")
								.child(item.description.clone()),
						)
				})),
		)
		.into_page()
}

/// Detail-page location section; without a map URL a placeholder is shown.
pub fn location_section(location: &LocationSection, address: &str) -> Page {
	let nearby = location.nearby.as_ref().filter(|nearby| !nearby.is_empty()).map(|nearby| {
		PageElement::new("div")
			.attr("class", "location-nearby")
			.child(PageElement::new("h4").child("Pontos de Interesse"))
			.child(
				PageElement::new("ul")
					.attr("class", "nearby-list")
					.children(nearby.iter().map(|point| {
						PageElement::new("li")
							.attr("class", "nearby-item")
							.child(
								PageElement::new("span")
									.attr("class", "nearby-name")
									.child(point.name.clone()),
							)
							.child(
								PageElement::new("span")
									.attr("class", "nearby-distance")
									.child(point.distance.clone()),
							)
					})),
			)
	});

	let map = match &location.map_url {
		Some(map_url) => PageElement::new("iframe")
			.attr("src", map_url.clone())
			.attr("width", "100%")
			.attr("height", "400")
			.attr("style", "border:0; border-radius: var(--border-radius-lg);")
			.bool_attr("allowfullscreen", true)
			.attr("loading", "lazy")
			.attr("referrerpolicy", "no-referrer-when-downgrade"),
		None => PageElement::new("div")
			.attr("class", "map-placeholder")
			.child(icon("location-outline"))
			.child(PageElement::new("p").child("Mapa em breve")),
	};

	PageElement::new("div")
		.attr("class", "container")
		.child(
			PageElement::new("div")
				.attr("class", "location-content")
				.child(
					PageElement::new("div")
						.attr("class", "location-info")
						.child(PageElement::new("h2").child(location.title.clone()))
						.child(PageElement::new("p").child(location.description.clone()))
						.child(
							location
								.subtitle
								.clone()
								.map(|subtitle| PageElement::new("h3").child(subtitle)),
						)
						.child(
							PageElement::new("p")
								.attr("class", "location-address")
								.child(address.to_string()),
						)
						.child(nearby),
				)
				.child(PageElement::new("div").attr("class", "location-map").child(map)),
		)
		.into_page()
}

/// Detail-page agent section.
pub fn agent_section(agent: &Agent, whatsapp_href: &str) -> Page {
	let instagram = agent.social.get("instagram").filter(|url| !url.is_empty());

	PageElement::new("div")
		.attr("class", "container")
		.child(
			PageElement::new("div")
				.attr("class", "agent-content")
				.child(
					PageElement::new("div")
						.attr("class", "agent-info")
						.child(
							PageElement::new("div")
								.attr("class", "agent-photo")
								.child(
									PageElement::new("img")
										.attr("src", agent.photo.clone())
										.attr("alt", agent.name.clone())
										.attr("onerror", "this.src='media/placeholder-agent.jpg'"),
								),
						)
						.child(
							PageElement::new("div")
								.attr("class", "agent-details")
								.child(PageElement::new("h3").child(agent.name.clone()))
								.child(
									PageElement::new("p")
										.attr("class", "agent-creci")
										.child(agent.creci.clone()),
								)
								.child(
									PageElement::new("p")
										.attr("class", "agent-company")
										.child(agent.company.clone()),
								)
								.child(agent.bio.clone().map(|bio| {
									PageElement::new("p").attr("class", "agent-bio").child(bio)
								})),
						),
				)
				.child(
					PageElement::new("div")
						.attr("class", "agent-contacts")
						.child(PageElement::new("h4").child("Entre em contato"))
						.child(
							PageElement::new("div")
								.attr("class", "contact-buttons")
								.child(
									PageElement::new("a")
										.attr("href", whatsapp_href.to_string())
										.attr("class", "contact-btn whatsapp")
										.attr("target", "_blank")
										.child(icon("logo-whatsapp"))
										.child("WhatsApp"),
								)
								.child(
									PageElement::new("a")
										.attr("href", format!("mailto:{}", agent.contacts.email))
										.attr("class", "contact-btn email")
										.child(icon("mail-outline"))
										.child("Email"),
								)
								.child(instagram.map(|url| {
									PageElement::new("a")
										.attr("href", url.clone())
										.attr("class", "contact-btn instagram")
										.attr("target", "_blank")
										.child(icon("logo-instagram"))
										.child("Instagram")
								})),
						),
				),
		)
		.into_page()
}

/// Detail-page footer.
pub fn product_footer(product: &Product, agent: Option<&Agent>, year: i32) -> Page {
	let footer = product.footer.as_ref();
	let copyright = footer
		.and_then(|footer| footer.copyright.clone())
		.unwrap_or_else(|| format!("© {year} {}", product.basic.name));
	let disclaimer = footer.and_then(|footer| footer.disclaimer.clone());

	let contact = agent.map(|agent| {
		PageElement::new("div")
			.attr("class", "footer-section")
			.child(PageElement::new("h4").child("Contato"))
			.child(PageElement::new("p").child(agent.name.clone()))
			.child(
				PageElement::new("p").child(format!("{} • {}", agent.creci, agent.company)),
			)
			.child(PageElement::new("p").child(mail_link(&agent.contacts.email)))
			.child(PageElement::new("p").child(tel_link(
				&agent.contacts.whatsapp.number,
				&agent.contacts.whatsapp.display,
			)))
	});

	PageElement::new("div")
		.attr("class", "container")
		.child(
			PageElement::new("div")
				.attr("class", "footer-content")
				.child(
					PageElement::new("div")
						.attr("class", "footer-section")
						.child(PageElement::new("h3").child(product.basic.name.clone()))
						.child(PageElement::new("p").child(product.basic.location.address.clone()))
						.child(PageElement::new("p").child(copyright))
						.child(disclaimer.map(|disclaimer| {
							PageElement::new("p")
								.attr("class", "footer-disclaimer")
								.child(disclaimer)
						})),
				)
				.child(contact),
		)
		.into_page()
}

fn mail_link(email: &str) -> PageElement {
	PageElement::new("a")
		.attr("href", format!("mailto:{email}"))
		.child(email.to_string())
}

fn tel_link(number: &str, display: &str) -> PageElement {
	PageElement::new("a")
		.attr("href", format!("tel:{number}"))
		.child(display.to_string())
}

fn icon(name: &'static str) -> PageElement {
	PageElement::new("ion-icon").attr("name", name)
}

fn icon_owned(name: String) -> PageElement {
	PageElement::new("ion-icon").attr("name", name)
}

fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_types::NearbyPoint;

	fn config() -> SiteConfig {
		serde_json::from_str(
			r#"{
				"site": {
					"title": "Imóveis Alfa",
					"description": "Lançamentos selecionados",
					"url": "https://alfa.example"
				},
				"app": { "defaultAgent": "ana" }
			}"#,
		)
		.unwrap()
	}

	fn agent() -> Agent {
		serde_json::from_str(
			r#"{
				"name": "Ana Souza",
				"creci": "CRECI 12.345",
				"company": "Alfa Imóveis",
				"contacts": {
					"email": "ana@alfa.com.br",
					"whatsapp": { "number": "5541999990000", "display": "(41) 99999-0000" }
				},
				"social": { "instagram": "https://instagram.com/ana", "linkedin": "" }
			}"#,
		)
		.unwrap()
	}

	fn product() -> Product {
		serde_json::from_str(
			r#"{
				"id": "horizonte",
				"active": true,
				"basic": {
					"name": "Residencial Horizonte",
					"location": {
						"address": "Rua das Araucárias, 100",
						"neighborhood": "Água Verde",
						"city": "Curitiba"
					}
				}
			}"#,
		)
		.unwrap()
	}

	#[test]
	fn test_landing_header_data() {
		let data = landing_header_data(&config(), Some("https://wa.me/55".to_string()));
		assert_eq!(data.brand.logo.as_deref(), Some("LP"));
		assert_eq!(data.brand.title.as_deref(), Some("Imóveis Alfa"));
		assert_eq!(data.navigation.len(), 3);
		assert!(!data.show_back_button);
		assert_eq!(data.cta.unwrap().href, "https://wa.me/55");
	}

	#[test]
	fn test_landing_header_without_link_uses_dead_href() {
		let data = landing_header_data(&config(), None);
		assert_eq!(data.cta.unwrap().href, "#");
	}

	#[test]
	fn test_product_header_fallbacks() {
		let data = product_header_data(&product(), None);
		assert_eq!(data.brand.logo.as_deref(), Some("RE"));
		assert_eq!(data.brand.title.as_deref(), Some("Residencial Horizonte"));
		assert_eq!(data.brand.subtitle.as_deref(), Some("Água Verde, Curitiba"));
		assert!(data.show_back_button);
	}

	#[test]
	fn test_product_header_prefers_branding() {
		let mut product = product();
		product.branding = serde_json::from_str(
			r#"{ "logo": "RH", "title": "Horizonte", "subtitle": "Viva o alto padrão" }"#,
		)
		.unwrap();
		let data = product_header_data(&product, None);
		assert_eq!(data.brand.logo.as_deref(), Some("RH"));
		assert_eq!(data.brand.subtitle.as_deref(), Some("Viva o alto padrão"));
	}

	#[test]
	fn test_floating_contact() {
		let html = floating_contact("https://wa.me/55", "ana@alfa.com.br").render_to_string();
		assert!(html.contains("class=\"floating-btn whatsapp\""));
		assert!(html.contains("href=\"mailto:ana@alfa.com.br\""));
		assert!(html.contains("aria-label=\"Falar no WhatsApp\""));
	}

	#[test]
	fn test_site_footer_with_agent() {
		let html = site_footer(&config(), Some(&agent()), 2026).render_to_string();
		assert!(html.contains("Imóveis Alfa"));
		assert!(html.contains("CRECI 12.345 • Alfa Imóveis"));
		assert!(html.contains("href=\"mailto:ana@alfa.com.br\""));
		assert!(html.contains("href=\"tel:5541999990000\""));
		assert!(html.contains("(41) 99999-0000"));
		assert!(html.contains("© 2026 Imóveis Alfa. Todos os direitos reservados."));
		// Social: only non-empty URLs, capitalized labels
		assert!(html.contains(">Instagram</a>"));
		assert!(!html.contains("Linkedin"));
	}

	#[test]
	fn test_site_footer_without_agent_skips_contact() {
		let html = site_footer(&config(), None, 2026).render_to_string();
		assert!(!html.contains("Contato"));
		assert!(html.contains("Redes Sociais"));
	}

	#[test]
	fn test_features_section() {
		let features: FeaturesSection = serde_json::from_str(
			r#"{
				"title": "Diferenciais",
				"description": "Pensado para o seu dia a dia",
				"items": [
					{ "icon": "water-outline", "title": "Piscina", "description": "Raia de 25m" }
				]
			}"#,
		)
		.unwrap();
		let html = features_section(&features).render_to_string();
		assert!(html.contains("<h2>Diferenciais</h2>"));
		assert!(html.contains("name=\"water-outline\""));
		assert!(html.contains("class=\"feature-title\">Piscina</h3>"));
	}

	#[test]
	fn test_location_with_map_and_nearby() {
		let location = LocationSection {
			title: "Localização".to_string(),
			description: "No coração do bairro".to_string(),
			subtitle: Some("Tudo por perto".to_string()),
			map_url: Some("https://maps.example/embed".to_string()),
			nearby: Some(vec![NearbyPoint {
				name: "Parque".to_string(),
				distance: "800m".to_string(),
			}]),
		};
		let html = location_section(&location, "Rua das Araucárias, 100").render_to_string();
		assert!(html.contains("<iframe src=\"https://maps.example/embed\""));
		assert!(html.contains("allowfullscreen"));
		assert!(html.contains("Pontos de Interesse"));
		assert!(html.contains("class=\"nearby-distance\">800m</span>"));
		assert!(html.contains("class=\"location-address\">Rua das Araucárias, 100</p>"));
		assert!(!html.contains("map-placeholder"));
	}

	#[test]
	fn test_location_without_map_renders_placeholder() {
		let location = LocationSection::default();
		let html = location_section(&location, "").render_to_string();
		assert!(html.contains("map-placeholder"));
		assert!(html.contains("Mapa em breve"));
		assert!(!html.contains("<iframe"));
	}

	#[test]
	fn test_agent_section() {
		let html = agent_section(&agent(), "https://wa.me/5541999990000").render_to_string();
		assert!(html.contains("class=\"agent-creci\">CRECI 12.345</p>"));
		assert!(html.contains("contact-btn whatsapp"));
		assert!(html.contains("contact-btn instagram"));
		assert!(html.contains("Entre em contato"));
	}

	#[test]
	fn test_agent_section_without_instagram() {
		let mut agent = agent();
		agent.social.clear();
		let html = agent_section(&agent, "#").render_to_string();
		assert!(!html.contains("contact-btn instagram"));
	}

	#[test]
	fn test_product_footer_copyright_fallback() {
		let html = product_footer(&product(), None, 2026).render_to_string();
		assert!(html.contains("© 2026 Residencial Horizonte"));
		assert!(html.contains("Rua das Araucárias, 100"));
		assert!(!html.contains("footer-disclaimer"));
	}

	#[test]
	fn test_product_footer_explicit_copy() {
		let mut product = product();
		product.footer = serde_json::from_str(
			r#"{ "copyright": "© Incorporadora Alfa", "disclaimer": "Imagens ilustrativas." }"#,
		)
		.unwrap();
		let html = product_footer(&product, Some(&agent()), 2026).render_to_string();
		assert!(html.contains("© Incorporadora Alfa"));
		assert!(html.contains("class=\"footer-disclaimer\">Imagens ilustrativas.</p>"));
		assert!(html.contains("CRECI 12.345 • Alfa Imóveis"));
	}
}
