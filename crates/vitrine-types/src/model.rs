//! Record types for the three fetched JSON documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `config.json` — site metadata and app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
	/// Site-wide metadata.
	pub site: SiteMeta,
	/// Application settings.
	pub app: AppSettings,
}

/// Site-wide metadata used for branding and SEO defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteMeta {
	/// Site title.
	pub title: String,
	/// Site description.
	#[serde(default)]
	pub description: String,
	/// Canonical site URL.
	#[serde(default)]
	pub url: String,
}

/// Application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
	/// Id of the agent used for site-level contact actions.
	#[serde(default)]
	pub default_agent: String,
}

/// `products.json` — the property catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsFile {
	/// All catalog entries, active or not.
	#[serde(default)]
	pub products: Vec<Product>,
}

/// One property in the catalog.
///
/// Only `id`, `card` and `basic` matter on the listing page; the detail page
/// reads the richer optional sections. A product whose `agent_id` does not
/// resolve still renders, just without agent info.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	/// Stable identifier, also used in `product.html?id=<id>` links.
	pub id: String,
	/// Inactive products render an "unavailable" placeholder.
	#[serde(default)]
	pub active: bool,
	/// Featured products are eligible for the featured filter.
	#[serde(default)]
	pub featured: bool,
	/// Foreign key into [`Directory::agents`].
	#[serde(default)]
	pub agent_id: Option<String>,
	/// Foreign key into [`Directory::companies`].
	#[serde(default)]
	pub company_id: Option<String>,
	/// Listing-card content.
	#[serde(default)]
	pub card: CardData,
	/// Name and address of the property.
	pub basic: BasicInfo,
	/// Detail-page hero section.
	#[serde(default)]
	pub hero: Option<HeroData>,
	/// Detail-page features section.
	#[serde(default)]
	pub features: Option<FeaturesSection>,
	/// Detail-page location section.
	#[serde(default)]
	pub location: Option<LocationSection>,
	/// Detail-page header navigation.
	#[serde(default)]
	pub navigation: Vec<NavItem>,
	/// Detail-page branding overrides.
	#[serde(default)]
	pub branding: Option<Branding>,
	/// Detail-page SEO overrides.
	#[serde(default)]
	pub seo: Option<SeoData>,
	/// Detail-page footer copy.
	#[serde(default)]
	pub footer: Option<FooterData>,
}

impl Product {
	/// Two-letter uppercase initials derived from the property name,
	/// used as the header logo fallback.
	pub fn initials(&self) -> String {
		self.basic.name.chars().take(2).collect::<String>().to_uppercase()
	}

	/// Relative URL of this product's detail page.
	pub fn detail_url(&self) -> String {
		format!("product.html?id={}", self.id)
	}
}

/// Listing-card content for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
	/// Card title.
	#[serde(default)]
	pub title: String,
	/// Location line shown under the title.
	#[serde(default)]
	pub subtitle: String,
	/// Short description.
	#[serde(default)]
	pub description: String,
	/// Spec chips ("3 suítes", "280m²", ...).
	#[serde(default)]
	pub specs: Vec<String>,
	/// Highlight bullet list.
	#[serde(default)]
	pub highlights: Vec<String>,
	/// Badge text ("Destaque", "Lançamento", ...).
	#[serde(default)]
	pub badge: Option<String>,
	/// Price range line; absent means "Consulte".
	#[serde(default)]
	pub price_range: Option<String>,
	/// Card image path.
	#[serde(default)]
	pub image: Option<String>,
}

/// Name and address of a property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicInfo {
	/// Property name.
	pub name: String,
	/// Property address.
	#[serde(default)]
	pub location: Address,
}

/// A property address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
	/// Street address.
	#[serde(default)]
	pub address: String,
	/// Neighborhood.
	#[serde(default)]
	pub neighborhood: String,
	/// City.
	#[serde(default)]
	pub city: String,
}

/// Detail-page hero section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroData {
	/// Small badge above the title.
	#[serde(default)]
	pub badge: String,
	/// Hero title.
	#[serde(default)]
	pub title: String,
	/// Hero description.
	#[serde(default)]
	pub description: String,
	/// Numeric spec chips.
	#[serde(default)]
	pub specs: Vec<HeroSpec>,
	/// Call-to-action buttons.
	#[serde(default)]
	pub ctas: Vec<HeroCta>,
	/// Highlight copy; supports `**bold**` / `*italic*` inline spans.
	#[serde(default)]
	pub highlight: String,
	/// Gallery images.
	#[serde(default)]
	pub images: Vec<HeroImage>,
}

/// A value/label pair rendered as a hero spec chip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroSpec {
	/// Numeric value ("280", "4").
	#[serde(default)]
	pub value: String,
	/// Label under the value ("m² privativos", "suítes").
	#[serde(default)]
	pub label: String,
}

/// A hero call-to-action.
///
/// CTAs with an `action` of `whatsapp` or `contact` are intercepted and
/// resolved by the page controller; the rest navigate through `href`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroCta {
	/// Button text.
	#[serde(default)]
	pub text: String,
	/// Navigation target for plain CTAs.
	#[serde(default)]
	pub href: Option<String>,
	/// Action tag (`whatsapp`, `contact`).
	#[serde(default)]
	pub action: Option<String>,
	/// WhatsApp template name to resolve on click.
	#[serde(default)]
	pub template: Option<String>,
	/// Icon name.
	#[serde(default)]
	pub icon: Option<String>,
	/// Visual style ("primary", "secondary").
	#[serde(rename = "type", default)]
	pub kind: Option<String>,
	/// Anchor target attribute.
	#[serde(default)]
	pub target: Option<String>,
}

/// A hero gallery image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroImage {
	/// Image path.
	pub src: String,
	/// Alt text.
	#[serde(default)]
	pub alt: String,
	/// Overlay title; falls back to the alt text.
	#[serde(default)]
	pub title: Option<String>,
	/// `"large"` or `"small"`; exactly one image is rendered large.
	#[serde(default)]
	pub size: Option<String>,
}

/// Detail-page features section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturesSection {
	/// Section title.
	#[serde(default)]
	pub title: String,
	/// Section description.
	#[serde(default)]
	pub description: String,
	/// Feature grid items.
	#[serde(default)]
	pub items: Vec<FeatureItem>,
}

/// One feature grid item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureItem {
	/// Icon name.
	#[serde(default)]
	pub icon: String,
	/// Feature title.
	#[serde(default)]
	pub title: String,
	/// Feature description.
	#[serde(default)]
	pub description: String,
}

/// Detail-page location section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSection {
	/// Section title.
	#[serde(default)]
	pub title: String,
	/// Section description.
	#[serde(default)]
	pub description: String,
	/// Optional subheading.
	#[serde(default)]
	pub subtitle: Option<String>,
	/// Embedded map URL; absent renders a placeholder.
	#[serde(default)]
	pub map_url: Option<String>,
	/// Nearby points of interest.
	#[serde(default)]
	pub nearby: Option<Vec<NearbyPoint>>,
}

/// A nearby point of interest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NearbyPoint {
	/// Point name.
	#[serde(default)]
	pub name: String,
	/// Distance label ("800m", "5 min").
	#[serde(default)]
	pub distance: String,
}

/// A header navigation entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavItem {
	/// Link label.
	#[serde(default)]
	pub label: String,
	/// Link target; in-page anchors start with `#`.
	#[serde(default)]
	pub href: String,
}

/// Detail-page branding overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Branding {
	/// Header logo text.
	#[serde(default)]
	pub logo: Option<String>,
	/// Header title.
	#[serde(default)]
	pub title: Option<String>,
	/// Header subtitle.
	#[serde(default)]
	pub subtitle: Option<String>,
	/// Named theme stylesheet to load for this product.
	#[serde(default)]
	pub theme: Option<String>,
}

/// SEO metadata for a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
	/// Page title.
	#[serde(default)]
	pub title: Option<String>,
	/// Meta description.
	#[serde(default)]
	pub description: Option<String>,
	/// Meta keywords.
	#[serde(default)]
	pub keywords: Option<String>,
	/// Meta author.
	#[serde(default)]
	pub author: Option<String>,
	/// Canonical URL; falls back to the current location.
	#[serde(default)]
	pub canonical: Option<String>,
	/// Open Graph / Twitter image.
	#[serde(default)]
	pub og_image: Option<String>,
	/// JSON-LD structured data payload.
	#[serde(default)]
	pub structured_data: Option<serde_json::Value>,
}

/// Detail-page footer copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterData {
	/// Copyright line; absent derives one from the property name.
	#[serde(default)]
	pub copyright: Option<String>,
	/// Legal disclaimer.
	#[serde(default)]
	pub disclaimer: Option<String>,
}

/// `links.json` — agents, companies and WhatsApp message templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
	/// Agents by id.
	#[serde(default)]
	pub agents: BTreeMap<String, Agent>,
	/// Companies by id.
	#[serde(default)]
	pub companies: BTreeMap<String, Company>,
	/// Message templates by name; values contain a `{PRODUCT_NAME}`
	/// placeholder.
	#[serde(default)]
	pub whatsapp_templates: BTreeMap<String, String>,
}

/// A real-estate agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Agent {
	/// Agent name.
	pub name: String,
	/// CRECI broker license id.
	#[serde(default)]
	pub creci: String,
	/// Company the agent represents.
	#[serde(default)]
	pub company: String,
	/// Short biography.
	#[serde(default)]
	pub bio: Option<String>,
	/// Portrait photo path.
	#[serde(default)]
	pub photo: String,
	/// Contact channels.
	#[serde(default)]
	pub contacts: AgentContacts,
	/// Social links by network name (`instagram`, `linkedin`, ...).
	#[serde(default)]
	pub social: BTreeMap<String, String>,
}

/// An agent's contact channels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentContacts {
	/// Contact email.
	#[serde(default)]
	pub email: String,
	/// WhatsApp contact.
	#[serde(default)]
	pub whatsapp: WhatsAppContact,
}

/// A WhatsApp number plus its human-readable form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhatsAppContact {
	/// Digits-only number used in `wa.me` links.
	#[serde(default)]
	pub number: String,
	/// Display form ("(41) 99999-0000").
	#[serde(default)]
	pub display: String,
}

/// A company referenced by id from a product.
///
/// Fields beyond the name are unspecified; unknown keys are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
	/// Company name.
	#[serde(default)]
	pub name: String,
	/// Any further fields the data source carries.
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_product_minimal_json() {
		let product: Product = serde_json::from_str(
			r#"{
				"id": "horizonte",
				"basic": { "name": "Residencial Horizonte" }
			}"#,
		)
		.unwrap();

		assert_eq!(product.id, "horizonte");
		assert!(!product.active);
		assert!(!product.featured);
		assert!(product.hero.is_none());
		assert!(product.navigation.is_empty());
	}

	#[test]
	fn test_product_camel_case_keys() {
		let product: Product = serde_json::from_str(
			r#"{
				"id": "p1",
				"active": true,
				"agentId": "ana",
				"companyId": "alfa",
				"card": { "priceRange": "R$ 890 mil - R$ 1,2 mi" },
				"basic": { "name": "Parque das Águas" }
			}"#,
		)
		.unwrap();

		assert_eq!(product.agent_id.as_deref(), Some("ana"));
		assert_eq!(product.company_id.as_deref(), Some("alfa"));
		assert_eq!(
			product.card.price_range.as_deref(),
			Some("R$ 890 mil - R$ 1,2 mi")
		);
	}

	#[test]
	fn test_product_initials() {
		let product: Product = serde_json::from_str(
			r#"{ "id": "p1", "basic": { "name": "alto da mata" } }"#,
		)
		.unwrap();
		assert_eq!(product.initials(), "AL");
	}

	#[test]
	fn test_product_detail_url() {
		let product: Product =
			serde_json::from_str(r#"{ "id": "vila-real", "basic": { "name": "Vila Real" } }"#)
				.unwrap();
		assert_eq!(product.detail_url(), "product.html?id=vila-real");
	}

	#[test]
	fn test_directory_template_map() {
		let directory: Directory = serde_json::from_str(
			r#"{
				"agents": {
					"ana": {
						"name": "Ana Souza",
						"creci": "CRECI 12.345",
						"company": "Alfa Imóveis",
						"contacts": {
							"email": "ana@alfa.com.br",
							"whatsapp": { "number": "5541999990000", "display": "(41) 99999-0000" }
						}
					}
				},
				"whatsappTemplates": {
					"interesse": "Olá! Tenho interesse no {PRODUCT_NAME}."
				}
			}"#,
		)
		.unwrap();

		assert!(directory.agents.contains_key("ana"));
		assert_eq!(
			directory.whatsapp_templates.get("interesse").unwrap(),
			"Olá! Tenho interesse no {PRODUCT_NAME}."
		);
		assert!(directory.companies.is_empty());
	}

	#[test]
	fn test_company_preserves_unknown_fields() {
		let company: Company = serde_json::from_str(
			r#"{ "name": "Alfa Imóveis", "site": "https://alfa.example" }"#,
		)
		.unwrap();
		assert_eq!(company.name, "Alfa Imóveis");
		assert_eq!(
			company.extra.get("site").and_then(|v| v.as_str()),
			Some("https://alfa.example")
		);
	}

	#[test]
	fn test_hero_cta_type_rename() {
		let cta: HeroCta = serde_json::from_str(
			r#"{ "text": "Falar no WhatsApp", "action": "whatsapp", "type": "primary" }"#,
		)
		.unwrap();
		assert_eq!(cta.kind.as_deref(), Some("primary"));
		assert_eq!(cta.action.as_deref(), Some("whatsapp"));
		assert!(cta.href.is_none());
	}
}
