//! JSON data model for Vitrine pages.
//!
//! Everything a page renders arrives as one of three fetched documents:
//! `config.json` (site metadata and app settings), `products.json` (the
//! property catalog) and `links.json` (agents, companies and WhatsApp
//! message templates). The records here are deliberately tolerant — optional
//! sub-objects default to absent instead of failing deserialization, because
//! a missing section degrades to a skipped render, not a broken page.

pub mod model;
pub mod records;

pub use model::{
	Address, Agent, AgentContacts, AppSettings, BasicInfo, Branding, CardData, Company, Directory,
	FeatureItem, FeaturesSection, FooterData, HeroCta, HeroData, HeroImage, HeroSpec,
	LocationSection, NavItem, NearbyPoint, Product, ProductsFile, SeoData, SiteConfig, SiteMeta,
	WhatsAppContact,
};
pub use records::{SortOrder, filter_by, find_by, find_product, sort_by_key_ordered};
