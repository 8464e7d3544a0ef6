//! Entity resolution for the detail page and WhatsApp template lookup.

use std::collections::BTreeMap;

use thiserror::Error;
use vitrine_types::{Agent, Product, find_product};
use vitrine_utils::whatsapp_link;

/// Template used when a requested one is absent.
pub const DEFAULT_TEMPLATE: &str = "interesse";

/// The three distinct fatal conditions of the detail page.
///
/// Messages are user-facing (the error view shows them verbatim), hence
/// Portuguese.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	/// No `id` query parameter.
	#[error("ID do produto não encontrado na URL")]
	MissingId,
	/// No product with the requested id.
	#[error("Produto com ID \"{0}\" não encontrado")]
	NotFound(String),
	/// The product exists but is no longer offered.
	#[error("Este produto não está mais disponível")]
	Inactive,
}

/// Resolves the product addressed by the `id` query parameter.
pub fn resolve_product<'a>(
	products: &'a [Product],
	id: Option<&str>,
) -> Result<&'a Product, ResolveError> {
	let id = id.filter(|id| !id.is_empty()).ok_or(ResolveError::MissingId)?;
	let product = find_product(products, id).ok_or_else(|| ResolveError::NotFound(id.to_string()))?;
	if !product.active {
		return Err(ResolveError::Inactive);
	}
	Ok(product)
}

/// Looks up a message template, falling back to [`DEFAULT_TEMPLATE`].
pub fn resolve_template<'a>(
	templates: &'a BTreeMap<String, String>,
	name: Option<&str>,
) -> Option<&'a str> {
	name.and_then(|name| templates.get(name))
		.or_else(|| templates.get(DEFAULT_TEMPLATE))
		.map(String::as_str)
}

/// Builds the WhatsApp deep link for an agent, or `None` when no template
/// resolves (callers fall back to a dead `#` href).
pub fn agent_whatsapp_link(
	agent: &Agent,
	templates: &BTreeMap<String, String>,
	template: Option<&str>,
	product_name: &str,
) -> Option<String> {
	let message = resolve_template(templates, template)?;
	Some(whatsapp_link(
		&agent.contacts.whatsapp.number,
		message,
		product_name,
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn products() -> Vec<Product> {
		serde_json::from_str(
			r#"[
				{ "id": "horizonte", "active": true, "basic": { "name": "Horizonte" } },
				{ "id": "reserva", "active": false, "basic": { "name": "Reserva" } }
			]"#,
		)
		.unwrap()
	}

	fn templates() -> BTreeMap<String, String> {
		BTreeMap::from([
			(
				"interesse".to_string(),
				"Tenho interesse no {PRODUCT_NAME}.".to_string(),
			),
			(
				"visita".to_string(),
				"Quero visitar o {PRODUCT_NAME}.".to_string(),
			),
		])
	}

	#[test]
	fn test_resolve_product_happy_path() {
		let products = products();
		let product = resolve_product(&products, Some("horizonte")).unwrap();
		assert_eq!(product.id, "horizonte");
	}

	#[test]
	fn test_missing_id() {
		assert_eq!(
			resolve_product(&products(), None).unwrap_err(),
			ResolveError::MissingId
		);
		assert_eq!(
			resolve_product(&products(), Some("")).unwrap_err(),
			ResolveError::MissingId
		);
	}

	#[test]
	fn test_unknown_id() {
		assert_eq!(
			resolve_product(&products(), Some("nope")).unwrap_err(),
			ResolveError::NotFound("nope".to_string())
		);
	}

	#[test]
	fn test_inactive_product() {
		assert_eq!(
			resolve_product(&products(), Some("reserva")).unwrap_err(),
			ResolveError::Inactive
		);
	}

	#[test]
	fn test_error_messages_are_user_facing() {
		assert_eq!(
			ResolveError::NotFound("x".to_string()).to_string(),
			"Produto com ID \"x\" não encontrado"
		);
	}

	#[test]
	fn test_resolve_template_prefers_requested() {
		let templates = templates();
		assert_eq!(
			resolve_template(&templates, Some("visita")),
			Some("Quero visitar o {PRODUCT_NAME}.")
		);
	}

	#[test]
	fn test_resolve_template_falls_back_to_default() {
		let templates = templates();
		assert_eq!(
			resolve_template(&templates, Some("inexistente")),
			Some("Tenho interesse no {PRODUCT_NAME}.")
		);
		assert_eq!(
			resolve_template(&templates, None),
			Some("Tenho interesse no {PRODUCT_NAME}.")
		);
	}

	#[test]
	fn test_resolve_template_empty_map() {
		assert_eq!(resolve_template(&BTreeMap::new(), Some("visita")), None);
	}

	#[test]
	fn test_agent_whatsapp_link() {
		let agent: Agent = serde_json::from_str(
			r#"{
				"name": "Ana",
				"contacts": { "whatsapp": { "number": "5541999990000", "display": "" } }
			}"#,
		)
		.unwrap();
		let link = agent_whatsapp_link(&agent, &templates(), None, "Horizonte").unwrap();
		assert_eq!(
			link,
			"https://wa.me/5541999990000?text=Tenho%20interesse%20no%20Horizonte."
		);
	}
}
