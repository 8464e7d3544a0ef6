//! The controller decision flow, exercised off-browser: the all-or-nothing
//! load gate, entity resolution, and the error view each failure produces.

use vitrine_app::error_view::error_view;
use vitrine_app::resolve::{ResolveError, agent_whatsapp_link, resolve_product};
use vitrine_app::{Phase, sections};
use vitrine_utils::{DataError, ensure_all};
use vitrine_types::{Directory, ProductsFile, SiteConfig};

fn config() -> SiteConfig {
	serde_json::from_str(
		r#"{
			"site": { "title": "Imóveis Alfa", "description": "Lançamentos", "url": "https://alfa.example" },
			"app": { "defaultAgent": "ana" }
		}"#,
	)
	.unwrap()
}

fn products() -> ProductsFile {
	serde_json::from_str(
		r#"{
			"products": [
				{ "id": "horizonte", "active": true, "agentId": "ana", "basic": { "name": "Horizonte" } },
				{ "id": "reserva", "active": false, "basic": { "name": "Reserva" } }
			]
		}"#,
	)
	.unwrap()
}

fn directory() -> Directory {
	serde_json::from_str(
		r#"{
			"agents": {
				"ana": {
					"name": "Ana Souza",
					"contacts": {
						"email": "ana@alfa.com.br",
						"whatsapp": { "number": "5541999990000", "display": "(41) 99999-0000" }
					}
				}
			},
			"whatsappTemplates": { "interesse": "Tenho interesse no {PRODUCT_NAME}." }
		}"#,
	)
	.unwrap()
}

#[test]
fn test_load_gate_failure_maps_to_error_view() {
	// One missing document fails the whole load...
	let error = ensure_all(Some(config()), None, Some(directory())).unwrap_err();
	assert_eq!(error, DataError::Missing);

	// ...and the message lands verbatim in the full-screen error view
	let html = error_view(&error.to_string(), false).render_to_string();
	assert!(html.contains("Falha ao carregar dados essenciais"));
	assert!(html.contains("Tentar Novamente"));
}

#[test]
fn test_detail_page_failure_modes_offer_way_back() {
	let data = ensure_all(Some(config()), Some(products()), Some(directory())).unwrap();

	for (id, expected) in [
		(None, ResolveError::MissingId),
		(Some("nope"), ResolveError::NotFound("nope".to_string())),
		(Some("reserva"), ResolveError::Inactive),
	] {
		let error = resolve_product(&data.products.products, id).unwrap_err();
		assert_eq!(error, expected);

		let html = error_view(&error.to_string(), true).render_to_string();
		assert!(html.contains(&error.to_string().replace('"', "&quot;")));
		assert!(html.contains("Voltar ao Início"));
	}
}

#[test]
fn test_happy_path_composition() {
	let data = ensure_all(Some(config()), Some(products()), Some(directory())).unwrap();
	let product = resolve_product(&data.products.products, Some("horizonte")).unwrap();
	let agent = data.directory.agents.get("ana").unwrap();

	let link =
		agent_whatsapp_link(agent, &data.directory.whatsapp_templates, None, &product.basic.name)
			.unwrap();
	assert_eq!(
		link,
		"https://wa.me/5541999990000?text=Tenho%20interesse%20no%20Horizonte."
	);

	// Header data for both pages builds from the same loaded documents
	let landing = sections::landing_header_data(&data.config, Some(link.clone()));
	assert_eq!(landing.cta.as_ref().unwrap().href, link);

	let detail = sections::product_header_data(product, Some(link.clone()));
	assert!(detail.show_back_button);
	assert_eq!(detail.brand.title.as_deref(), Some("Horizonte"));

	// A fresh controller starts in Loading and Interactive is terminal
	assert_eq!(Phase::default(), Phase::Loading);
	assert!(Phase::Interactive.is_terminal());
}
