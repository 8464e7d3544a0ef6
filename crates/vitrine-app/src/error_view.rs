//! Full-screen error view for unrecoverable page failures.
//!
//! Data-load and entity-resolution failures are terminal for the page load:
//! the whole document body is replaced by this view, offering a reload and
//! (on the detail page) a way back to the listing.

use vitrine_core::{IntoPage, Page, PageElement};

/// Id of the reload button, used to wire the click handler after injection.
pub const RELOAD_BUTTON_ID: &str = "error-reload";

/// Builds the error view markup.
pub fn error_view(message: &str, with_home_link: bool) -> Page {
	let home_link = with_home_link.then(|| {
		PageElement::new("a")
			.attr("href", "index.html")
			.attr("class", "btn btn-primary")
			.child(PageElement::new("ion-icon").attr("name", "home-outline"))
			.child("Voltar ao Início")
	});

	let reload_class = if with_home_link {
		"btn btn-secondary"
	} else {
		"btn btn-primary"
	};

	PageElement::new("div")
		.attr("class", "error-container")
		.child(
			PageElement::new("div")
				.attr("class", "error-content")
				.child(PageElement::new("ion-icon").attr("name", "alert-circle-outline"))
				.child(PageElement::new("h2").child("Ops! Algo deu errado"))
				.child(PageElement::new("p").child(message.to_string()))
				.child(
					PageElement::new("div")
						.attr("class", "error-actions")
						.child(home_link)
						.child(
							PageElement::new("button")
								.attr("id", RELOAD_BUTTON_ID)
								.attr("class", reload_class)
								.child(PageElement::new("ion-icon").attr("name", "refresh-outline"))
								.child("Tentar Novamente"),
						),
				),
		)
		.into_page()
}

/// Replaces the document body with the error view and wires the reload
/// button. Terminal: nothing else on the page survives this.
#[cfg(target_arch = "wasm32")]
pub fn show_fatal(message: &str, with_home_link: bool) {
	use vitrine_core::{EventType, dom, error_log};

	error_log!("page failed: {message}");

	let Ok(doc) = dom::document() else {
		return;
	};
	let Some(body) = doc.body() else {
		return;
	};
	body.set_inner_html(&error_view(message, with_home_link).render_to_string());

	if let Some(button) = dom::by_id(RELOAD_BUTTON_ID) {
		let listener = dom::listen(button.as_ref(), EventType::Click, |_event| {
			if let Ok(win) = dom::window() {
				let _ = win.location().reload();
			}
		});
		// The page is gone; the handle can outlive this scope.
		if let Ok(handle) = listener {
			std::mem::forget(handle);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_view_basics() {
		let html = error_view("Falha ao carregar dados essenciais", false).render_to_string();
		assert!(html.contains("Ops! Algo deu errado"));
		assert!(html.contains("Falha ao carregar dados essenciais"));
		assert!(html.contains("Tentar Novamente"));
		assert!(html.contains("id=\"error-reload\""));
		assert!(!html.contains("Voltar ao Início"));
		assert!(html.contains("class=\"btn btn-primary\""));
	}

	#[test]
	fn test_error_view_with_home_link() {
		let html = error_view("Produto não encontrado", true).render_to_string();
		assert!(html.contains("href=\"index.html\""));
		assert!(html.contains("Voltar ao Início"));
		// Reload demotes to secondary next to the home link
		assert!(html.contains("class=\"btn btn-secondary\""));
	}

	#[test]
	fn test_error_message_is_escaped() {
		let html = error_view("<script>boom</script>", false).render_to_string();
		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;"));
	}
}
