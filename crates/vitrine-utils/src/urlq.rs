//! Query-string state without navigation.
//!
//! Reads and writes a single query parameter through the History API; the
//! page never reloads.

use wasm_bindgen::JsValue;

/// Reads a query parameter from the current location.
pub fn url_param(name: &str) -> Option<String> {
	let search = web_sys::window()?.location().search().ok()?;
	let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
	params.get(name)
}

/// Sets a query parameter, replacing the browser URL via `pushState`.
pub fn set_url_param(name: &str, value: &str) {
	with_current_url(|params| params.set(name, value));
}

/// Removes a query parameter, replacing the browser URL via `pushState`.
pub fn remove_url_param(name: &str) {
	with_current_url(|params| params.delete(name));
}

fn with_current_url(edit: impl FnOnce(&web_sys::UrlSearchParams)) {
	let Some(win) = web_sys::window() else {
		return;
	};
	let Ok(href) = win.location().href() else {
		return;
	};
	let Ok(url) = web_sys::Url::new(&href) else {
		return;
	};
	edit(&url.search_params());
	if let Ok(history) = win.history() {
		let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url.href()));
	}
}
