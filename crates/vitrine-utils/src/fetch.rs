//! JSON fetching over the browser's fetch API.

use serde::de::DeserializeOwned;
use vitrine_core::error_log;

use crate::data::{DataError, SiteData, ensure_all};

/// Fetches and parses a JSON document.
///
/// One attempt, no retry. Any failure — network, non-2xx status, parse —
/// is logged and collapsed into `None`; callers treat that as a fatal
/// data-load condition rather than handling error detail.
pub async fn load_json<T: DeserializeOwned>(url: &str) -> Option<T> {
	match request(url).await {
		Ok(value) => Some(value),
		Err(err) => {
			error_log!("failed to load JSON from {url}: {err}");
			None
		}
	}
}

async fn request<T: DeserializeOwned>(url: &str) -> Result<T, reqwest::Error> {
	reqwest::get(url)
		.await?
		.error_for_status()?
		.json::<T>()
		.await
}

/// Resolves a path against the current page location.
///
/// The fetch client wants absolute URLs; the data files are addressed
/// relative to the page that loads them.
pub fn absolute_url(path: &str) -> String {
	let base = web_sys::window().and_then(|win| win.location().href().ok());
	match base {
		Some(base) => web_sys::Url::new_with_base(path, &base)
			.map(|url| url.href())
			.unwrap_or_else(|_| path.to_string()),
		None => path.to_string(),
	}
}

/// Fetches the three site documents concurrently.
///
/// The fan-out is the only concurrency on these pages; the results pass
/// through the all-or-nothing gate, so a single failed document discards the
/// other two.
pub async fn load_site_data() -> Result<SiteData, DataError> {
	let (config, products, directory) = futures::join!(
		load_json(&absolute_url("data/config.json")),
		load_json(&absolute_url("data/products.json")),
		load_json(&absolute_url("data/links.json")),
	);
	ensure_all(config, products, directory)
}
