//! Web storage access.
//!
//! Storage can be unavailable (private browsing, quota, disabled cookies);
//! every failure degrades to the default value or `false` rather than
//! failing the page.

use serde::Serialize;
use serde::de::DeserializeOwned;
use vitrine_core::error_log;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

/// Reads a raw string value.
pub fn get_raw(key: &str) -> Option<String> {
	local_storage()?.get_item(key).ok().flatten()
}

/// Writes a raw string value. Returns whether the write succeeded.
pub fn set_raw(key: &str, value: &str) -> bool {
	let Some(storage) = local_storage() else {
		return false;
	};
	match storage.set_item(key, value) {
		Ok(()) => true,
		Err(_) => {
			error_log!("failed to write storage key `{key}`");
			false
		}
	}
}

/// Removes a key. Returns whether the removal succeeded.
pub fn remove(key: &str) -> bool {
	let Some(storage) = local_storage() else {
		return false;
	};
	storage.remove_item(key).is_ok()
}

/// Reads a JSON-encoded value.
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
	serde_json::from_str(&get_raw(key)?).ok()
}

/// Writes a JSON-encoded value. Returns whether the write succeeded.
pub fn set_json<T: Serialize>(key: &str, value: &T) -> bool {
	match serde_json::to_string(value) {
		Ok(encoded) => set_raw(key, &encoded),
		Err(err) => {
			error_log!("failed to encode storage key `{key}`: {err}");
			false
		}
	}
}
