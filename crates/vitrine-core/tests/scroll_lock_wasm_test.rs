//! Browser tests for the reference-counted body scroll lock.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

use vitrine_core::dom::ScrollLock;

wasm_bindgen_test_configure!(run_in_browser);

fn body_overflow() -> String {
	web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.body())
		.map(|body| body.style().get_property_value("overflow").unwrap_or_default())
		.unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_lock_suppresses_and_restores_scrolling() {
	assert_eq!(ScrollLock::active(), 0);
	{
		let _lock = ScrollLock::acquire();
		assert_eq!(ScrollLock::active(), 1);
		assert_eq!(body_overflow(), "hidden");
	}
	assert_eq!(ScrollLock::active(), 0);
	assert_eq!(body_overflow(), "");
}

#[wasm_bindgen_test]
fn test_overlapping_locks_release_only_at_zero() {
	let first = ScrollLock::acquire();
	let second = ScrollLock::acquire();
	assert_eq!(ScrollLock::active(), 2);
	assert_eq!(body_overflow(), "hidden");

	// Dropping one overlay must not restore scrolling while the other is open
	drop(first);
	assert_eq!(ScrollLock::active(), 1);
	assert_eq!(body_overflow(), "hidden");

	drop(second);
	assert_eq!(ScrollLock::active(), 0);
	assert_eq!(body_overflow(), "");
}
