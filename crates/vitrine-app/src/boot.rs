//! WASM entry points.
//!
//! Each hosted page calls exactly one of these after loading the module.
//! The controller is constructed explicitly here and parked in a
//! page-scoped slot so its listeners and observers stay alive; nothing is
//! hung off `window`.

use std::cell::RefCell;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::landing::LandingApp;
use crate::product::ProductApp;

thread_local! {
	static LANDING: RefCell<Option<LandingApp>> = const { RefCell::new(None) };
	static PRODUCT: RefCell<Option<ProductApp>> = const { RefCell::new(None) };
}

fn install_panic_hook() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();
}

/// Boots the listing page.
#[wasm_bindgen]
pub fn boot_landing() {
	install_panic_hook();
	wasm_bindgen_futures::spawn_local(async {
		let app = LandingApp::run().await;
		LANDING.with(|slot| *slot.borrow_mut() = app);
	});
}

/// Boots the product detail page.
#[wasm_bindgen]
pub fn boot_product() {
	install_panic_hook();
	wasm_bindgen_futures::spawn_local(async {
		let app = ProductApp::run().await;
		PRODUCT.with(|slot| *slot.borrow_mut() = app);
	});
}
