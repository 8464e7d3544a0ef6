//! Browser tests for the debounce/throttle wrappers.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

use vitrine_utils::timing::{Debounced, Throttled};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_debounce_runs_only_the_last_call() {
	let calls = Rc::new(Cell::new(0));
	let seen = Rc::new(Cell::new(0));
	let debounced = Debounced::new(20, {
		let calls = Rc::clone(&calls);
		let seen = Rc::clone(&seen);
		move |value: i32| {
			calls.set(calls.get() + 1);
			seen.set(value);
		}
	});

	debounced.call(1);
	debounced.call(2);
	debounced.call(3);

	TimeoutFuture::new(60).await;
	assert_eq!(calls.get(), 1);
	assert_eq!(seen.get(), 3);
}

#[wasm_bindgen_test]
async fn test_throttle_drops_calls_inside_the_window() {
	let calls = Rc::new(Cell::new(0));
	let throttled = Throttled::new(40, {
		let calls = Rc::clone(&calls);
		move |_: ()| calls.set(calls.get() + 1)
	});

	throttled.call(());
	throttled.call(());
	throttled.call(());
	assert_eq!(calls.get(), 1);

	TimeoutFuture::new(80).await;
	throttled.call(());
	assert_eq!(calls.get(), 2);
}
