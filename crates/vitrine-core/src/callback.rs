//! Typed callback wrappers for component-to-controller messaging.
//!
//! Components never dispatch ambient DOM custom events. The owning page
//! controller registers a [`Callback`] before mounting, and the component
//! invokes it with a typed payload (a contact request, a CTA click, a theme
//! change). The wrapper is an `Arc`, so it clones cheaply into however many
//! event closures need it.
//!
//! ## Example
//!
//! ```
//! use vitrine_core::Callback;
//!
//! let on_contact = Callback::new(|product_id: String| {
//! 	assert_eq!(product_id, "horizonte");
//! });
//! on_contact.call("horizonte".to_string());
//! ```

use std::sync::Arc;

/// A type-safe, cheaply cloneable callback.
///
/// `Args` is the payload the callback receives; `Ret` its return type
/// (usually `()`).
#[cfg(target_arch = "wasm32")]
pub struct Callback<Args = (), Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

/// A type-safe, cheaply cloneable callback (non-WASM version).
///
/// Off-browser the callback must be `Send + Sync` so tests can share it
/// across threads; on wasm32 the bound is dropped because closures routinely
/// capture `Rc` state.
#[cfg(not(target_arch = "wasm32"))]
pub struct Callback<Args = (), Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

#[cfg(target_arch = "wasm32")]
impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_callback_call() {
		let callback = Callback::new(|x: i32| x * 2);
		assert_eq!(callback.call(5), 10);
	}

	#[test]
	fn test_callback_clone_shares_function() {
		let callback1 = Callback::new(|x: i32| x + 1);
		let callback2 = callback1.clone();

		assert_eq!(callback1.call(1), 2);
		assert_eq!(callback2.call(2), 3);
	}

	#[test]
	fn test_callback_with_captured_state() {
		use std::sync::Mutex;

		let seen = Arc::new(Mutex::new(Vec::new()));
		let callback = Callback::new({
			let seen = Arc::clone(&seen);
			move |id: String| {
				seen.lock().unwrap().push(id);
			}
		});

		callback.call("a".to_string());
		callback.call("b".to_string());

		assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
	}

	#[test]
	fn test_callback_debug() {
		let callback = Callback::new(|_: ()| {});
		assert!(format!("{callback:?}").contains("Callback"));
	}
}
