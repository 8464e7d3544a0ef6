//! Debounce and throttle wrappers.
//!
//! Both return a callable handle rather than a bare closure so the caller
//! keeps ownership of the timer state; dropping a [`Debounced`] cancels any
//! pending trailing call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Trailing-edge debounce: only the last call within a `wait_ms` window runs.
pub struct Debounced<A: 'static> {
	wait_ms: u32,
	handler: Rc<dyn Fn(A)>,
	pending: Rc<RefCell<Option<Timeout>>>,
}

impl<A: 'static> Debounced<A> {
	/// Wraps `handler` with a `wait_ms` trailing window.
	pub fn new(wait_ms: u32, handler: impl Fn(A) + 'static) -> Self {
		Self {
			wait_ms,
			handler: Rc::new(handler),
			pending: Rc::new(RefCell::new(None)),
		}
	}

	/// Schedules a call, displacing any previously pending one.
	pub fn call(&self, arg: A) {
		let handler = Rc::clone(&self.handler);
		let pending = Rc::clone(&self.pending);
		let timeout = Timeout::new(self.wait_ms, move || {
			pending.borrow_mut().take();
			handler(arg);
		});
		if let Some(previous) = self.pending.borrow_mut().replace(timeout) {
			previous.cancel();
		}
	}
}

/// Leading-edge throttle: a call runs immediately, further calls are dropped
/// until `limit_ms` elapses.
pub struct Throttled<A: 'static> {
	limit_ms: u32,
	handler: Rc<dyn Fn(A)>,
	in_flight: Rc<Cell<bool>>,
}

impl<A: 'static> Throttled<A> {
	/// Wraps `handler` with a `limit_ms` cool-down.
	pub fn new(limit_ms: u32, handler: impl Fn(A) + 'static) -> Self {
		Self {
			limit_ms,
			handler: Rc::new(handler),
			in_flight: Rc::new(Cell::new(false)),
		}
	}

	/// Runs the handler unless the cool-down is active.
	pub fn call(&self, arg: A) {
		if self.in_flight.get() {
			return;
		}
		(self.handler)(arg);
		self.in_flight.set(true);
		let in_flight = Rc::clone(&self.in_flight);
		Timeout::new(self.limit_ms, move || in_flight.set(false)).forget();
	}
}
