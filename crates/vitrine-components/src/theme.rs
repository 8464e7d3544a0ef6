//! Light/dark theme controller.
//!
//! The decision logic ([`ThemeState`]) is separated from the browser side
//! ([`ThemeSwitcher`]) so the preference rules are testable off-browser:
//! stored preference beats OS preference, an explicit choice stops OS
//! tracking, and an invalid value changes nothing.

use std::str::FromStr;

use thiserror::Error;
use vitrine_core::{IntoPage, Page, PageElement};

/// Storage key for the persisted preference.
pub const THEME_STORAGE_KEY: &str = "preferred-theme";

/// `theme-color` meta value per theme.
pub const DARK_META_COLOR: &str = "#0F172A";
/// `theme-color` meta value per theme.
pub const LIGHT_META_COLOR: &str = "#FFFFFF";

/// The two supported themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
	/// Light theme (the default).
	Light,
	/// Dark theme.
	Dark,
}

/// Error returned for theme values outside `light`/`dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid theme `{0}`")]
pub struct InvalidTheme(pub String);

impl Theme {
	/// Returns the storage/attribute value.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Returns the opposite theme.
	pub fn other(&self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// Name of the theme stylesheet to load.
	pub fn stylesheet(&self) -> &'static str {
		match self {
			Self::Light => "light-theme",
			Self::Dark => "dark-theme",
		}
	}
}

impl FromStr for Theme {
	type Err = InvalidTheme;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			other => Err(InvalidTheme(other.to_string())),
		}
	}
}

/// Resolves the initial theme: stored preference if present, else the OS
/// color-scheme preference, else light.
pub fn resolve_initial(saved: Option<Theme>, system_dark: bool) -> Theme {
	match saved {
		Some(theme) => theme,
		None if system_dark => Theme::Dark,
		None => Theme::Light,
	}
}

/// The theme decision state, independent of any document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
	current: Theme,
	explicit: bool,
}

impl ThemeState {
	/// Builds the initial state from the stored preference and the OS
	/// preference.
	pub fn new(saved: Option<Theme>, system_dark: bool) -> Self {
		Self {
			current: resolve_initial(saved, system_dark),
			explicit: saved.is_some(),
		}
	}

	/// Applies a requested theme value.
	///
	/// Invalid input leaves the state untouched; the caller is expected to
	/// warn and persist nothing.
	pub fn set(&mut self, value: &str) -> Result<Theme, InvalidTheme> {
		let theme = value.parse::<Theme>()?;
		self.current = theme;
		self.explicit = true;
		Ok(theme)
	}

	/// Flips between the two themes.
	pub fn toggle(&mut self) -> Theme {
		self.current = self.current.other();
		self.explicit = true;
		self.current
	}

	/// Reacts to an OS preference change.
	///
	/// Followed only while no explicit choice was made; the first applied
	/// OS change is itself persisted and therefore becomes explicit.
	pub fn on_system_change(&mut self, dark: bool) -> Option<Theme> {
		if self.explicit {
			return None;
		}
		self.current = if dark { Theme::Dark } else { Theme::Light };
		self.explicit = true;
		Some(self.current)
	}

	/// The active theme.
	pub fn current(&self) -> Theme {
		self.current
	}
}

/// Markup of the floating toggle control.
pub fn toggle_button_view() -> Page {
	(
		PageElement::new("span")
			.attr("class", "theme-toggle-icon light-icon")
			.child(PageElement::new("ion-icon").attr("name", "sunny-outline")),
		PageElement::new("span")
			.attr("class", "theme-toggle-icon dark-icon")
			.child(PageElement::new("ion-icon").attr("name", "moon-outline")),
	)
		.into_page()
}

#[cfg(target_arch = "wasm32")]
pub use wasm::ThemeSwitcher;

#[cfg(target_arch = "wasm32")]
mod wasm {
	use std::cell::RefCell;
	use std::rc::Rc;

	use wasm_bindgen::JsCast;
	use wasm_bindgen::closure::Closure;
	use web_sys::EventTarget;

	use vitrine_core::dom::{self, EventHandle};
	use vitrine_core::{Callback, EventType, warn_log};
	use vitrine_utils::storage;

	use super::{
		DARK_META_COLOR, LIGHT_META_COLOR, THEME_STORAGE_KEY, Theme, ThemeState,
		toggle_button_view,
	};

	type SharedCallback = Rc<RefCell<Option<Callback<Theme>>>>;

	/// Browser-side theme controller.
	///
	/// Constructed explicitly by whoever boots the page and kept alive for
	/// the page's lifetime; it has no coupling to the page controllers.
	pub struct ThemeSwitcher {
		state: Rc<RefCell<ThemeState>>,
		on_change: SharedCallback,
		#[allow(dead_code)] // handles are held for their Drop side effect
		handles: Vec<EventHandle>,
	}

	impl ThemeSwitcher {
		/// Resolves and applies the initial theme, subscribes to OS
		/// preference changes, and installs the floating toggle control
		/// (idempotent — an existing control is left alone).
		pub fn init() -> Self {
			let saved = storage::get_raw(THEME_STORAGE_KEY).and_then(|value| value.parse().ok());
			let system_dark = media_query_dark()
				.map(|query| query.matches())
				.unwrap_or(false);
			let state = Rc::new(RefCell::new(ThemeState::new(saved, system_dark)));
			let on_change: SharedCallback = Rc::new(RefCell::new(None));

			apply_theme(state.borrow().current());

			let mut handles = Vec::new();
			subscribe_to_system(&state, &on_change, &mut handles);
			create_toggle_button(&state, &on_change, &mut handles);

			Self {
				state,
				on_change,
				handles,
			}
		}

		/// Registers the change callback.
		pub fn on_change(&self, callback: Callback<Theme>) {
			*self.on_change.borrow_mut() = Some(callback);
		}

		/// Applies a theme by value; anything outside `light`/`dark` warns
		/// and changes nothing.
		pub fn set_theme(&self, value: &str) {
			commit(&self.state, &self.on_change, value);
		}

		/// Flips between light and dark.
		pub fn toggle(&self) {
			let next = self.state.borrow().current().other();
			commit(&self.state, &self.on_change, next.as_str());
		}

		/// The active theme.
		pub fn current(&self) -> Theme {
			self.state.borrow().current()
		}

		/// Whether the dark theme is active.
		pub fn is_dark(&self) -> bool {
			self.current() == Theme::Dark
		}

		/// Whether the light theme is active.
		pub fn is_light(&self) -> bool {
			self.current() == Theme::Light
		}
	}

	/// Validates, applies, persists and notifies in one step.
	fn commit(state: &Rc<RefCell<ThemeState>>, on_change: &SharedCallback, value: &str) {
		let applied = state.borrow_mut().set(value);
		match applied {
			Ok(theme) => {
				apply_theme(theme);
				storage::set_raw(THEME_STORAGE_KEY, theme.as_str());
				let callback = on_change.borrow().clone();
				if let Some(callback) = callback {
					callback.call(theme);
				}
			}
			Err(err) => warn_log!("theme not applied: {err}"),
		}
	}

	fn apply_theme(theme: Theme) {
		let Ok(doc) = dom::document() else {
			return;
		};
		let Some(root) = doc.document_element() else {
			return;
		};

		// Suppress CSS transitions for the duration of the swap
		let _ = root.class_list().add_1("theme-switching");
		match theme {
			Theme::Dark => {
				let _ = root.set_attribute("data-theme", "dark");
			}
			Theme::Light => {
				let _ = root.remove_attribute("data-theme");
			}
		}
		swap_stylesheet(theme);
		release_transition_guard(&root);
		update_meta_color(theme);
		update_toggle_buttons(theme);
	}

	/// Replaces the themed stylesheet link with one for the new theme.
	fn swap_stylesheet(theme: Theme) {
		let Ok(doc) = dom::document() else {
			return;
		};
		if let Some(previous) = dom::query("link[data-theme-css]") {
			previous.remove();
		}
		let Some(head) = doc.head() else {
			return;
		};
		let Ok(link) = doc.create_element("link") else {
			return;
		};
		let name = theme.stylesheet();
		let _ = link.set_attribute("rel", "stylesheet");
		let _ = link.set_attribute("href", &format!("themes/{name}.css"));
		let _ = link.set_attribute("data-theme-css", name);
		let _ = head.append_child(&link);
	}

	/// Removes the transition guard class on the next animation frame.
	fn release_transition_guard(root: &web_sys::Element) {
		let root = root.clone();
		let frame = Closure::once_into_js(move || {
			let _ = root.class_list().remove_1("theme-switching");
		});
		if let Ok(win) = dom::window() {
			let _ = win.request_animation_frame(frame.unchecked_ref());
		}
	}

	fn update_meta_color(theme: Theme) {
		let Ok(doc) = dom::document() else {
			return;
		};
		let meta = match dom::query("meta[name=\"theme-color\"]") {
			Some(meta) => meta,
			None => {
				let Ok(meta) = doc.create_element("meta") else {
					return;
				};
				let _ = meta.set_attribute("name", "theme-color");
				if let Some(head) = doc.head() {
					let _ = head.append_child(&meta);
				}
				meta
			}
		};
		let color = match theme {
			Theme::Dark => DARK_META_COLOR,
			Theme::Light => LIGHT_META_COLOR,
		};
		let _ = meta.set_attribute("content", color);
	}

	fn update_toggle_buttons(theme: Theme) {
		for button in dom::query_all(".theme-toggle-btn") {
			dom::toggle_class(&button, "dark-active", theme == Theme::Dark);
		}
	}

	fn media_query_dark() -> Option<web_sys::MediaQueryList> {
		web_sys::window()?
			.match_media("(prefers-color-scheme: dark)")
			.ok()
			.flatten()
	}

	/// Follows OS preference changes while no explicit preference is
	/// stored. The stored-preference check happens at event time, matching
	/// the persistence rules of `commit`.
	fn subscribe_to_system(
		state: &Rc<RefCell<ThemeState>>,
		on_change: &SharedCallback,
		handles: &mut Vec<EventHandle>,
	) {
		let Some(query) = media_query_dark() else {
			return;
		};
		let target: EventTarget = query.into();
		let state = Rc::clone(state);
		let on_change = Rc::clone(on_change);
		let listener = dom::listen(&target, EventType::Change, move |event| {
			if storage::get_raw(THEME_STORAGE_KEY).is_some() {
				return;
			}
			let dark = event
				.dyn_ref::<web_sys::MediaQueryListEvent>()
				.is_some_and(|event| event.matches());
			let theme = if dark { Theme::Dark } else { Theme::Light };
			commit(&state, &on_change, theme.as_str());
		});
		if let Ok(handle) = listener {
			handles.push(handle);
		}
	}

	/// Installs the floating toggle control once and appends it to the
	/// header container when present.
	fn create_toggle_button(
		state: &Rc<RefCell<ThemeState>>,
		on_change: &SharedCallback,
		handles: &mut Vec<EventHandle>,
	) {
		if dom::query(".theme-toggle-btn").is_some() {
			return;
		}
		let Ok(doc) = dom::document() else {
			return;
		};
		let Ok(button) = doc.create_element("button") else {
			return;
		};
		button.set_class_name("theme-toggle-btn");
		let _ = button.set_attribute("aria-label", "Alternar tema");
		button.set_inner_html(&toggle_button_view().render_to_string());

		let state = Rc::clone(state);
		let on_change = Rc::clone(on_change);
		let listener = dom::listen(button.as_ref(), EventType::Click, move |_event| {
			let next = state.borrow().current().other();
			commit(&state, &on_change, next.as_str());
		});
		if let Ok(handle) = listener {
			handles.push(handle);
		}

		if let Some(header) = dom::query(".site-header .container") {
			let _ = header.append_child(&button);
		}
	}
}
