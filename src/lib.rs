//! # Vitrine
//!
//! Client-side rendering layer for a real-estate marketing site, compiled
//! to WebAssembly. Reusable components (header, hero, product cards, theme
//! switcher) stamp markup out of JSON data; two page controllers (listing
//! and product detail) fetch that data, compose the components and handle
//! the page-level UI glue — mobile nav, theme, WhatsApp deep links, smooth
//! scroll, lazy images.
//!
//! This crate is a facade: the implementation lives in the workspace
//! members, re-exported here under short module names.
//!
//! - [`core`]: view tree, component contract, callbacks, DOM layer, logging
//! - [`types`]: the JSON data model
//! - [`utils`]: fetching, URL state, storage, deep links, formatting
//! - [`components`]: the four UI components
//! - [`app`]: the page controllers and WASM entry points
//!
//! ## Booting a page
//!
//! Each hosted HTML page loads the WASM module and calls its entry point:
//!
//! ```ignore
//! import init, { boot_landing } from "./pkg/vitrine_app.js";
//! await init();
//! boot_landing();
//! ```

pub use vitrine_app as app;
pub use vitrine_components as components;
pub use vitrine_core as core;
pub use vitrine_types as types;
pub use vitrine_utils as utils;
