//! Page controllers and WASM entry points for Vitrine.
//!
//! Two controllers, one per hosted page: [`landing`] for the listing page
//! and [`product`] for the detail page. Both follow the same lifecycle —
//! show the loading overlay, fan-out-fetch the three JSON documents behind
//! an all-or-nothing gate, compose components, wire page-level interactions,
//! hide the overlay — and surface any fatal condition as a full-screen
//! error view. Everything is constructed explicitly from the [`boot`]
//! entry points; there are no ambient singletons.

pub mod error_view;
pub mod lifecycle;
pub mod resolve;
pub mod sections;

#[cfg(target_arch = "wasm32")]
pub mod boot;
#[cfg(target_arch = "wasm32")]
pub mod interact;
#[cfg(target_arch = "wasm32")]
pub mod landing;
#[cfg(target_arch = "wasm32")]
pub mod product;

pub use lifecycle::Phase;
pub use resolve::{DEFAULT_TEMPLATE, ResolveError, resolve_product, resolve_template};
