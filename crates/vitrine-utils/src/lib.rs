//! Shared helpers for Vitrine pages.
//!
//! Split by target: data plumbing that only makes sense in a browser
//! (fetching, URL state, storage, meta tags, timers) is wasm32-only, while
//! the pure pieces — the all-or-nothing load gate, deep-link generation,
//! validation, text formatting — compile everywhere and are tested natively.

pub mod data;
pub mod text;
pub mod validate;
pub mod whatsapp;

#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod seo;
#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod timing;
#[cfg(target_arch = "wasm32")]
pub mod urlq;

pub use data::{DataError, SiteData, ensure_all};
pub use validate::{is_valid_email, is_valid_phone};
pub use whatsapp::{PRODUCT_NAME_TOKEN, whatsapp_link};
