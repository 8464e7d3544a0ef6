//! Core rendering substrate for Vitrine.
//!
//! Vitrine components never write HTML strings directly into the document.
//! They build a [`Page`] view tree — a plain data structure that renders to a
//! markup string on any target — and hand it to the WASM-only [`dom`] layer
//! for injection and event binding. Keeping the two steps apart means every
//! piece of markup in the project is unit-testable without a browser.
//!
//! Modules:
//!
//! - [`page`]: the `Page`/`PageElement` view tree and builder API
//! - [`component`]: the [`Component`] trait implemented by all UI components
//! - [`callback`]: typed, cheaply cloneable callbacks used for
//!   component-to-controller messaging
//! - [`dom`] (wasm32 only): document queries, visibility helpers, listener
//!   handles, the shared body scroll lock, and scroll plumbing
//! - [`logging`]: console logging macros that compile to no-ops in release
//!   builds

pub mod callback;
pub mod component;
pub mod error;
pub mod logging;
pub mod page;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use callback::Callback;
pub use component::Component;
pub use error::MountError;
pub use page::event::EventType;
pub use page::{IntoPage, Page, PageElement, emphasized};
