//! UI components for Vitrine pages.
//!
//! Each component follows the same two-step contract from `vitrine-core`:
//! a pure `render` that turns plain data into a [`vitrine_core::Page`], and
//! a WASM-only `mount` that injects the markup into a container and binds
//! listeners. Components never talk to their page controller through DOM
//! events; the controller registers a [`vitrine_core::Callback`] up front.

pub mod header;
pub mod hero;
pub mod product_card;
pub mod theme;

pub use header::{Brand, Header, HeaderCta, HeaderData};
pub use hero::{CtaClick, Hero};
pub use product_card::{CardMeta, ContactRequest, FilterCriterion, GridStats};
#[cfg(target_arch = "wasm32")]
pub use product_card::ProductGrid;
pub use theme::{THEME_STORAGE_KEY, Theme, ThemeState};
#[cfg(target_arch = "wasm32")]
pub use theme::ThemeSwitcher;
