//! Platform-agnostic behavior of the portfolio page.
//!
//! [`Page`] bundles the navigation controller with the scroll-driven page
//! handlers and runs each of them behind its own [`guard`], so a fault in
//! one never stops the others. The browser bindings in `folio-wasm` drive a
//! `Page` from DOM events; tests drive it against an in-memory surface.

pub mod config;
pub mod error;
pub mod guard;
pub mod page;

pub use config::{SelectorConfig, SiteConfig};
pub use error::FolioError;
pub use guard::guard;
pub use page::{Page, ScrollReport};

pub use folio_nav as nav;
pub use folio_traits as traits;
pub use folio_types as types;
pub use folio_widgets as widgets;
