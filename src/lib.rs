//! Scroll-spy navigation and page widgets for a single-page portfolio.
//!
//! The behavior lives in the workspace crates; this crate re-exports them
//! under one name for native consumers and tests. Browser builds use
//! `folio-wasm` directly.
//!
//! ```
//! use folio::traits::InMemorySurface;
//! use folio::{Page, SiteConfig};
//!
//! let surface = InMemorySurface::new()
//!     .with_viewport(900.0)
//!     .with_header("header", 70.0)
//!     .with_section("about", 800.0, 700.0)
//!     .with_link("#header")
//!     .with_link("#about");
//! let page = Page::mount(surface, SiteConfig::default()).unwrap();
//!
//! page.surface().set_scroll(900.0);
//! let report = page.on_scroll();
//! assert_eq!(report.active.map(|a| a.id("header").to_string()), Some("about".into()));
//! ```

pub use folio_core::*;
