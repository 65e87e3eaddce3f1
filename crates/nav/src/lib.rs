//! Section navigation for a single-page site.
//!
//! [`NavigationController`] keeps exactly one navigation link marked active
//! for the section currently in view and scrolls smoothly to a section when a
//! link is chosen. It holds no navigation state between events: every call
//! re-reads geometry from the [`PageSurface`](folio_traits::PageSurface).
//!
//! ## Module Structure
//!
//! - [`config`] - tunable thresholds and offsets, with named defaults
//! - [`spy`] - scroll offset to active section mapping
//! - [`flags`] - body-level presentation flags
//! - [`controller`] - the controller itself
//! - [`stepper`] - "next section" button and back-to-top helpers
//! - [`lock`] - optional upward scroll lock

pub mod config;
pub mod controller;
pub mod error;
pub mod flags;
pub mod lock;
pub mod spy;
pub mod stepper;

pub use config::{NavConfig, ScrollLockConfig, StepperConfig};
pub use controller::NavigationController;
pub use error::NavError;
pub use flags::{PresentationFlag, PresentationFlags};
pub use lock::{LockVerdict, ScrollLock};
pub use spy::{ActiveSection, active_section};
