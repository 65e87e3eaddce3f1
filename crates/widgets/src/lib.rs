//! Page handlers that run independently of navigation.
//!
//! Each one is a small piece of state plus the rules for moving it. None
//! of them reads or writes navigation state, and a failure in one never
//! affects another.

pub mod clock;
pub mod contact;
pub mod error;
pub mod header;
pub mod menu;
pub mod sidebar;
pub mod theme;

pub use clock::{ClockConfig, ClockReading, ZoneClock, age_on, emoji_for_hour};
pub use contact::{ContactConfig, ContactForm, SubmitState};
pub use error::WidgetError;
pub use header::CompactHeader;
pub use menu::{ContextMenu, MenuAction, MenuCommand};
pub use sidebar::Sidebar;
pub use theme::{Theme, ThemeConfig, ThemeCycler};
