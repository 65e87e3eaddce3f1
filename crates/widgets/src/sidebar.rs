//! Mobile sidebar toggle.

/// Body class present while the sidebar is open.
pub const SIDEBAR_BODY_CLASS: &str = "mobile-nav-active";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the sidebar and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation link was chosen. Returns true if this closed the sidebar.
    pub fn on_nav_link(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
