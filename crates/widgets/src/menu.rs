//! Right-click context menu.
//!
//! The menu opens at the pointer and remembers the text selected at that
//! moment. Copying is offered only when that selection is non-empty.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Refresh,
    GoBack,
    ScrollTop,
    Copy,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Refresh,
        MenuAction::GoBack,
        MenuAction::ScrollTop,
        MenuAction::Copy,
    ];

    /// Id of the menu item element for this action.
    pub fn element_id(self) -> &'static str {
        match self {
            MenuAction::Refresh => "refresh",
            MenuAction::GoBack => "go-back",
            MenuAction::ScrollTop => "scroll-top",
            MenuAction::Copy => "copy-text",
        }
    }
}

/// What the page should do after an item is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Reload,
    HistoryBack,
    ScrollToTop,
    CopyText(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenu {
    open: bool,
    position: (f64, f64),
    selection: String,
}

impl ContextMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Pointer position the menu was opened at, in client coordinates.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn copy_enabled(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn open_at(&mut self, x: f64, y: f64, selection: &str) {
        self.open = true;
        self.position = (x, y);
        self.selection = selection.trim().to_string();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Closes the menu and returns the command for `action`. A disabled
    /// copy yields no command and leaves the menu open.
    pub fn choose(&mut self, action: MenuAction) -> Option<MenuCommand> {
        let command = match action {
            MenuAction::Refresh => MenuCommand::Reload,
            MenuAction::GoBack => MenuCommand::HistoryBack,
            MenuAction::ScrollTop => MenuCommand::ScrollToTop,
            MenuAction::Copy if self.copy_enabled() => {
                MenuCommand::CopyText(self.selection.clone())
            }
            MenuAction::Copy => return None,
        };
        self.close();
        Some(command)
    }
}
