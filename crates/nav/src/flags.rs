//! Body-level presentation flags.
//!
//! These exist only for stylesheet consumption. The controller is the single
//! writer; the flag set and its transitions are listed here rather than
//! spread over event handlers.

/// A boolean toggled as a class on the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationFlag {
    /// The visitor has left the home pseudo-section.
    HeroHidden,
    /// A programmatic smooth scroll is in flight.
    Scrolling,
}

impl PresentationFlag {
    pub const ALL: [PresentationFlag; 2] =
        [PresentationFlag::HeroHidden, PresentationFlag::Scrolling];

    /// The body class that mirrors this flag.
    pub fn class(self) -> &'static str {
        match self {
            PresentationFlag::HeroHidden => "hide-hero",
            PresentationFlag::Scrolling => "is-scrolling",
        }
    }
}

/// Current value of every [`PresentationFlag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationFlags {
    pub hero_hidden: bool,
    pub scrolling: bool,
}

impl PresentationFlags {
    pub fn get(&self, flag: PresentationFlag) -> bool {
        match flag {
            PresentationFlag::HeroHidden => self.hero_hidden,
            PresentationFlag::Scrolling => self.scrolling,
        }
    }

    /// Sets `flag` and reports whether its value changed.
    pub fn set(&mut self, flag: PresentationFlag, on: bool) -> bool {
        let slot = match flag {
            PresentationFlag::HeroHidden => &mut self.hero_hidden,
            PresentationFlag::Scrolling => &mut self.scrolling,
        };
        let changed = *slot != on;
        *slot = on;
        changed
    }
}
