//! Live layout snapshots.
//!
//! Both types are measured fresh from the page on every event and are never
//! cached across navigations: the header switching to compact mode moves
//! every section below it.

use serde::{Deserialize, Serialize};

/// A navigable section as laid out right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBox {
    pub id: String,
    /// Document-relative top edge in CSS pixels.
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether `offset` falls inside this section's scroll-spy window,
    /// `[top - lead_in, bottom - lead_in)`.
    pub fn window_contains(&self, offset: f64, lead_in: f64) -> bool {
        offset >= self.top - lead_in && offset < self.bottom() - lead_in
    }
}

/// The fixed header's rendered geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderBox {
    /// Rendered height, measured after any compact styling has applied.
    pub height: f64,
    /// Whether the header is in compact mode. Clearance depends only on
    /// `height`, which already reflects it.
    pub compact: bool,
}

impl HeaderBox {
    pub fn new(height: f64, compact: bool) -> Self {
        Self { height, compact }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_half_open_and_shifted_by_lead_in() {
        let section = SectionBox::new("about", 800.0, 700.0);
        assert!(!section.window_contains(714.0, 85.0));
        assert!(section.window_contains(715.0, 85.0));
        assert!(section.window_contains(1414.0, 85.0));
        assert!(!section.window_contains(1415.0, 85.0));
    }

    #[test]
    fn test_zero_height_section_never_matches() {
        let section = SectionBox::new("empty", 400.0, 0.0);
        assert!(!section.window_contains(315.0, 85.0));
        assert!(!section.window_contains(400.0, 85.0));
    }
}
