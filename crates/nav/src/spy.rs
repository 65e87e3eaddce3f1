//! Scroll-spy: which section is in view for a given scroll offset.

use crate::config::NavConfig;
use folio_types::SectionBox;

/// The section a scroll offset resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveSection {
    /// The top/hero area.
    Home,
    Section(String),
}

impl ActiveSection {
    /// The element id this section is anchored at.
    pub fn id<'a>(&'a self, home_id: &'a str) -> &'a str {
        match self {
            ActiveSection::Home => home_id,
            ActiveSection::Section(id) => id,
        }
    }
}

/// Maps a scroll offset to the active section.
///
/// Offsets below `home_threshold` always resolve to [`ActiveSection::Home`].
/// Otherwise a section matches when the offset lies in
/// `[top - lead_in, top + height - lead_in)`. Windows may overlap, in which
/// case the match whose top is closest to the offset wins and equal
/// distances keep document order. `None` means no link should be active.
pub fn active_section(
    offset: f64,
    sections: &[SectionBox],
    config: &NavConfig,
) -> Option<ActiveSection> {
    if offset < config.home_threshold {
        return Some(ActiveSection::Home);
    }

    sections
        .iter()
        .filter(|s| !s.id.is_empty() && s.window_contains(offset, config.lead_in))
        .min_by(|a, b| {
            let da = (a.top - offset).abs();
            let db = (b.top - offset).abs();
            da.total_cmp(&db)
        })
        .map(|s| {
            if s.id == config.home_id {
                ActiveSection::Home
            } else {
                ActiveSection::Section(s.id.clone())
            }
        })
}
