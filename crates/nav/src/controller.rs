//! The navigation controller.
//!
//! Holds configuration and the mirrored presentation flags, nothing else:
//! which link is active and where the visitor is are re-derived from the
//! page on every call. Each scroll event costs one pass over the sections.

use crate::config::NavConfig;
use crate::error::NavError;
use crate::flags::{PresentationFlag, PresentationFlags};
use crate::spy::{ActiveSection, active_section};
use folio_traits::{PageSurface, ScrollMode};
use folio_types::Anchor;

#[derive(Debug)]
pub struct NavigationController<S: PageSurface> {
    surface: S,
    config: NavConfig,
    flags: PresentationFlags,
}

impl<S: PageSurface> NavigationController<S> {
    /// Creates a controller without checking the page.
    pub fn new(surface: S, config: NavConfig) -> Self {
        Self {
            surface,
            config,
            flags: PresentationFlags::default(),
        }
    }

    /// Creates a controller for a page that has a header and at least one
    /// navigation link, and clears any stale presentation classes.
    ///
    /// # Errors
    ///
    /// Returns `NavError::MissingCollaborator` when either is absent, so
    /// the caller can skip navigation without affecting other features.
    pub fn attach(surface: S, config: NavConfig) -> Result<Self, NavError> {
        if surface.header().is_none() {
            return Err(NavError::MissingCollaborator(format!(
                "header '#{}'",
                config.home_id
            )));
        }
        if surface.nav_links().is_empty() {
            return Err(NavError::MissingCollaborator(
                "navigation links".to_string(),
            ));
        }

        let controller = Self::new(surface, config);
        for flag in PresentationFlag::ALL {
            controller.surface.set_body_class(flag.class(), false)?;
        }
        log::info!(
            "Navigation attached to {} ({} links, {} sections)",
            controller.surface.name(),
            controller.surface.nav_links().len(),
            controller.surface.sections().len()
        );
        Ok(controller)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn flags(&self) -> PresentationFlags {
        self.flags
    }

    /// The section in view at `offset`, against a fresh layout snapshot.
    pub fn compute_active_section(&self, offset: f64) -> Option<ActiveSection> {
        active_section(offset, &self.surface.sections(), &self.config)
    }

    /// Marks the link for `active` and clears every other link.
    ///
    /// At most one link ends up active: when several links share a target,
    /// only the first is marked. Returns the index of the marked link, or
    /// `None` when nothing matched.
    pub fn apply_active_state(
        &self,
        active: Option<&ActiveSection>,
    ) -> Result<Option<usize>, NavError> {
        let target = active.map(|a| Anchor::from(a.id(&self.config.home_id)));
        let links = self.surface.nav_links();

        let chosen = target.as_ref().and_then(|anchor| {
            links
                .iter()
                .position(|link| anchor.matches_href(&link.href))
        });
        if let (Some(anchor), None) = (&target, chosen) {
            log::debug!("No navigation link targets {}", anchor);
        }

        for index in 0..links.len() {
            self.surface
                .set_link_active(index, Some(index) == chosen)?;
        }
        Ok(chosen)
    }

    /// Recomputes the active link from the current scroll offset.
    pub fn on_scroll(&self) -> Result<Option<ActiveSection>, NavError> {
        let offset = self.surface.scroll_offset();
        let active = self.compute_active_section(offset);
        self.apply_active_state(active.as_ref())?;
        Ok(active)
    }

    /// Scroll offset that brings `anchor` into view below the header.
    ///
    /// The home pseudo-section always maps to 0. Anything else lands
    /// `header height + margin` above the element's top, where the margin
    /// can be overridden per section. Offsets never go below 0. The header's
    /// compact state enters only through its measured height.
    pub fn scroll_target(&self, anchor: &Anchor, element_top: f64) -> f64 {
        if anchor.id() == self.config.home_id {
            return 0.0;
        }
        let header_height = self.surface.header().map_or(0.0, |h| h.height);
        let clearance = header_height + self.config.margin_for(anchor.id());
        (element_top - clearance).max(0.0)
    }

    /// Smoothly scrolls to the section named by `href` (e.g. `#about`).
    ///
    /// Hrefs that are not same-page anchors, or whose element does not
    /// exist on this page, are ignored. Returns the requested offset.
    /// Completion of the scroll animation is not tracked here; see
    /// [`Self::scroll_settled`].
    pub fn navigate_to(&mut self, href: &str) -> Result<Option<f64>, NavError> {
        let anchor = match Anchor::parse(href) {
            Ok(anchor) => anchor,
            Err(e) => {
                log::debug!("Ignoring navigation to '{}': {}", href, e);
                return Ok(None);
            }
        };
        let Some(element_top) = self.surface.element_top(anchor.id()) else {
            log::debug!("Ignoring navigation to {}: no such element", anchor);
            return Ok(None);
        };

        let target = self.scroll_target(&anchor, element_top);
        self.surface.scroll_to(target, ScrollMode::Smooth)?;

        let leaving_home = anchor.id() != self.config.home_id;
        self.set_flag(PresentationFlag::HeroHidden, leaving_home)?;
        self.set_flag(PresentationFlag::Scrolling, true)?;
        Ok(Some(target))
    }

    /// Navigates to the location fragment, if any. Used once on load.
    pub fn restore_from_hash(&mut self) -> Result<Option<f64>, NavError> {
        let hash = self.surface.location_hash();
        if hash.is_empty() {
            return Ok(None);
        }
        self.navigate_to(&hash)
    }

    /// Clears the in-flight flag once a smooth scroll has finished.
    pub fn scroll_settled(&mut self) -> Result<(), NavError> {
        self.set_flag(PresentationFlag::Scrolling, false)
    }

    /// Reacts to the hero's visible fraction changing.
    ///
    /// Fully scrolled out hides it. It is shown again only when mostly
    /// visible and the location does not point at another section.
    pub fn on_hero_visibility(&mut self, ratio: f64, intersecting: bool) -> Result<(), NavError> {
        if !intersecting {
            return self.set_flag(PresentationFlag::HeroHidden, true);
        }
        let hash = self.surface.location_hash();
        let home = Anchor::from(self.config.home_id.as_str());
        let at_home = hash.is_empty() || home.matches_href(&hash);
        if at_home && ratio > self.config.hero_visible_ratio {
            self.set_flag(PresentationFlag::HeroHidden, false)?;
        }
        Ok(())
    }

    fn set_flag(&mut self, flag: PresentationFlag, on: bool) -> Result<(), NavError> {
        if self.flags.set(flag, on) {
            self.surface.set_body_class(flag.class(), on)?;
        }
        Ok(())
    }
}
