//! The page: navigation plus the scroll-driven handlers that share its
//! surface.

use crate::config::SiteConfig;
use crate::error::FolioError;
use crate::guard::guard;
use folio_nav::stepper::{back_to_top_visible, next_stop, should_reveal, stepper_visible};
use folio_nav::{ActiveSection, LockVerdict, NavError, NavigationController, ScrollLock};
use folio_traits::{PageSurface, ScrollMode};
use folio_widgets::CompactHeader;
use std::rc::Rc;

/// What one scroll tick decided.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollReport {
    /// `None` if the compact header handler failed.
    pub compact: Option<bool>,
    pub active: Option<ActiveSection>,
    pub back_to_top: bool,
    pub stepper: bool,
}

#[derive(Debug)]
pub struct Page<S: PageSurface> {
    surface: Rc<S>,
    config: SiteConfig,
    nav: Option<NavigationController<Rc<S>>>,
    header: CompactHeader,
    lock: ScrollLock,
}

impl<S: PageSurface> Page<S> {
    /// Validates `config` and attaches every handler the page supports.
    ///
    /// A page without a header or navigation links still mounts; only
    /// scroll-spy and section navigation are skipped.
    pub fn mount(surface: S, config: SiteConfig) -> Result<Self, FolioError> {
        config.validate()?;
        let surface = Rc::new(surface);

        let nav = match NavigationController::attach(Rc::clone(&surface), config.nav.clone()) {
            Ok(nav) => Some(nav),
            Err(NavError::MissingCollaborator(what)) => {
                log::info!("Section navigation disabled: missing {}", what);
                None
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            header: CompactHeader::new(config.header.compact_threshold),
            lock: ScrollLock::new(config.nav.scroll_lock.clone()),
            surface,
            config,
            nav,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn nav(&self) -> Option<&NavigationController<Rc<S>>> {
        self.nav.as_ref()
    }

    /// Runs every scroll handler once.
    ///
    /// The header is compacted first so that scroll-spy measures the layout
    /// the visitor actually sees.
    pub fn on_scroll(&self) -> ScrollReport {
        let compact = guard("Compact header", || self.header.update(&*self.surface));
        let active = self
            .nav
            .as_ref()
            .and_then(|nav| guard("ScrollSpy", || nav.on_scroll()))
            .flatten();

        let offset = self.surface.scroll_offset();
        let nav = &self.config.nav;
        ScrollReport {
            compact,
            active,
            back_to_top: back_to_top_visible(offset, nav.back_to_top_threshold),
            stepper: stepper_visible(
                offset,
                self.surface.viewport_height(),
                self.surface.document_height(),
                &nav.stepper,
            ),
        }
    }

    /// A navigation link was clicked.
    pub fn on_nav_click(&mut self, href: &str) -> Option<f64> {
        let nav = self.nav.as_mut()?;
        guard("Navigation", || nav.navigate_to(href)).flatten()
    }

    /// Honors the location fragment once layout has settled after load.
    pub fn restore_from_hash(&mut self) -> Option<f64> {
        let nav = self.nav.as_mut()?;
        guard("Hash navigation", || nav.restore_from_hash()).flatten()
    }

    pub fn scroll_settled(&mut self) {
        if let Some(nav) = self.nav.as_mut() {
            guard("Scroll settle", || nav.scroll_settled());
        }
    }

    pub fn on_hero_visibility(&mut self, ratio: f64, intersecting: bool) {
        if let Some(nav) = self.nav.as_mut() {
            guard("Hero visibility", || nav.on_hero_visibility(ratio, intersecting));
        }
    }

    /// Moves to the next section stop and returns the requested offset.
    pub fn step_forward(&self) -> Option<f64> {
        let target = next_stop(
            self.surface.scroll_offset(),
            &self.surface.sections(),
            &self.config.nav.stepper,
        );
        guard("Section stepper", || {
            self.surface.scroll_to(target, ScrollMode::Smooth)
        })
        .map(|_| target)
    }

    pub fn scroll_to_top(&self) {
        guard("Scroll to top", || self.surface.scroll_to(0.0, ScrollMode::Smooth));
    }

    /// Whether an element at `viewport_top` should be revealed now.
    pub fn should_reveal(&self, viewport_top: f64) -> bool {
        should_reveal(
            viewport_top,
            self.surface.viewport_height(),
            self.config.nav.reveal_margin,
        )
    }

    /// Scroll lock verdict for a wheel movement. A blocked upward wheel also
    /// snaps back below the lock point.
    pub fn on_wheel(&self, delta_y: f64) -> LockVerdict {
        let Some(section_top) = self.surface.element_top(self.lock.section_id()) else {
            return LockVerdict::Allow;
        };
        let verdict = self
            .lock
            .on_wheel(self.surface.scroll_offset(), section_top, delta_y);
        if let LockVerdict::Block {
            snap_to: Some(target),
        } = verdict
        {
            guard("Scroll lock", || {
                self.surface.scroll_to(target, ScrollMode::Smooth)
            });
        }
        verdict
    }

    /// Scroll lock verdict for a key press.
    pub fn on_key(&self, key: &str) -> LockVerdict {
        match self.surface.element_top(self.lock.section_id()) {
            Some(section_top) => self
                .lock
                .on_key(self.surface.scroll_offset(), section_top, key),
            None => LockVerdict::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::InMemorySurface;

    fn surface() -> InMemorySurface {
        InMemorySurface::new()
            .with_viewport(900.0)
            .with_header("header", 90.0)
            .with_section("about", 800.0, 700.0)
            .with_section("contact", 1600.0, 900.0)
            .with_link("#header")
            .with_link("#about")
            .with_link("#contact")
    }

    #[test]
    fn test_mount_without_nav_keeps_other_handlers() {
        let _ = env_logger::builder().is_test(true).try_init();
        let bare = InMemorySurface::new()
            .with_viewport(900.0)
            .with_document_height(3000.0);
        let page = Page::mount(bare, SiteConfig::default()).unwrap();
        assert!(page.nav().is_none());

        page.surface().set_scroll(400.0);
        let report = page.on_scroll();
        assert_eq!(report.compact, Some(false));
        assert_eq!(report.active, None);
        assert!(report.back_to_top);
        assert!(report.stepper);
    }

    #[test]
    fn test_mount_rejects_invalid_config() {
        let mut config = SiteConfig::default();
        config.nav.header_margin = -1.0;
        assert!(matches!(
            Page::mount(surface(), config),
            Err(FolioError::Config(_))
        ));
    }

    #[test]
    fn test_scroll_tick_compacts_then_spies() {
        let page = Page::mount(surface(), SiteConfig::default()).unwrap();
        page.surface().set_scroll(1000.0);
        let report = page.on_scroll();
        assert_eq!(report.compact, Some(true));
        assert_eq!(report.active, Some(ActiveSection::Section("about".into())));
        assert_eq!(page.surface().active_links(), vec![1]);
        assert!(page.surface().header().unwrap().compact);
    }

    #[test]
    fn test_tall_hero_keeps_home_link_active() {
        let surface = InMemorySurface::new()
            .with_viewport(900.0)
            .with_header("header", 70.0)
            .with_section("header", 0.0, 900.0)
            .with_section("about", 900.0, 700.0)
            .with_link("#header")
            .with_link("#about");
        let page = Page::mount(surface, SiteConfig::default()).unwrap();

        page.surface().set_scroll(400.0);
        let report = page.on_scroll();
        assert_eq!(report.active, Some(ActiveSection::Home));
        assert_eq!(page.surface().active_links(), vec![0]);

        page.surface().set_scroll(820.0);
        page.on_scroll();
        assert_eq!(page.surface().active_links(), vec![1]);
    }

    #[test]
    fn test_step_forward() {
        let page = Page::mount(surface(), SiteConfig::default()).unwrap();
        assert_eq!(page.step_forward(), Some(730.0));
        assert_eq!(page.step_forward(), Some(1530.0));
        assert_eq!(page.step_forward(), Some(1530.0));
    }

    #[test]
    fn test_scroll_lock_disabled_by_default() {
        let page = Page::mount(surface(), SiteConfig::default()).unwrap();
        page.surface().set_scroll(1000.0);
        assert_eq!(page.on_wheel(-40.0), LockVerdict::Allow);
    }

    #[test]
    fn test_scroll_lock_snaps_back() {
        let mut config = SiteConfig::default();
        config.nav.scroll_lock.enabled = true;
        let page = Page::mount(surface(), config).unwrap();
        page.surface().set_scroll(1000.0);

        assert_eq!(
            page.on_wheel(-40.0),
            LockVerdict::Block {
                snap_to: Some(720.0)
            }
        );
        assert_eq!(page.surface().scroll_offset(), 720.0);
        assert_eq!(page.on_key("Home"), LockVerdict::Block { snap_to: None });
    }
}
