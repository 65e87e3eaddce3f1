//! PageSurface trait for abstracting the live document.
//!
//! Navigation logic reads layout and writes a handful of presentation bits
//! through this trait, so it can run against the browser DOM or against an
//! in-memory page in tests.

use folio_types::{HeaderBox, NavLink, SectionBox};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::rc::Rc;
use thiserror::Error;

/// Error type for document access.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Element not found: {0}")]
    NotFound(String),

    #[error("Navigation link index {index} out of range ({len} links)")]
    LinkOutOfRange { index: usize, len: usize },

    #[error("Platform call '{call}' failed: {message}")]
    Platform { call: &'static str, message: String },
}

impl SurfaceError {
    pub fn platform(call: &'static str, message: impl Into<String>) -> Self {
        SurfaceError::Platform {
            call,
            message: message.into(),
        }
    }
}

/// How a programmatic scroll should move the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollMode {
    /// Browser-native kinetic scrolling.
    #[default]
    Smooth,
    Instant,
}

/// A live view over the page.
///
/// Every read returns a fresh measurement. Implementations never cache
/// geometry between calls.
///
/// # Implementations
///
/// - `DomSurface` (folio-wasm): backed by `web-sys`
/// - `InMemorySurface`: a scripted page for tests
pub trait PageSurface: Debug {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Total rendered height of the document body.
    fn document_height(&self) -> f64;

    /// The fixed header, or `None` when the page has no header element.
    fn header(&self) -> Option<HeaderBox>;

    /// Mark the header compact or not.
    fn set_header_compact(&self, compact: bool) -> Result<(), SurfaceError>;

    /// All tracked sections in document order. The home element, when the
    /// page has one, is the first entry.
    fn sections(&self) -> Vec<SectionBox>;

    /// Document-relative top of the element with `id`.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// All navigation links in document order.
    fn nav_links(&self) -> Vec<NavLink>;

    /// Set or clear the active flag on the link at `index`.
    fn set_link_active(&self, index: usize, active: bool) -> Result<(), SurfaceError>;

    /// Start scrolling the viewport to `top`.
    ///
    /// Returns as soon as the scroll has been requested; smooth scrolling
    /// completes asynchronously.
    fn scroll_to(&self, top: f64, mode: ScrollMode) -> Result<(), SurfaceError>;

    /// Toggle a class on the document body.
    fn set_body_class(&self, class: &str, on: bool) -> Result<(), SurfaceError>;

    /// The location fragment including the leading `#`, or empty.
    fn location_hash(&self) -> String;

    /// Returns a human-readable name for this surface (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Shared surfaces let several handlers read the same page.
impl<T: PageSurface + ?Sized> PageSurface for Rc<T> {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn document_height(&self) -> f64 {
        (**self).document_height()
    }

    fn header(&self) -> Option<HeaderBox> {
        (**self).header()
    }

    fn set_header_compact(&self, compact: bool) -> Result<(), SurfaceError> {
        (**self).set_header_compact(compact)
    }

    fn sections(&self) -> Vec<SectionBox> {
        (**self).sections()
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        (**self).element_top(id)
    }

    fn nav_links(&self) -> Vec<NavLink> {
        (**self).nav_links()
    }

    fn set_link_active(&self, index: usize, active: bool) -> Result<(), SurfaceError> {
        (**self).set_link_active(index, active)
    }

    fn scroll_to(&self, top: f64, mode: ScrollMode) -> Result<(), SurfaceError> {
        (**self).scroll_to(top, mode)
    }

    fn set_body_class(&self, class: &str, on: bool) -> Result<(), SurfaceError> {
        (**self).set_body_class(class, on)
    }

    fn location_hash(&self) -> String {
        (**self).location_hash()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[derive(Debug, Default)]
struct PageState {
    scroll: f64,
    viewport: f64,
    document: f64,
    header: Option<HeaderBox>,
    sections: Vec<SectionBox>,
    elements: HashMap<String, f64>,
    links: Vec<NavLink>,
    body_classes: BTreeSet<String>,
    hash: String,
    scroll_requests: Vec<(f64, ScrollMode)>,
}

/// An in-memory page.
///
/// Scroll requests land instantly and are recorded so tests can assert on
/// them.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    state: RefCell<PageState>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(self, height: f64) -> Self {
        self.state.borrow_mut().viewport = height;
        self
    }

    pub fn with_document_height(self, height: f64) -> Self {
        self.state.borrow_mut().document = height;
        self
    }

    /// Adds a fixed header registered under `id` at document top 0. It is
    /// not listed in `sections()`; add it with [`Self::with_section`] to
    /// track the hero.
    pub fn with_header(self, id: &str, height: f64) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.header = Some(HeaderBox::new(height, false));
            state.elements.insert(id.to_string(), 0.0);
        }
        self
    }

    pub fn with_section(self, id: &str, top: f64, height: f64) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.sections.push(SectionBox::new(id, top, height));
            state.document = state.document.max(top + height);
        }
        self
    }

    /// Adds an element that is not a tracked section.
    pub fn with_element(self, id: &str, top: f64) -> Self {
        self.state.borrow_mut().elements.insert(id.to_string(), top);
        self
    }

    pub fn with_link(self, href: &str) -> Self {
        self.state.borrow_mut().links.push(NavLink::new(href));
        self
    }

    pub fn with_hash(self, hash: &str) -> Self {
        self.state.borrow_mut().hash = hash.to_string();
        self
    }

    /// Moves the viewport as if the user scrolled.
    pub fn set_scroll(&self, offset: f64) {
        self.state.borrow_mut().scroll = offset;
    }

    /// Changes the rendered header height, as a layout change would.
    pub fn set_header_height(&self, height: f64) {
        if let Some(header) = self.state.borrow_mut().header.as_mut() {
            header.height = height;
        }
    }

    pub fn active_links(&self) -> Vec<usize> {
        self.state
            .borrow()
            .links
            .iter()
            .enumerate()
            .filter(|(_, link)| link.active)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.state.borrow().body_classes.contains(class)
    }

    pub fn scroll_requests(&self) -> Vec<(f64, ScrollMode)> {
        self.state.borrow().scroll_requests.clone()
    }
}

impl PageSurface for InMemorySurface {
    fn scroll_offset(&self) -> f64 {
        self.state.borrow().scroll
    }

    fn viewport_height(&self) -> f64 {
        self.state.borrow().viewport
    }

    fn document_height(&self) -> f64 {
        self.state.borrow().document
    }

    fn header(&self) -> Option<HeaderBox> {
        self.state.borrow().header
    }

    fn set_header_compact(&self, compact: bool) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        let header = state
            .header
            .as_mut()
            .ok_or_else(|| SurfaceError::NotFound("header".to_string()))?;
        header.compact = compact;
        Ok(())
    }

    fn sections(&self) -> Vec<SectionBox> {
        self.state.borrow().sections.clone()
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let state = self.state.borrow();
        state
            .sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.top)
            .or_else(|| state.elements.get(id).copied())
    }

    fn nav_links(&self) -> Vec<NavLink> {
        self.state.borrow().links.clone()
    }

    fn set_link_active(&self, index: usize, active: bool) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        let len = state.links.len();
        let link = state
            .links
            .get_mut(index)
            .ok_or(SurfaceError::LinkOutOfRange { index, len })?;
        link.active = active;
        Ok(())
    }

    fn scroll_to(&self, top: f64, mode: ScrollMode) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        state.scroll = top;
        state.scroll_requests.push((top, mode));
        Ok(())
    }

    fn set_body_class(&self, class: &str, on: bool) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        if on {
            state.body_classes.insert(class.to_string());
        } else {
            state.body_classes.remove(class);
        }
        Ok(())
    }

    fn location_hash(&self) -> String {
        self.state.borrow().hash.clone()
    }

    fn name(&self) -> &'static str {
        "InMemorySurface"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_requests_are_recorded_and_applied() {
        let surface = InMemorySurface::new().with_section("about", 800.0, 700.0);
        surface.scroll_to(695.0, ScrollMode::Smooth).unwrap();
        assert_eq!(surface.scroll_offset(), 695.0);
        assert_eq!(surface.scroll_requests(), vec![(695.0, ScrollMode::Smooth)]);
    }

    #[test]
    fn test_element_top_prefers_sections() {
        let surface = InMemorySurface::new()
            .with_header("header", 70.0)
            .with_section("about", 800.0, 700.0)
            .with_element("about", 10.0);
        assert_eq!(surface.element_top("about"), Some(800.0));
        assert_eq!(surface.element_top("header"), Some(0.0));
        assert_eq!(surface.element_top("missing"), None);
    }

    #[test]
    fn test_link_index_out_of_range() {
        let surface = InMemorySurface::new().with_link("#about");
        assert_eq!(
            surface.set_link_active(3, true),
            Err(SurfaceError::LinkOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_compact_without_header_is_not_found() {
        let surface = InMemorySurface::new();
        assert!(matches!(
            surface.set_header_compact(true),
            Err(SurfaceError::NotFound(_))
        ));
    }
}
