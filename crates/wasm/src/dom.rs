//! The browser DOM as a [`PageSurface`].
//!
//! Every call measures the live layout; nothing is cached.

use crate::error::WebError;
use folio_core::SiteConfig;
use folio_core::traits::{PageSurface, ScrollMode, SurfaceError};
use folio_core::types::{HeaderBox, NavLink, SectionBox};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

#[derive(Debug, Clone)]
pub struct DomSurface {
    window: Window,
    document: Document,
    home_id: String,
    nav_selector: String,
    section_selector: String,
    active_class: String,
    compact_class: String,
}

impl DomSurface {
    pub fn new(window: &Window, config: &SiteConfig) -> Result<Self, WebError> {
        let document = window
            .document()
            .ok_or_else(|| WebError::platform("No document available"))?;
        Ok(Self {
            window: window.clone(),
            document,
            home_id: config.nav.home_id.clone(),
            nav_selector: config.selectors.nav_links.clone(),
            section_selector: config.selectors.sections.clone(),
            active_class: config.selectors.active_class.clone(),
            compact_class: config.selectors.compact_class.clone(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// All elements matching `selector`, in document order. An invalid
    /// selector matches nothing.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        query_all(&self.document, selector)
    }

    fn nav_link_elements(&self) -> Vec<Element> {
        self.query_all(&self.nav_selector)
    }

    /// The home element as a section. It is fixed in place, so its layout
    /// offset is used rather than its scroll-relative rectangle.
    fn home_box(&self) -> Option<SectionBox> {
        let home = self.document.get_element_by_id(&self.home_id)?;
        let home = home.dyn_ref::<HtmlElement>()?;
        Some(SectionBox::new(
            self.home_id.as_str(),
            f64::from(home.offset_top()),
            f64::from(home.offset_height()),
        ))
    }

    fn document_top(&self, element: &Element) -> f64 {
        element.get_bounding_client_rect().top() + self.scroll_offset()
    }
}

/// All elements matching `selector` under `document`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Invalid selector '{}': {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The first element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn toggle_class(
    element: &Element,
    class: &str,
    on: bool,
    call: &'static str,
) -> Result<(), SurfaceError> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|e| SurfaceError::platform(call, format!("{:?}", e)))
}

impl PageSurface for DomSurface {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        self.document
            .body()
            .map_or(0.0, |body| f64::from(body.offset_height()))
    }

    fn header(&self) -> Option<HeaderBox> {
        let header = self.document.get_element_by_id(&self.home_id)?;
        Some(HeaderBox::new(
            header.get_bounding_client_rect().height(),
            header.class_list().contains(&self.compact_class),
        ))
    }

    fn set_header_compact(&self, compact: bool) -> Result<(), SurfaceError> {
        let header = self
            .document
            .get_element_by_id(&self.home_id)
            .ok_or_else(|| SurfaceError::NotFound(format!("#{}", self.home_id)))?;
        toggle_class(&header, &self.compact_class, compact, "header.classList.toggle")
    }

    fn sections(&self) -> Vec<SectionBox> {
        let mut sections: Vec<SectionBox> = self
            .query_all(&self.section_selector)
            .into_iter()
            .map(|section| {
                let rect = section.get_bounding_client_rect();
                SectionBox::new(section.id(), rect.top() + self.scroll_offset(), rect.height())
            })
            .collect();

        if !sections.iter().any(|s| s.id == self.home_id) {
            if let Some(hero) = self.home_box() {
                sections.insert(0, hero);
            }
        }
        sections
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|element| self.document_top(&element))
    }

    fn nav_links(&self) -> Vec<NavLink> {
        self.nav_link_elements()
            .into_iter()
            .map(|link| NavLink {
                href: link.get_attribute("href").unwrap_or_default(),
                active: link.class_list().contains(&self.active_class),
            })
            .collect()
    }

    fn set_link_active(&self, index: usize, active: bool) -> Result<(), SurfaceError> {
        let links = self.nav_link_elements();
        let link = links.get(index).ok_or(SurfaceError::LinkOutOfRange {
            index,
            len: links.len(),
        })?;
        toggle_class(link, &self.active_class, active, "link.classList.toggle")
    }

    fn scroll_to(&self, top: f64, mode: ScrollMode) -> Result<(), SurfaceError> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    fn set_body_class(&self, class: &str, on: bool) -> Result<(), SurfaceError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| SurfaceError::NotFound("body".to_string()))?;
        toggle_class(&body, class, on, "body.classList.toggle")
    }

    fn location_hash(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "DomSurface"
    }
}

/// Whether the browser fires `scrollend`, which replaces the fixed settle
/// timer.
pub fn supports_scrollend(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("onscrollend")).unwrap_or(false)
}
