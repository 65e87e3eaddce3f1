//! Wires the navigation controller and scroll helpers to DOM events.

use crate::dom::{self, DomSurface, supports_scrollend};
use crate::error::WebError;
use crate::events::{listen, listen_active, set_timeout};
use folio_core::nav::LockVerdict;
use folio_core::{Page, ScrollReport, SiteConfig, guard};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, WheelEvent, Window,
};

type SharedPage = Rc<RefCell<Page<DomSurface>>>;

/// Visible fractions at which the hero observer reports.
const HERO_THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

pub(crate) fn install(window: &Window, config: &SiteConfig) -> Result<(), WebError> {
    let surface = DomSurface::new(window, config)?;
    let document = surface.document().clone();
    let page: SharedPage = Rc::new(RefCell::new(Page::mount(surface, config.clone())?));

    let back_to_top = dom::query(&document, &config.selectors.back_to_top);
    let stepper = document.get_element_by_id(&config.selectors.stepper_id);

    install_scroll(window, &page, back_to_top.clone(), stepper.clone())?;
    guard("Navigation links", || install_nav_links(window, &page, config));
    guard("Hash navigation", || install_hash_restore(window, &page, config));
    guard("Hero observer", || install_hero_observer(window, &page, config));
    guard("Reveal on scroll", || install_reveal(window, &page, config));
    if let Some(button) = back_to_top {
        guard("Back to top", || install_back_to_top(&page, &button));
    }
    if let Some(button) = stepper {
        guard("Section stepper", || install_stepper(&page, &button));
    }
    if config.nav.scroll_lock.enabled {
        guard("Scroll lock", || install_scroll_lock(window, &page));
    }
    if supports_scrollend(window) {
        let settle = Rc::clone(&page);
        listen(window, "scrollend", move |_| {
            if let Ok(mut page) = settle.try_borrow_mut() {
                page.scroll_settled();
            }
        })?;
    }
    Ok(())
}

fn install_scroll(
    window: &Window,
    page: &SharedPage,
    back_to_top: Option<Element>,
    stepper: Option<Element>,
) -> Result<(), WebError> {
    let on_scroll = {
        let page = Rc::clone(page);
        move || {
            let Ok(page) = page.try_borrow() else {
                log::debug!("Scroll tick skipped: page busy");
                return;
            };
            let report = page.on_scroll();
            guard("Scroll helpers", || {
                apply_report(&report, back_to_top.as_ref(), stepper.as_ref(), &page)
            });
        }
    };

    // Run once so the initial state matches the initial scroll position.
    on_scroll();
    listen(window, "scroll", move |_| on_scroll())?;
    Ok(())
}

fn apply_report(
    report: &ScrollReport,
    back_to_top: Option<&Element>,
    stepper: Option<&Element>,
    page: &Page<DomSurface>,
) -> Result<(), WebError> {
    if let Some(button) = back_to_top {
        let class = &page.config().selectors.active_class;
        button
            .class_list()
            .toggle_with_force(class, report.back_to_top)?;
    }
    if let Some(button) = stepper.and_then(|e| e.dyn_ref::<HtmlElement>()) {
        let style = button.style();
        let (opacity, pointer) = if report.stepper {
            ("0.95", "auto")
        } else {
            ("0", "none")
        };
        style.set_property("opacity", opacity)?;
        style.set_property("pointer-events", pointer)?;
    }
    Ok(())
}

fn install_nav_links(
    window: &Window,
    page: &SharedPage,
    config: &SiteConfig,
) -> Result<(), WebError> {
    let use_timer = !supports_scrollend(window);
    let settle_ms = config.nav.scroll_settle_ms;

    let links = page.borrow().surface().query_all(&config.selectors.nav_links);
    for link in links {
        let page = Rc::clone(page);
        let window = window.clone();
        let target = link.clone();
        listen(&link, "click", move |event: Event| {
            event.prevent_default();
            let Some(href) = target.get_attribute("href") else {
                return;
            };
            let Ok(mut current) = page.try_borrow_mut() else {
                return;
            };
            if current.on_nav_click(&href).is_some() && use_timer {
                let settle = Rc::clone(&page);
                guard("Scroll settle timer", || {
                    set_timeout(&window, settle_ms, move || {
                        if let Ok(mut page) = settle.try_borrow_mut() {
                            page.scroll_settled();
                        }
                    })
                });
            }
        })?;
    }
    Ok(())
}

fn install_hash_restore(
    window: &Window,
    page: &SharedPage,
    config: &SiteConfig,
) -> Result<(), WebError> {
    if window.location().hash().unwrap_or_default().is_empty() {
        return Ok(());
    }

    let delay = config.nav.hash_restore_delay_ms;
    let restore = {
        let page = Rc::clone(page);
        let window = window.clone();
        move || {
            guard("Hash navigation timer", || {
                set_timeout(&window, delay, move || {
                    if let Ok(mut page) = page.try_borrow_mut() {
                        page.restore_from_hash();
                    }
                })
            });
        }
    };

    let loaded = window
        .document()
        .is_some_and(|d| d.ready_state() == "complete");
    if loaded {
        restore();
    } else {
        let mut restore = Some(restore);
        listen(window, "load", move |_| {
            if let Some(restore) = restore.take() {
                restore();
            }
        })?;
    }
    Ok(())
}

fn install_hero_observer(
    window: &Window,
    page: &SharedPage,
    config: &SiteConfig,
) -> Result<(), WebError> {
    let supported = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))?;
    let hero = page.borrow().surface().document().get_element_by_id(&config.nav.home_id);
    let Some(hero) = hero.filter(|_| supported) else {
        log::info!("Hero observer skipped");
        return Ok(());
    };

    let page = Rc::clone(page);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        let Ok(mut page) = page.try_borrow_mut() else {
            return;
        };
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                page.on_hero_visibility(entry.intersection_ratio(), entry.is_intersecting());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let thresholds: js_sys::Array = HERO_THRESHOLDS.iter().map(|t| JsValue::from_f64(*t)).collect();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&hero);
    callback.forget();
    Ok(())
}

fn install_reveal(window: &Window, page: &SharedPage, config: &SiteConfig) -> Result<(), WebError> {
    let revealed_class = config.selectors.revealed_class.clone();
    let selector = config.selectors.reveal.clone();
    if page.borrow().surface().query_all(&selector).is_empty() {
        return Ok(());
    }

    let page = Rc::clone(page);
    let reveal = move || {
        let Ok(page) = page.try_borrow() else {
            return;
        };
        for element in page.surface().query_all(&selector) {
            let top = element.get_bounding_client_rect().top();
            if page.should_reveal(top) {
                guard("Reveal", || {
                    element
                        .class_list()
                        .add_1(&revealed_class)
                        .map_err(WebError::from)
                });
            }
        }
    };
    reveal();
    listen(window, "scroll", move |_| reveal())?;
    Ok(())
}

fn install_back_to_top(page: &SharedPage, button: &Element) -> Result<(), WebError> {
    let page = Rc::clone(page);
    listen(button, "click", move |event: Event| {
        event.prevent_default();
        if let Ok(page) = page.try_borrow() {
            page.scroll_to_top();
        }
    })?;
    Ok(())
}

fn install_stepper(page: &SharedPage, button: &Element) -> Result<(), WebError> {
    let page = Rc::clone(page);
    listen(button, "click", move |_| {
        if let Ok(page) = page.try_borrow() {
            page.step_forward();
        }
    })?;
    Ok(())
}

fn install_scroll_lock(window: &Window, page: &SharedPage) -> Result<(), WebError> {
    let wheel_page = Rc::clone(page);
    listen_active(window, "wheel", move |event: Event| {
        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        let Ok(page) = wheel_page.try_borrow() else {
            return;
        };
        if let LockVerdict::Block { .. } = page.on_wheel(wheel.delta_y()) {
            event.prevent_default();
            event.stop_propagation();
        }
    })?;

    let key_page = Rc::clone(page);
    listen(window, "keydown", move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else {
            return;
        };
        let Ok(page) = key_page.try_borrow() else {
            return;
        };
        if let LockVerdict::Block { .. } = page.on_key(&key) {
            event.prevent_default();
        }
    })?;
    Ok(())
}
