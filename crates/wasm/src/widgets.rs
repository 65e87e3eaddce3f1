//! DOM wiring for the independent page handlers.

use crate::dom;
use crate::error::WebError;
use crate::events::{listen, set_interval, set_timeout};
use crate::storage::LocalStorage;
use chrono::Utc;
use folio_core::widgets::sidebar::SIDEBAR_BODY_CLASS;
use folio_core::widgets::{
    ContextMenu, MenuAction, MenuCommand, Sidebar, Theme, ThemeCycler, ZoneClock, age_on,
};
use folio_core::{SiteConfig, guard};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Event, HtmlElement, MouseEvent, Node, ScrollToOptions, Window};

fn document(window: &Window) -> Result<Document, WebError> {
    window
        .document()
        .ok_or_else(|| WebError::platform("No document available"))
}

fn body(document: &Document) -> Result<HtmlElement, WebError> {
    document
        .body()
        .ok_or_else(|| WebError::platform("No body element"))
}

/// Sets an inline style property, then removes it after `ms`.
fn flash_style(
    window: &Window,
    element: &HtmlElement,
    property: &'static str,
    value: &str,
    ms: u32,
) -> Result<(), WebError> {
    element.style().set_property(property, value)?;
    let element = element.clone();
    set_timeout(window, ms, move || {
        element.style().remove_property(property).ok();
    })?;
    Ok(())
}

pub(crate) fn install_theme(window: &Window, config: &SiteConfig) -> Result<(), WebError> {
    let document = document(window)?;
    let selectors = &config.selectors;
    let (Some(toggle), Some(label)) = (
        document.get_element_by_id(&selectors.theme_toggle_id),
        document.get_element_by_id(&selectors.theme_label_id),
    ) else {
        log::info!("Theme switcher skipped: toggle or label missing");
        return Ok(());
    };
    let body = body(&document)?;

    let cycler = ThemeCycler::restore(&config.theme, LocalStorage::new(window))?;
    let transition_ms = config.theme.transition_ms;
    let apply = {
        let window = window.clone();
        move |theme: &Theme| -> Result<(), WebError> {
            body.set_attribute("data-theme", &theme.name)?;
            label.set_text_content(Some(&theme.label));
            let transition = format!("all {}s ease", f64::from(transition_ms) / 1000.0);
            flash_style(&window, &body, "transition", &transition, transition_ms)
        }
    };

    apply(cycler.current())?;
    guard("Theme persistence", || cycler.persist());

    let cycler = RefCell::new(cycler);
    let press_ms = config.theme.press_feedback_ms;
    let window = window.clone();
    let button = toggle.clone();
    listen(&toggle, "click", move |event: Event| {
        event.stop_propagation();
        let mut cycler = cycler.borrow_mut();
        let theme = cycler.advance().clone();
        guard("Theme switch", || apply(&theme));
        guard("Theme persistence", || cycler.persist());
        if let Some(button) = button.dyn_ref::<HtmlElement>() {
            guard("Theme press feedback", || {
                flash_style(&window, button, "transform", "scale(0.95)", press_ms)
            });
        }
    })?;
    Ok(())
}

pub(crate) fn install_clock(window: &Window, config: &SiteConfig) -> Result<(), WebError> {
    let document = document(window)?;
    let Some(element) = document.get_element_by_id(&config.selectors.time_id) else {
        log::info!("Clock skipped: no #{}", config.selectors.time_id);
        return Ok(());
    };
    let clock = ZoneClock::new(&config.clock)?;

    let tick = move || {
        let reading = clock.reading(Utc::now());
        element.set_text_content(Some(&reading.time));
    };
    tick();
    set_interval(window, config.clock.tick_ms, tick)?;
    Ok(())
}

pub(crate) fn install_age(window: &Window, config: &SiteConfig) -> Result<(), WebError> {
    let Some(birth) = config.clock.birth_date else {
        return Ok(());
    };
    let document = document(window)?;
    let Some(element) = document.get_element_by_id(&config.selectors.age_id) else {
        log::info!("Age counter skipped: no #{}", config.selectors.age_id);
        return Ok(());
    };

    let today = ZoneClock::new(&config.clock)?.today(Utc::now());
    match age_on(birth, today) {
        Some(age) => element.set_text_content(Some(&age.to_string())),
        None => log::warn!("Birth date {} is in the future", birth),
    }
    Ok(())
}

pub(crate) fn install_context_menu(window: &Window, config: &SiteConfig) -> Result<(), WebError> {
    let document = document(window)?;
    let Some(menu_element) = document
        .get_element_by_id(&config.selectors.context_menu_id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        log::info!("Context menu skipped: no #{}", config.selectors.context_menu_id);
        return Ok(());
    };

    let menu = Rc::new(RefCell::new(ContextMenu::default()));
    let open_class = config.selectors.active_class.clone();
    let disabled_class = config.selectors.disabled_class.clone();
    let copy_item = document.get_element_by_id(MenuAction::Copy.element_id());

    {
        let menu = Rc::clone(&menu);
        let menu_element = menu_element.clone();
        let open_class = open_class.clone();
        let window = window.clone();
        listen(&document, "contextmenu", move |event: Event| {
            event.prevent_default();
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let selection = window
                .get_selection()
                .ok()
                .flatten()
                .map(|s| String::from(s.to_string()))
                .unwrap_or_default();

            let mut menu = menu.borrow_mut();
            menu.open_at(f64::from(mouse.client_x()), f64::from(mouse.client_y()), &selection);
            guard("Context menu open", || {
                show_menu(&menu_element, &menu, &open_class)?;
                if let Some(copy) = copy_item.as_ref() {
                    copy.class_list()
                        .toggle_with_force(&disabled_class, !menu.copy_enabled())?;
                }
                Ok::<_, WebError>(())
            });
        })?;
    }

    {
        let menu = Rc::clone(&menu);
        let menu_element = menu_element.clone();
        let open_class = open_class.clone();
        listen(&document, "click", move |event: Event| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .is_some_and(|node| menu_element.contains(Some(&node)));
            if !inside {
                menu.borrow_mut().close();
                menu_element.class_list().remove_1(&open_class).ok();
            }
        })?;
    }

    for action in MenuAction::ALL {
        let Some(item) = document.get_element_by_id(action.element_id()) else {
            continue;
        };
        let menu = Rc::clone(&menu);
        let menu_element = menu_element.clone();
        let open_class = open_class.clone();
        let window = window.clone();
        listen(&item, "click", move |_| {
            let Some(command) = menu.borrow_mut().choose(action) else {
                return;
            };
            menu_element.class_list().remove_1(&open_class).ok();
            guard("Context menu action", || run_command(&window, command));
        })?;
    }
    Ok(())
}

fn show_menu(element: &HtmlElement, menu: &ContextMenu, open_class: &str) -> Result<(), WebError> {
    let (x, y) = menu.position();
    let style = element.style();
    style.set_property("top", &format!("{}px", y))?;
    style.set_property("left", &format!("{}px", x))?;
    element.class_list().add_1(open_class)?;
    Ok(())
}

fn run_command(window: &Window, command: MenuCommand) -> Result<(), WebError> {
    match command {
        MenuCommand::Reload => window.location().reload()?,
        MenuCommand::HistoryBack => window.history()?.back()?,
        MenuCommand::ScrollToTop => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        MenuCommand::CopyText(text) => copy_to_clipboard(window, text)?,
    }
    Ok(())
}

/// Writes `text` through the async clipboard API. Failures are logged once
/// the promise settles.
fn copy_to_clipboard(window: &Window, text: String) -> Result<(), WebError> {
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(WebError::platform("Clipboard API unavailable"));
    }
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(&text))?
        .dyn_into()?;

    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::error!("Failed to copy text: {}", WebError::from(e));
        }
    });
    Ok(())
}

pub(crate) fn install_sidebar(window: &Window, config: &SiteConfig) -> Result<(), WebError> {
    let document = document(window)?;
    let Some(toggle) = dom::query(&document, &config.selectors.sidebar_toggle) else {
        return Ok(());
    };
    let body = body(&document)?;
    let sidebar = Rc::new(RefCell::new(Sidebar::default()));

    {
        let sidebar = Rc::clone(&sidebar);
        let body = body.clone();
        listen(&toggle, "click", move |event: Event| {
            event.prevent_default();
            let open = sidebar.borrow_mut().toggle();
            body.class_list()
                .toggle_with_force(SIDEBAR_BODY_CLASS, open)
                .ok();
        })?;
    }

    for link in dom::query_all(&document, &config.selectors.nav_links) {
        let sidebar = Rc::clone(&sidebar);
        let body = body.clone();
        listen(&link, "click", move |_| {
            if sidebar.borrow_mut().on_nav_link() {
                body.class_list().remove_1(SIDEBAR_BODY_CLASS).ok();
            }
        })?;
    }
    Ok(())
}
