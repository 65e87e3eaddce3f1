//! Event listener and timer helpers.
//!
//! Listeners live as long as the page, so their closures are leaked on
//! purpose.

use crate::error::WebError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, Window};

/// Adds a listener for `event` on `target`.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Adds a non-passive listener, for handlers that may call
/// `prevent_default` on wheel or touch events.
pub fn listen_active(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

/// Runs `f` once after `ms` milliseconds.
pub fn set_timeout(window: &Window, ms: u32, f: impl FnOnce() + 'static) -> Result<i32, WebError> {
    let callback = Closure::once_into_js(f);
    let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        timeout_ms(ms),
    )?;
    Ok(id)
}

/// Runs `f` every `ms` milliseconds for the life of the page.
pub fn set_interval(window: &Window, ms: u32, f: impl FnMut() + 'static) -> Result<i32, WebError> {
    let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        timeout_ms(ms),
    )?;
    callback.forget();
    Ok(id)
}

fn timeout_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}
