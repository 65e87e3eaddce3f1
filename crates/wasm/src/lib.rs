//! WebAssembly bindings for the portfolio page.
//!
//! The page's behavior lives in `folio-core`; this crate measures the DOM,
//! forwards browser events and applies the results.
//!
//! ## Module Structure
//!
//! - [`dom`] - `DomSurface`, the `web-sys` implementation of `PageSurface`
//! - [`storage`] - local storage as a `KeyValueStore`
//! - [`events`] - listener and timer helpers
//! - `navigation` - scroll-spy, smooth navigation and the scroll helpers
//! - `widgets` - theme, clock, age, context menu and sidebar
//! - `contact` - contact form submission
//! - [`error`] - error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { mount } from '@folio/wasm';
//!
//! await init();
//! mount({ nav: { leadIn: 90 }, clock: { birthDate: "2002-02-27" } });
//! ```
//!
//! Every feature installs independently. A page missing the elements for
//! one feature simply runs without it.

mod contact;
pub mod dom;
pub mod error;
pub mod events;
mod navigation;
pub mod storage;
mod widgets;

pub use dom::DomSurface;
pub use error::{ErrorCode, WebError};
pub use storage::LocalStorage;

use folio_core::{SiteConfig, guard};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console.
/// Called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the folio-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Attach every page feature.
///
/// `config` is a site configuration object, or `undefined` for defaults.
/// Only an invalid configuration or a missing `window` is reported as an
/// error; individual features that fail to install are logged and skipped.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    mount_with(&config)?;
    Ok(())
}

/// Like [`mount`], with the configuration given as a JSON string.
#[wasm_bindgen(js_name = mountFromJson)]
pub fn mount_from_json(source: &str) -> Result<(), JsValue> {
    let config = SiteConfig::from_json(source).map_err(WebError::from)?;
    mount_with(&config)?;
    Ok(())
}

fn parse_config(value: JsValue) -> Result<SiteConfig, WebError> {
    if value.is_undefined() || value.is_null() {
        return Ok(SiteConfig::default());
    }
    let config: SiteConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| WebError::config(format!("Invalid site configuration: {}", e)))?;
    config.validate()?;
    Ok(config)
}

fn mount_with(config: &SiteConfig) -> Result<(), WebError> {
    let window = web_sys::window().ok_or_else(|| WebError::platform("No window object available"))?;

    guard("Navigation setup", || navigation::install(&window, config));
    guard("Theme switcher setup", || widgets::install_theme(&window, config));
    guard("Clock setup", || widgets::install_clock(&window, config));
    guard("Age counter setup", || widgets::install_age(&window, config));
    guard("Context menu setup", || widgets::install_context_menu(&window, config));
    guard("Sidebar setup", || widgets::install_sidebar(&window, config));
    guard("Contact form setup", || contact::install(&window, config));

    log::debug!("Page mounted");
    Ok(())
}
