//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

use folio_core::SiteConfig;
use folio_core::traits::{KeyValueStore, PageSurface};
use folio_wasm::{DomSurface, LocalStorage};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().expect("window")
}

fn document() -> Document {
    window().document().expect("document")
}

/// Replaces the body with a minimal page: a header, two links and two
/// sections.
fn build_page(document: &Document) {
    let body = document.body().expect("body");
    body.set_inner_html(
        r##"<header id="header" style="height: 70px">
              <nav id="navbar">
                <a class="nav-link" href="#about">About</a>
                <a class="nav-link" href="#resume">Resume</a>
              </nav>
            </header>
            <section id="about" style="height: 800px">About</section>
            <section id="resume" style="height: 800px">Resume</section>"##,
    );
}

#[wasm_bindgen_test]
fn test_init() {
    let version = folio_wasm::get_version();
    assert!(!version.is_empty());
}

#[wasm_bindgen_test]
fn test_mount_with_defaults_on_empty_page() {
    document().body().expect("body").set_inner_html("");
    assert!(folio_wasm::mount(JsValue::UNDEFINED).is_ok());
}

#[wasm_bindgen_test]
fn test_mount_rejects_invalid_json() {
    let err = folio_wasm::mount_from_json("{ not json").expect_err("should fail");
    assert!(err.is_instance_of::<js_sys::Error>());
    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code")).expect("code");
    assert_eq!(code.as_string().as_deref(), Some("JSON_ERROR"));
}

#[wasm_bindgen_test]
fn test_dom_surface_reads_layout() {
    let document = document();
    build_page(&document);
    let surface = DomSurface::new(&window(), &SiteConfig::default()).expect("surface");

    let header = surface.header().expect("header");
    assert!((header.height - 70.0).abs() < 1.0);

    let sections = surface.sections();
    let ids: Vec<_> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["header", "about", "resume"]);
    assert!(sections[1].top > sections[0].top);
    assert!(sections[2].top > sections[1].top);

    let links = surface.nav_links();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].href, "#about");
}

#[wasm_bindgen_test]
fn test_dom_surface_toggles_link_classes() {
    let document = document();
    build_page(&document);
    let surface = DomSurface::new(&window(), &SiteConfig::default()).expect("surface");

    surface.set_link_active(1, true).expect("toggle");
    let active: Vec<_> = surface.nav_links().iter().map(|l| l.active).collect();
    assert_eq!(active, vec![false, true]);

    assert!(surface.set_link_active(5, true).is_err());
}

#[wasm_bindgen_test]
fn test_dom_surface_body_classes() {
    let document = document();
    build_page(&document);
    let surface = DomSurface::new(&window(), &SiteConfig::default()).expect("surface");

    surface.set_body_class("hide-hero", true).expect("add");
    let body = document.body().expect("body");
    assert!(body.class_list().contains("hide-hero"));

    surface.set_body_class("hide-hero", false).expect("remove");
    assert!(!body.class_list().contains("hide-hero"));
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let storage = LocalStorage::new(&window());
    if !storage.is_available() {
        return;
    }
    storage.set("folio-test-key", "purple").expect("set");
    assert_eq!(
        storage.get("folio-test-key").expect("get").as_deref(),
        Some("purple")
    );
}
