mod common;

use common::fixtures::*;
use common::{TestResult, mount, mount_with};
use folio::nav::{ActiveSection, LockVerdict};
use folio::traits::{InMemoryStore, KeyValueStore, PageSurface};
use folio::widgets::theme::THEME_STORAGE_KEY;
use folio::widgets::{ContactForm, SubmitState, ThemeCycler, WidgetError};
use folio::{FolioError, SiteConfig};

#[test]
fn test_json_overrides_reach_navigation() -> TestResult {
    let config = SiteConfig::from_json(
        r#"{
            "nav": { "homeThreshold": 40, "headerMargin": 10 },
            "header": { "compactThreshold": 300 }
        }"#,
    )?;
    let mut page = mount_with(three_section_page(), config)?;

    page.surface().set_scroll(60.0);
    let report = page.on_scroll();
    assert_eq!(report.compact, Some(false));
    // The top section's window is open and the home threshold is passed.
    assert_eq!(report.active, Some(ActiveSection::Section("about".into())));

    assert_eq!(page.on_nav_click("#resume"), Some(800.0 - 80.0));
    Ok(())
}

#[test]
fn test_invalid_json_config_is_rejected() {
    assert!(matches!(
        SiteConfig::from_json(r#"{ "nav": { "leadIn": -5 } }"#),
        Err(FolioError::Config(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "nav": "oops" }"#),
        Err(FolioError::Json(_))
    ));
}

#[test]
fn test_scroll_helpers_visibility() -> TestResult {
    let page = mount(three_section_page())?;

    page.surface().set_scroll(50.0);
    let top = page.on_scroll();
    assert!(!top.back_to_top);
    assert!(top.stepper);

    // Document ends at 2300; the viewport bottom reaches 2100 here.
    page.surface().set_scroll(1200.0);
    let bottom = page.on_scroll();
    assert!(bottom.back_to_top);
    assert!(!bottom.stepper);
    Ok(())
}

#[test]
fn test_stepper_walks_every_section() -> TestResult {
    let page = mount(three_section_page())?;

    let stops: Vec<f64> = (0..4).filter_map(|_| page.step_forward()).collect();
    assert_eq!(stops, vec![730.0, 1530.0, 1530.0, 1530.0]);

    page.scroll_to_top();
    assert_eq!(page.surface().scroll_offset(), 0.0);
    Ok(())
}

#[test]
fn test_reveal_margin() -> TestResult {
    let page = mount(three_section_page())?;
    assert!(page.should_reveal(700.0));
    assert!(!page.should_reveal(760.0));
    Ok(())
}

#[test]
fn test_scroll_lock_on_configured_section() -> TestResult {
    let mut config = SiteConfig::default();
    config.nav.scroll_lock.enabled = true;
    config.nav.scroll_lock.section_id = "resume".into();
    let page = mount_with(three_section_page(), config)?;

    page.surface().set_scroll(400.0);
    assert_eq!(page.on_wheel(-60.0), LockVerdict::Allow);

    page.surface().set_scroll(900.0);
    assert_eq!(page.on_wheel(60.0), LockVerdict::Allow);
    assert_eq!(
        page.on_wheel(-60.0),
        LockVerdict::Block {
            snap_to: Some(720.0)
        }
    );
    assert_eq!(page.surface().scroll_offset(), 720.0);
    assert_eq!(page.on_key("ArrowUp"), LockVerdict::Block { snap_to: None });
    assert_eq!(page.on_key("ArrowDown"), LockVerdict::Allow);
    Ok(())
}

#[test]
fn test_theme_survives_reload() -> TestResult {
    let config = SiteConfig::default();
    let mut cycler = ThemeCycler::restore(&config.theme, InMemoryStore::new())?;
    assert_eq!(cycler.current().name, "default");

    cycler.advance();
    cycler.advance();
    cycler.persist()?;
    let saved = cycler.store().get(THEME_STORAGE_KEY)?;
    assert_eq!(saved.as_deref(), Some("purple"));

    let store = InMemoryStore::new().with_entry(THEME_STORAGE_KEY, "purple");
    let reloaded = ThemeCycler::restore(&config.theme, store)?;
    assert_eq!(reloaded.current().label, "Purple");
    Ok(())
}

#[test]
fn test_contact_form_rejects_double_submit() {
    let mut form = ContactForm::default();
    assert!(form.begin().is_ok());
    assert!(matches!(form.begin(), Err(WidgetError::SubmissionInFlight)));

    form.finish(Err("Mailbox full".into()));
    assert_eq!(form.state(), &SubmitState::Failed("Mailbox full".into()));
    assert!(form.begin().is_err());

    form.reset();
    assert!(form.begin().is_ok());
}
