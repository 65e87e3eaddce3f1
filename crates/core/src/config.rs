//! Site-wide configuration.
//!
//! One JSON document configures the whole page. Every field has a default,
//! so `{}` is a valid configuration.

use crate::error::FolioError;
use folio_nav::NavConfig;
use folio_widgets::header::COMPACT_THRESHOLD;
use folio_widgets::{ClockConfig, ContactConfig, ThemeConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub selectors: SelectorConfig,
    pub theme: ThemeConfig,
    pub clock: ClockConfig,
    pub contact: ContactConfig,
    pub header: HeaderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    pub compact_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            compact_threshold: COMPACT_THRESHOLD,
        }
    }
}

/// Where the page's elements are found and which classes mark their state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    pub nav_links: String,
    pub sections: String,
    pub active_class: String,
    pub compact_class: String,
    pub back_to_top: String,
    pub stepper_id: String,
    pub reveal: String,
    pub revealed_class: String,
    pub theme_toggle_id: String,
    pub theme_label_id: String,
    pub time_id: String,
    pub age_id: String,
    pub context_menu_id: String,
    pub disabled_class: String,
    pub sidebar_toggle: String,
    pub contact_form: String,
    pub submit_button: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            nav_links: "#navbar .nav-link".to_string(),
            sections: "section".to_string(),
            active_class: "active".to_string(),
            compact_class: "compact".to_string(),
            back_to_top: ".back-to-top".to_string(),
            stepper_id: "scroll-nav".to_string(),
            reveal: ".reveal-element".to_string(),
            revealed_class: "revealed".to_string(),
            theme_toggle_id: "themeToggle".to_string(),
            theme_label_id: "themeLabel".to_string(),
            time_id: "time".to_string(),
            age_id: "age".to_string(),
            context_menu_id: "context-menu".to_string(),
            disabled_class: "disabled".to_string(),
            sidebar_toggle: ".mobile-nav-toggle".to_string(),
            contact_form: ".php-email-form".to_string(),
            submit_button: ".submit-btn".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(source: &str) -> Result<Self, FolioError> {
        let config: SiteConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        let negative = self.nav.negative_fields();
        if !negative.is_empty() {
            return Err(FolioError::Config(format!(
                "negative distance in nav.{}",
                negative.join(", nav.")
            )));
        }
        if self.nav.home_id.trim().is_empty() {
            return Err(FolioError::Config("nav.homeId is empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.nav.hero_visible_ratio) {
            return Err(FolioError::Config(format!(
                "nav.heroVisibleRatio {} is outside 0..=1",
                self.nav.hero_visible_ratio
            )));
        }
        if self.header.compact_threshold < 0.0 {
            return Err(FolioError::Config(
                "negative distance in header.compactThreshold".to_string(),
            ));
        }
        if self.clock.fixed_offset().is_none() {
            return Err(FolioError::Config(format!(
                "clock.utcOffsetMinutes {} is not a valid UTC offset",
                self.clock.utc_offset_minutes
            )));
        }
        if self.theme.themes.is_empty() {
            return Err(FolioError::Config("theme.themes is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.selectors.nav_links, "#navbar .nav-link");
    }

    #[test]
    fn test_nested_overrides() {
        let config = SiteConfig::from_json(
            r#"{
                "nav": { "homeThreshold": 150, "scrollLock": { "enabled": true } },
                "clock": { "zoneLabel": "UTC", "utcOffsetMinutes": 0 },
                "header": { "compactThreshold": 60 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.nav.home_threshold, 150.0);
        assert!(config.nav.scroll_lock.enabled);
        assert_eq!(config.clock.zone_label, "UTC");
        assert_eq!(config.header.compact_threshold, 60.0);
    }

    #[test]
    fn test_validation_errors() {
        let err = SiteConfig::from_json(r#"{ "nav": { "leadIn": -5 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(ref m) if m.contains("nav.leadIn")));

        let err = SiteConfig::from_json(r#"{ "theme": { "themes": [] } }"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));

        let err = SiteConfig::from_json(r#"{ "nav": { "heroVisibleRatio": 2 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));

        let err =
            SiteConfig::from_json(r#"{ "clock": { "utcOffsetMinutes": 40000000 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(ref m) if m.contains("utcOffsetMinutes")));

        assert!(matches!(
            SiteConfig::from_json("{ nav"),
            Err(FolioError::Json(_))
        ));
    }
}
