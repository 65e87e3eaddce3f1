//! Navigation thresholds and offsets.
//!
//! Each tunable has a named default below. Changing page behavior means
//! changing one of these values (or overriding it in [`NavConfig`]), never
//! editing arithmetic in the controller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Element id of the home pseudo-section.
pub const HOME_ID: &str = "header";

/// Below this scroll offset the home link is active regardless of layout.
pub const HOME_THRESHOLD: f64 = 100.0;

/// How far ahead of a section's top edge its scroll-spy window opens, to
/// account for the fixed header covering the top of the viewport.
pub const LEAD_IN: f64 = 85.0;

/// Breathing room left between the header's bottom edge and a section's top
/// after smooth navigation.
pub const HEADER_MARGIN: f64 = 20.0;

/// Assumed duration of a smooth scroll. Only used when the platform has no
/// scroll-completion event.
pub const SCROLL_SETTLE_MS: u32 = 700;

/// Delay before honoring a location fragment on page load, so late layout
/// (fonts, images) has settled.
pub const HASH_RESTORE_DELAY_MS: u32 = 200;

/// Visible fraction of the hero above which it is shown again.
pub const HERO_VISIBLE_RATIO: f64 = 0.75;

/// Stepper stops within this distance below the offset count as already
/// reached.
pub const STEP_TOLERANCE: f64 = 10.0;

/// Header clearance used by the stepper on small screens.
pub const STEP_CLEARANCE: f64 = 70.0;

/// The stepper hides once the viewport bottom is this close to the end of
/// the document.
pub const STEP_BOTTOM_MARGIN: f64 = 200.0;

/// Back-to-top appears past this offset.
pub const BACK_TO_TOP_THRESHOLD: f64 = 100.0;

/// An element is revealed once its top edge is this far above the viewport
/// bottom.
pub const REVEAL_MARGIN: f64 = 150.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub home_id: String,
    pub home_threshold: f64,
    pub lead_in: f64,
    pub header_margin: f64,
    /// Per-section replacement for `header_margin`, keyed by section id.
    pub section_margins: HashMap<String, f64>,
    pub scroll_settle_ms: u32,
    pub hash_restore_delay_ms: u32,
    pub hero_visible_ratio: f64,
    pub back_to_top_threshold: f64,
    pub reveal_margin: f64,
    pub stepper: StepperConfig,
    pub scroll_lock: ScrollLockConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            home_id: HOME_ID.to_string(),
            home_threshold: HOME_THRESHOLD,
            lead_in: LEAD_IN,
            header_margin: HEADER_MARGIN,
            section_margins: HashMap::new(),
            scroll_settle_ms: SCROLL_SETTLE_MS,
            hash_restore_delay_ms: HASH_RESTORE_DELAY_MS,
            hero_visible_ratio: HERO_VISIBLE_RATIO,
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
            reveal_margin: REVEAL_MARGIN,
            stepper: StepperConfig::default(),
            scroll_lock: ScrollLockConfig::default(),
        }
    }
}

impl NavConfig {
    /// Margin below the header for the section `id`.
    pub fn margin_for(&self, id: &str) -> f64 {
        self.section_margins
            .get(id)
            .copied()
            .unwrap_or(self.header_margin)
    }

    /// Names of fields holding a negative distance, for validation.
    pub fn negative_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let checks = [
            ("homeThreshold", self.home_threshold),
            ("leadIn", self.lead_in),
            ("headerMargin", self.header_margin),
            ("backToTopThreshold", self.back_to_top_threshold),
            ("revealMargin", self.reveal_margin),
            ("stepper.tolerance", self.stepper.tolerance),
            ("stepper.clearance", self.stepper.clearance),
            ("stepper.bottomMargin", self.stepper.bottom_margin),
        ];
        for (name, value) in checks {
            if value < 0.0 {
                fields.push(name);
            }
        }
        if self.section_margins.values().any(|m| *m < 0.0) {
            fields.push("sectionMargins");
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StepperConfig {
    pub tolerance: f64,
    pub clearance: f64,
    pub bottom_margin: f64,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            tolerance: STEP_TOLERANCE,
            clearance: STEP_CLEARANCE,
            bottom_margin: STEP_BOTTOM_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollLockConfig {
    pub enabled: bool,
    /// Section that, once reached, cannot be scrolled back out of upward.
    pub section_id: String,
    pub engage_margin: f64,
    pub snap_clearance: f64,
}

impl Default for ScrollLockConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            section_id: "about".to_string(),
            engage_margin: 100.0,
            snap_clearance: 80.0,
        }
    }
}
