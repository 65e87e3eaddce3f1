//! Scroll helpers that sit next to navigation: the small-screen "next
//! section" button, back-to-top and reveal-on-scroll.

use crate::config::StepperConfig;
use folio_types::SectionBox;

/// Scroll offset the "next section" button should move to.
///
/// Stops are the home pseudo-section at 0 followed by every section in
/// document order, each landing `clearance` above its top. The current stop
/// is the last landing at or within `tolerance` below `offset`; the button
/// moves one stop further, staying on the last.
pub fn next_stop(offset: f64, sections: &[SectionBox], config: &StepperConfig) -> f64 {
    let landings: Vec<f64> = std::iter::once(0.0)
        .chain(sections.iter().map(|s| (s.top - config.clearance).max(0.0)))
        .collect();

    let current = landings
        .iter()
        .take_while(|landing| *landing - config.tolerance <= offset)
        .count()
        .saturating_sub(1);
    let next = (current + 1).min(landings.len() - 1);

    landings[next]
}

/// Whether the "next section" button is shown. It hides near the end of
/// the document, where there is nothing further to step to.
pub fn stepper_visible(
    offset: f64,
    viewport_height: f64,
    document_height: f64,
    config: &StepperConfig,
) -> bool {
    viewport_height + offset < document_height - config.bottom_margin
}

/// Whether the back-to-top button is shown.
pub fn back_to_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Whether an element whose top edge sits at `viewport_top` (relative to the
/// viewport) has scrolled far enough into view to be revealed. Reveal is
/// one-way; callers never un-reveal.
pub fn should_reveal(viewport_top: f64, viewport_height: f64, margin: f64) -> bool {
    viewport_top < viewport_height - margin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox::new("about", 800.0, 700.0),
            SectionBox::new("resume", 1600.0, 700.0),
        ]
    }

    #[test]
    fn test_next_stop_from_top() {
        let config = StepperConfig::default();
        assert_eq!(next_stop(0.0, &sections(), &config), 730.0);
    }

    #[test]
    fn test_next_stop_uses_tolerance() {
        let config = StepperConfig::default();
        // 725 is within 10px of about's landing, so about counts as reached
        assert_eq!(next_stop(725.0, &sections(), &config), 1530.0);
        assert_eq!(next_stop(715.0, &sections(), &config), 730.0);
    }

    #[test]
    fn test_next_stop_stays_on_last() {
        let config = StepperConfig::default();
        assert_eq!(next_stop(2000.0, &sections(), &config), 1530.0);
    }

    #[test]
    fn test_next_stop_without_sections_is_top() {
        assert_eq!(next_stop(450.0, &[], &StepperConfig::default()), 0.0);
    }

    #[test]
    fn test_stepper_hides_near_bottom() {
        let config = StepperConfig::default();
        assert!(stepper_visible(0.0, 900.0, 3000.0, &config));
        assert!(!stepper_visible(1900.0, 900.0, 3000.0, &config));
    }

    #[test]
    fn test_back_to_top_and_reveal() {
        assert!(!back_to_top_visible(100.0, 100.0));
        assert!(back_to_top_visible(101.0, 100.0));
        assert!(should_reveal(600.0, 900.0, 150.0));
        assert!(!should_reveal(750.0, 900.0, 150.0));
    }
}
