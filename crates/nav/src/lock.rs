//! Optional lock that keeps visitors from scrolling back up into the hero
//! once they have reached a given section.

use crate::config::ScrollLockConfig;

/// Keys that scroll the page upward.
pub const UPWARD_KEYS: [&str; 3] = ["PageUp", "ArrowUp", "Home"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LockVerdict {
    Allow,
    /// Suppress the input, optionally snapping back to an offset.
    Block { snap_to: Option<f64> },
}

#[derive(Debug, Clone)]
pub struct ScrollLock {
    config: ScrollLockConfig,
}

impl ScrollLock {
    pub fn new(config: ScrollLockConfig) -> Self {
        Self { config }
    }

    pub fn section_id(&self) -> &str {
        &self.config.section_id
    }

    fn engaged(&self, offset: f64, section_top: f64) -> bool {
        self.config.enabled && offset >= section_top - self.config.engage_margin
    }

    /// Verdict for a wheel event with vertical delta `delta_y`.
    pub fn on_wheel(&self, offset: f64, section_top: f64, delta_y: f64) -> LockVerdict {
        if self.engaged(offset, section_top) && delta_y < 0.0 {
            LockVerdict::Block {
                snap_to: Some((section_top - self.config.snap_clearance).max(0.0)),
            }
        } else {
            LockVerdict::Allow
        }
    }

    /// Verdict for a key press.
    pub fn on_key(&self, offset: f64, section_top: f64, key: &str) -> LockVerdict {
        if self.engaged(offset, section_top) && UPWARD_KEYS.contains(&key) {
            LockVerdict::Block { snap_to: None }
        } else {
            LockVerdict::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock() -> ScrollLock {
        ScrollLock::new(ScrollLockConfig {
            enabled: true,
            ..ScrollLockConfig::default()
        })
    }

    #[test]
    fn test_disabled_lock_allows_everything() {
        let lock = ScrollLock::new(ScrollLockConfig::default());
        assert_eq!(lock.on_wheel(1000.0, 800.0, -50.0), LockVerdict::Allow);
        assert_eq!(lock.on_key(1000.0, 800.0, "PageUp"), LockVerdict::Allow);
    }

    #[test]
    fn test_upward_wheel_snaps_back() {
        assert_eq!(
            lock().on_wheel(750.0, 800.0, -30.0),
            LockVerdict::Block {
                snap_to: Some(720.0)
            }
        );
        assert_eq!(lock().on_wheel(750.0, 800.0, 30.0), LockVerdict::Allow);
        assert_eq!(lock().on_wheel(650.0, 800.0, -30.0), LockVerdict::Allow);
    }

    #[test]
    fn test_upward_keys_blocked() {
        assert_eq!(
            lock().on_key(900.0, 800.0, "ArrowUp"),
            LockVerdict::Block { snap_to: None }
        );
        assert_eq!(lock().on_key(900.0, 800.0, "ArrowDown"), LockVerdict::Allow);
    }
}
