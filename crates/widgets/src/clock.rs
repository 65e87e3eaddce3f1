//! Live clock in a fixed time zone, and the age counter.

use crate::error::WidgetError;
use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Indian Standard Time, UTC+05:30.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;
pub const DEFAULT_ZONE_LABEL: &str = "IST";
pub const CLOCK_TICK_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockConfig {
    pub utc_offset_minutes: i32,
    pub zone_label: String,
    pub tick_ms: u32,
    /// Enables the age counter when set.
    pub birth_date: Option<NaiveDate>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            zone_label: DEFAULT_ZONE_LABEL.to_string(),
            tick_ms: CLOCK_TICK_MS,
            birth_date: None,
        }
    }
}

impl ClockConfig {
    /// The configured zone, or `None` when the offset is not strictly
    /// within a day of UTC.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
    }
}

/// One rendering of the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// `03:04:05 PM IST`
    pub time: String,
    /// `Sat, Oct 17, 2026`
    pub date: String,
    /// `GMT+5.5`
    pub gmt_offset: String,
    pub emoji: &'static str,
}

#[derive(Debug, Clone)]
pub struct ZoneClock {
    offset: FixedOffset,
    label: String,
}

impl ZoneClock {
    pub fn new(config: &ClockConfig) -> Result<Self, WidgetError> {
        let offset = config
            .fixed_offset()
            .ok_or(WidgetError::InvalidOffset(config.utc_offset_minutes))?;
        Ok(Self {
            offset,
            label: config.zone_label.clone(),
        })
    }

    pub fn reading(&self, now: DateTime<Utc>) -> ClockReading {
        let local = now.with_timezone(&self.offset);
        let hours = f64::from(self.offset.local_minus_utc()) / 3600.0;
        ClockReading {
            time: format!("{} {}", local.format("%I:%M:%S %p"), self.label),
            date: local.format("%a, %b %-d, %Y").to_string(),
            gmt_offset: format!("GMT{:+.1}", hours),
            emoji: emoji_for_hour(local.hour()),
        }
    }

    /// Today's date in this zone.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }
}

/// Time-of-day glyph for a 24-hour clock hour.
pub fn emoji_for_hour(hour: u32) -> &'static str {
    match hour {
        0..3 => "🌑",
        3..6 => "🌘",
        6..12 => "🌞",
        12..17 => "🌤️",
        17..19 => "🌇",
        19..21 => "🌙",
        21..24 => "🌚",
        _ => "🕰️",
    }
}

/// Whole years from `birth` to `today`, or `None` if `birth` is in the
/// future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(birth)
}
