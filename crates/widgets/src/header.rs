//! Compact header mode.
//!
//! The header shrinks once the page is scrolled past a threshold. Navigation
//! only reads the resulting height; this handler is the one writer.

use folio_traits::{PageSurface, SurfaceError};

pub const COMPACT_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy)]
pub struct CompactHeader {
    threshold: f64,
}

impl Default for CompactHeader {
    fn default() -> Self {
        Self::new(COMPACT_THRESHOLD)
    }
}

impl CompactHeader {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn is_compact(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    /// Brings the header's compact state in line with the scroll offset.
    /// Returns the resulting state; pages without a header are left alone.
    pub fn update<S: PageSurface + ?Sized>(&self, surface: &S) -> Result<bool, SurfaceError> {
        let compact = self.is_compact(surface.scroll_offset());
        match surface.header() {
            Some(header) if header.compact != compact => surface.set_header_compact(compact)?,
            Some(_) => {}
            None => return Ok(false),
        }
        Ok(compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::InMemorySurface;

    #[test]
    fn test_compact_past_threshold() {
        let surface = InMemorySurface::new().with_header("header", 90.0);
        let header = CompactHeader::default();

        surface.set_scroll(100.0);
        assert!(!header.update(&surface).unwrap());
        surface.set_scroll(101.0);
        assert!(header.update(&surface).unwrap());
        assert!(surface.header().unwrap().compact);

        surface.set_scroll(0.0);
        assert!(!header.update(&surface).unwrap());
        assert!(!surface.header().unwrap().compact);
    }

    #[test]
    fn test_no_header_is_ignored() {
        let surface = InMemorySurface::new();
        surface.set_scroll(500.0);
        assert!(!CompactHeader::default().update(&surface).unwrap());
    }
}
