pub mod fixtures;

use folio::traits::InMemorySurface;
use folio::{Page, SiteConfig};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Mounts `surface` with the default configuration.
pub fn mount(surface: InMemorySurface) -> Result<Page<InMemorySurface>, folio::FolioError> {
    mount_with(surface, SiteConfig::default())
}

pub fn mount_with(
    surface: InMemorySurface,
    config: SiteConfig,
) -> Result<Page<InMemorySurface>, folio::FolioError> {
    let _ = env_logger::builder().is_test(true).try_init();
    Page::mount(surface, config)
}

/// Scrolls to `offset`, runs one scroll tick and returns the active link
/// indices.
pub fn scroll_and_collect(page: &Page<InMemorySurface>, offset: f64) -> Vec<usize> {
    page.surface().set_scroll(offset);
    page.on_scroll();
    page.surface().active_links()
}
