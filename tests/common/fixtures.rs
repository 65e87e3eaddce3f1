//! Page layouts shared by the integration tests.

use folio::traits::InMemorySurface;

pub const HEADER_HEIGHT: f64 = 70.0;

/// Three 700px sections at document tops 0, 800 and 1600 under a 70px
/// header, with a link for each plus the home link.
pub fn three_section_page() -> InMemorySurface {
    InMemorySurface::new()
        .with_viewport(900.0)
        .with_header("header", HEADER_HEIGHT)
        .with_section("about", 0.0, 700.0)
        .with_section("resume", 800.0, 700.0)
        .with_section("contact", 1600.0, 700.0)
        .with_link("#header")
        .with_link("#about")
        .with_link("#resume")
        .with_link("#contact")
}

/// Sections short enough that their scroll-spy windows overlap.
pub fn short_section_page() -> InMemorySurface {
    InMemorySurface::new()
        .with_viewport(900.0)
        .with_header("header", HEADER_HEIGHT)
        .with_section("skills", 400.0, 300.0)
        .with_section("projects", 560.0, 300.0)
        .with_section("awards", 720.0, 300.0)
        .with_link("#header")
        .with_link("#skills")
        .with_link("#projects")
        .with_link("#awards")
}

/// A full-screen hero tracked as the first section, as the browser surface
/// reports it, followed by two sections.
pub fn hero_page() -> InMemorySurface {
    InMemorySurface::new()
        .with_viewport(900.0)
        .with_header("header", HEADER_HEIGHT)
        .with_section("header", 0.0, 900.0)
        .with_section("about", 900.0, 700.0)
        .with_section("resume", 1700.0, 700.0)
        .with_link("#header")
        .with_link("#about")
        .with_link("#resume")
}
