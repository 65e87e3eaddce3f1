//! Scroll-spy micro-benchmarks
//!
//! Measures one scroll tick (section lookup plus link update) as the number
//! of sections grows.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use folio::nav::{NavConfig, active_section};
use folio::traits::InMemorySurface;
use folio::types::SectionBox;
use folio::{Page, SiteConfig};
use std::hint::black_box;

const SECTION_HEIGHT: f64 = 700.0;

fn sections(count: usize) -> Vec<SectionBox> {
    (0..count)
        .map(|i| SectionBox::new(format!("section-{}", i), i as f64 * 800.0, SECTION_HEIGHT))
        .collect()
}

fn page(count: usize) -> Page<InMemorySurface> {
    let mut surface = InMemorySurface::new()
        .with_viewport(900.0)
        .with_header("header", 70.0)
        .with_link("#header");
    for section in sections(count) {
        surface = surface
            .with_section(&section.id, section.top, section.height)
            .with_link(&format!("#{}", section.id));
    }
    Page::mount(surface, SiteConfig::default()).expect("Failed to mount page")
}

fn benchmark_active_section(c: &mut Criterion) {
    let mut group = c.benchmark_group("active_section");
    let config = NavConfig::default();

    for count in [5, 10, 50] {
        let sections = sections(count);
        let end = count as f64 * 800.0;
        group.bench_with_input(BenchmarkId::new("sections", count), &sections, |b, sections| {
            b.iter(|| {
                let mut offset = 0.0;
                while offset < end {
                    black_box(active_section(offset, sections, &config));
                    offset += 37.0;
                }
            });
        });
    }

    group.finish();
}

fn benchmark_scroll_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_tick");

    for count in [5, 10, 50] {
        let page = page(count);
        page.surface().set_scroll(count as f64 * 400.0);
        group.bench_with_input(BenchmarkId::new("sections", count), &page, |b, page| {
            b.iter(|| black_box(page.on_scroll()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_active_section, benchmark_scroll_tick);
criterion_main!(benches);
