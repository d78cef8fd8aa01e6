// benches/compose.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mdn_scrape::config::{GenerateOptions, PageKind};
use mdn_scrape::core::html;
use mdn_scrape::runner;

const ATTRIBUTES: &str = include_str!("../tests/fixtures/attributes.html");
const ELEMENTS: &str = include_str!("../tests/fixtures/elements.html");

fn bench_pages(c: &mut Criterion) {
    c.bench_function("parse_tables_attributes", |b| {
        b.iter(|| black_box(html::parse_tables(black_box(ATTRIBUTES))).len())
    });

    let attrs = GenerateOptions::for_page(PageKind::Attributes);
    c.bench_function("generate_attributes", |b| {
        b.iter(|| {
            let out = runner::generate(&attrs, black_box(ATTRIBUTES), None).expect("fixture parses");
            black_box(out.text.len())
        })
    });

    let elements = GenerateOptions::for_page(PageKind::Elements);
    c.bench_function("generate_elements", |b| {
        b.iter(|| {
            let out = runner::generate(&elements, black_box(ELEMENTS), None).expect("fixture parses");
            black_box(out.text.len())
        })
    });
}

criterion_group!(benches, bench_pages);
criterion_main!(benches);
