// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation operations.
//!
//! Measures the performance of:
//! - Catalog construction
//! - Navigation operations (next/previous)
//! - A full walk across the catalog and back

use art_space::catalog::{Artwork, Catalog};
use art_space::gallery_navigation::GalleryNavigator;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn large_catalog(n: usize) -> Catalog {
    Catalog::new(
        (0..n)
            .map(|i| {
                Artwork::new(
                    format!("artwork{}.png", i),
                    format!("Artwork {}", i),
                    "Bench",
                    "2024",
                )
            })
            .collect(),
    )
}

/// Benchmark catalog construction.
fn bench_catalog_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("builtin_catalog", |b| {
        b.iter(|| black_box(Catalog::builtin()));
    });

    group.finish();
}

/// Benchmark navigation operations (next/previous).
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let catalog = large_catalog(1_000);

    group.bench_function("go_next", |b| {
        b.iter(|| {
            let mut nav = GalleryNavigator::new(catalog.clone());
            nav.go_next();
            black_box(&nav);
        });
    });

    group.bench_function("walk_there_and_back", |b| {
        b.iter(|| {
            let mut nav = GalleryNavigator::new(catalog.clone());
            while nav.can_go_next() {
                nav.go_next();
            }
            while nav.can_go_previous() {
                nav.go_previous();
            }
            black_box(nav.cursor());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_catalog_build, bench_navigate);
criterion_main!(benches);
