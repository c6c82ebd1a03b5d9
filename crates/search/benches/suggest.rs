//! Benchmarks for search suggestions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glowbook_search::{edit_distance, smart_search, SearchConfig, SearchableItem};

const NAMES: [&str; 8] = [
    "Manicure de Gel",
    "Pedicure Spa",
    "Lifting de Pestañas",
    "Corte de Cabello",
    "Depilación con Cera",
    "Masaje Relajante",
    "Maquillaje Social",
    "Tinte y Mechas",
];

fn create_test_items(count: usize) -> Vec<SearchableItem> {
    (0..count)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            SearchableItem::new(
                i.to_string(),
                format!("{name} {i}"),
                "beauty",
                format!("Servicio profesional de {name} con productos premium"),
            )
            .with_synonyms([format!("{} express", name.to_lowercase())])
        })
        .collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("edit_distance_short", |b| {
        b.iter(|| edit_distance(black_box("pestanas"), black_box("pestañaz")))
    });

    c.bench_function("edit_distance_long", |b| {
        b.iter(|| {
            edit_distance(
                black_box("servicio profesional de manicure"),
                black_box("servicio profesional de pedicure spa"),
            )
        })
    });
}

fn bench_smart_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("smart_search");
    let config = SearchConfig::default();

    for size in [10, 100, 1000, 10000].iter() {
        let items = create_test_items(*size);

        group.bench_with_input(BenchmarkId::new("prefix", size), size, |b, _| {
            b.iter(|| smart_search(black_box("mani"), black_box(&items), &config))
        });

        group.bench_with_input(BenchmarkId::new("typo", size), size, |b, _| {
            b.iter(|| smart_search(black_box("pestanaz"), black_box(&items), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edit_distance, bench_smart_search);
criterion_main!(benches);
