use criterion::{criterion_group, criterion_main, Criterion};
use dashboard_runtime::{recompute, DashboardConfig, FilterState};
use rust_decimal::Decimal;
use sales_core::{Dataset, SalesRecord};
use std::hint::black_box;

const PLATFORMS: [&str; 6] = ["Wii", "PS2", "X360", "DS", "GB", "NES"];
const GENRES: [&str; 5] = ["Sports", "Action", "Puzzle", "Racing", "Shooter"];

fn build_dataset(rows: usize) -> Dataset {
    (0..rows)
        .map(|i| {
            let cents = ((i * 7919) % 4_000) as i64;
            SalesRecord {
                rank: Some(i as u32 + 1),
                name: format!("Game {i}"),
                platform: PLATFORMS[i % PLATFORMS.len()].to_string(),
                year: if i % 97 == 0 {
                    "N/A".to_string()
                } else {
                    (1980 + (i % 37)).to_string()
                },
                genre: GENRES[i % GENRES.len()].to_string(),
                publisher: "Bench".to_string(),
                na_sales: Some(Decimal::new(cents / 2, 2)),
                eu_sales: Some(Decimal::new(cents / 4, 2)),
                jp_sales: Some(Decimal::new(cents / 8, 2)),
                other_sales: Some(Decimal::new(cents / 8, 2)),
                global_sales: Some(Decimal::new(cents, 2)),
            }
        })
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    let dataset = build_dataset(16_000);
    let config = DashboardConfig::default();
    let filters = FilterState {
        selected_year: Some(2006),
        free_text_year: "2003".to_string(),
        ..FilterState::default()
    };
    c.bench_function("recompute 16k rows", |b| {
        b.iter(|| black_box(recompute(&dataset, &filters, &config)))
    });
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
