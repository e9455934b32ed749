// benches/filters.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use fashion_console::filters::{collab_timeline, filter_brands, filter_channels, group_by_country};
use fashion_console::model::{BrandHighlight, ChannelHighlight, CollabItem};
use fashion_console::table::Table;

const COUNTRIES: [&str; 6] = ["KR", "JP", "US", "GB", "FR", "XX"];
const TIERS: [&str; 4] = ["high-end", "premium", "street", "sports"];

fn channels(n: usize) -> Vec<ChannelHighlight> {
    (0..n)
        .map(|i| ChannelHighlight {
            channel_id: i as i64,
            channel_name: format!("Channel {i}"),
            channel_url: format!("https://shop{i}.example"),
            instagram_url: None,
            channel_type: Some("edit-shop".into()),
            country: Some(COUNTRIES[i % COUNTRIES.len()].into()),
            total_product_count: 100 + i as u64,
            sale_product_count: (i % 7) as u64,
            new_product_count: (i % 3) as u64,
            is_running_sales: i % 7 != 0,
            is_selling_new_products: i % 3 == 0,
        })
        .collect()
}

fn brands(n: usize) -> Vec<BrandHighlight> {
    (0..n)
        .map(|i| BrandHighlight {
            brand_id: i as i64,
            brand_name: format!("Brand {i}"),
            brand_slug: format!("brand-{i}"),
            instagram_url: None,
            tier: Some(TIERS[i % TIERS.len()].into()),
            origin_country: Some(COUNTRIES[i % COUNTRIES.len()].into()),
            total_product_count: i as u64,
            new_product_count: 0,
            is_selling_new_products: false,
        })
        .collect()
}

fn collabs(n: usize) -> Vec<CollabItem> {
    (0..n)
        .map(|i| CollabItem {
            id: i as i64,
            brand_a_id: 1,
            brand_b_id: 2,
            collab_name: format!("Collab {i}"),
            collab_category: Some("footwear".into()),
            release_year: (i % 5 != 0).then_some(2000 + (i % 26) as i32),
            hype_score: (i * 37 % 100) as i64,
            source_url: None,
            notes: None,
            created_at: "2026-01-01T00:00:00".into(),
        })
        .collect()
}

fn bench_filters(c: &mut Criterion) {
    let ch = channels(2_000);
    let br = brands(2_000);
    let co = collabs(2_000);

    c.bench_function("filter_channels_query_sales", |b| {
        b.iter(|| black_box(filter_channels(black_box(&ch), "channel 1", true).len()))
    });

    c.bench_function("filter_brands_tier", |b| {
        b.iter(|| black_box(filter_brands(black_box(&br), "brand", "street").len()))
    });

    c.bench_function("group_by_country", |b| {
        b.iter(|| black_box(group_by_country(black_box(&ch)).len()))
    });

    c.bench_function("collab_timeline_sort", |b| {
        b.iter(|| black_box(collab_timeline(black_box(&co)).len()))
    });

    c.bench_function("table_from_channels", |b| {
        b.iter(|| black_box(Table::from_items(black_box(&ch)).render_plain().len()))
    });
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
