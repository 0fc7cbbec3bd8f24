//! Benchmarks for category extraction and filtering
//!
//! Run with: cargo bench --package filters
//!
//! Uses a synthetic collection of 5,000 posts spread over 40 category names,
//! each name appearing under several different ids.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use filters::{FilterSelection, PostFilter, extract_categories};
use post_model::{Author, Category, Post};

fn synthetic_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| Post {
            id: format!("post-{i}"),
            title: format!("Post number {i}"),
            publish_date: "2022-05-01T12:00:00Z".to_string(),
            author: Author {
                name: format!("Author {}", i % 17),
                avatar_url: format!("https://example.com/avatar/{}.png", i % 17),
            },
            summary: String::new(),
            categories: (0..(i % 4))
                .map(|j| {
                    let n = (i + j * 7) % 40;
                    Category::new(format!("{i}-{j}"), format!("Category {n}"))
                })
                .collect(),
        })
        .collect()
}

fn bench_extract_categories(c: &mut Criterion) {
    let posts = synthetic_posts(5_000);

    c.bench_function("extract_categories", |b| {
        b.iter(|| {
            let categories = extract_categories(black_box(&posts));
            black_box(categories)
        })
    });
}

fn bench_apply_selection(c: &mut Criterion) {
    let posts = synthetic_posts(5_000);
    let selection = FilterSelection::initialize(&extract_categories(&posts))
        .toggle("Category 3", true)
        .toggle("Category 21", true);

    c.bench_function("apply_selection", |b| {
        b.iter(|| {
            let visible = selection.apply(black_box(&posts));
            black_box(visible.len())
        })
    });
}

criterion_group!(benches, bench_extract_categories, bench_apply_selection);
criterion_main!(benches);
