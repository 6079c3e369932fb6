//! Benchmarks for the local recommender
//!
//! Run with: cargo bench --package fallback

use catalog::{Movie, builtin};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fallback::{GenreProfile, LocalRecommender};

fn selection() -> Vec<Movie> {
    [27205, 603, 496243, 550, 335984]
        .iter()
        .filter_map(|&id| builtin().get(id).cloned())
        .collect()
}

fn bench_local_recommendations(c: &mut Criterion) {
    let selected = selection();
    let recommender = LocalRecommender::new(builtin());

    c.bench_function("local_recommendations", |b| {
        b.iter(|| {
            let recs = recommender.recommend(black_box(&selected));
            black_box(recs)
        })
    });
}

fn bench_genre_profile(c: &mut Criterion) {
    let selected = selection();

    c.bench_function("genre_profile", |b| {
        b.iter(|| {
            let profile = GenreProfile::from_movies(black_box(&selected));
            black_box(profile.top_genres(3))
        })
    });
}

criterion_group!(benches, bench_local_recommendations, bench_genre_profile);
criterion_main!(benches);
