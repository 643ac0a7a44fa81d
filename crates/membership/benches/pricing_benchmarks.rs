use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use gymfee_membership::{PremiumTier, PricingEngine, Selection};

fn selection(members: u32, features: usize) -> Selection {
    let names = ["Personal Training", "Group Classes", "Nutritional Consulting"];
    let mut s = Selection::new("Family")
        .with_members(members)
        .with_premium(PremiumTier::SpecializedTraining);
    for i in 0..features {
        s = s.with_feature(names[i % names.len()]);
    }
    s
}

fn bench_calculate_total_cost(c: &mut Criterion) {
    let engine = PricingEngine::standard();
    let mut group = c.benchmark_group("calculate_total_cost");

    for features in [0usize, 3, 30] {
        let s = selection(2, features);
        group.bench_with_input(BenchmarkId::from_parameter(features), &s, |b, s| {
            b.iter(|| engine.quote(black_box(s)))
        });
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let engine = PricingEngine::standard();
    let s = selection(4, 3);

    c.bench_function("selection_summary", |b| {
        b.iter(|| engine.selection_summary(black_box(&s)))
    });
}

criterion_group!(benches, bench_calculate_total_cost, bench_summary);
criterion_main!(benches);
