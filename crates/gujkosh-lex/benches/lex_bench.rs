// Criterion benchmarks for gujkosh-lex.
//
// Run:
//   cargo bench -p gujkosh-lex

use criterion::{Criterion, criterion_group, criterion_main};

/// Variant-notation fields of realistic shape.
const FIELDS: &[&str] = &[
    "રામ",
    "કર(+વું,+ી,+ે,+તા)",
    "કરવું(-તા,-નાર,+માં)",
    "પત્ર(-ત્તા,+ો)",
    "જ્ઞાન,વિજ્ઞાન",
    "જા(+વું),ખા(+વું),પી(+વું)",
    "સ્ત્રી(+ઓ)",
    "હાથ(+ી,+ે,-થ+થે)",
];

/// Plain words for the segmentation benchmark.
const WORDS: &[&str] = &[
    "રામ",
    "કરવું",
    "જ્ઞાન",
    "પત્ર",
    "સ્ત્રીલિંગ",
    "વર્તમાનકાળ",
    "રવાનુકારી",
    "અકર્મક",
];

fn bench_expand(c: &mut Criterion) {
    c.bench_function("expand_fields", |b| {
        b.iter(|| {
            for field in FIELDS {
                std::hint::black_box(gujkosh_lex::expand::expand(field));
            }
        });
    });
}

fn bench_boundaries(c: &mut Criterion) {
    let words: Vec<Vec<char>> = WORDS.iter().map(|w| w.chars().collect()).collect();
    c.bench_function("akshar_boundaries", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(gujkosh_core::akshar::boundaries(word));
            }
        });
    });
}

criterion_group!(benches, bench_expand, bench_boundaries);
criterion_main!(benches);
