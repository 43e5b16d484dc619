//! Criterion benchmarks for hand decomposition and catalog scoring.
//!
//! Uses deliberately branchy suited shapes (heavy run/triplet overlap) to
//! stress the backtracking search rather than the cheap honor path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hkhand::score::rules;
use hkhand::{
    analyze, decompose_standard, DecomposePolicy, Hand, RoundContext, RuleOptions, Suit, Tile,
    WinContext, Wind,
};

fn c(value: u8) -> Tile {
    Tile::suited(Suit::Characters, value).unwrap()
}

/// 111 222 333 plus a run and a pair: maximal partition ambiguity in one
/// suit.
fn branchy_hand() -> Hand {
    let mut tiles = Vec::new();
    for v in [1, 2, 3] {
        tiles.extend([c(v), c(v), c(v)]);
    }
    tiles.extend([
        Tile::suited(Suit::Circles, 7).unwrap(),
        Tile::suited(Suit::Circles, 8).unwrap(),
        Tile::suited(Suit::Circles, 9).unwrap(),
        Tile::wind(Wind::East),
        Tile::wind(Wind::East),
    ]);
    Hand::new(&tiles, vec![]).unwrap()
}

fn flush_hand() -> Hand {
    // one-suit hand with many overlapping runs
    let values = [1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7];
    let tiles: Vec<Tile> = values.iter().map(|&v| c(v)).collect();
    Hand::new(&tiles, vec![]).unwrap()
}

fn bench_decompose(criterion: &mut Criterion) {
    let branchy = branchy_hand();
    let flush = flush_hand();
    let ctx = WinContext::new(c(1), true);

    criterion.bench_function("decompose/branchy", |b| {
        b.iter(|| decompose_standard(black_box(&branchy), &ctx, DecomposePolicy::new()).unwrap())
    });
    criterion.bench_function("decompose/flush", |b| {
        b.iter(|| decompose_standard(black_box(&flush), &ctx, DecomposePolicy::new()).unwrap())
    });
}

fn bench_analyze_and_score(criterion: &mut Criterion) {
    let hand = flush_hand();
    let ctx = WinContext::new(c(1), true);
    let catalog = rules::standard_catalog();
    let round = RoundContext::default();
    let options = RuleOptions::default();

    criterion.bench_function("analyze_and_score/flush", |b| {
        b.iter(|| {
            let wins = analyze(black_box(&hand), &ctx, DecomposePolicy::new(), &[]).unwrap();
            for win in &wins {
                for rule in &catalog {
                    black_box(rule.evaluate(win, &ctx, &round, &options));
                }
            }
        })
    });
}

criterion_group!(benches, bench_decompose, bench_analyze_and_score);
criterion_main!(benches);
