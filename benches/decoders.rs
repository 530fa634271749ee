//! Decoder and stream throughput
//!
//! Run with: cargo bench --bench decoders

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fairverify::games::{blackjack, dice, mines, plinko, BlackjackOptions, MinesOptions, PlinkoOptions};
use fairverify::rng::{self, SeededStream};

const SEED: &str = "529b778e19d71a10d5d76b86:placeholder:38";

fn benchmark_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");

    group.bench_function("single_draw", |b| b.iter(|| rng::draw(black_box(SEED))));

    group.throughput(Throughput::Elements(1000));
    group.bench_function("sequential_draws_1000", |b| {
        b.iter(|| {
            let stream = SeededStream::new(black_box(SEED));
            stream.take(1000).sum::<f64>()
        })
    });

    group.finish();
}

fn benchmark_decoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoders");

    group.bench_function("dice", |b| b.iter(|| dice::process(black_box(SEED))));
    group.bench_function("mines_10x10_25", |b| {
        let options = MinesOptions::new(10, 25);
        b.iter(|| mines::process(black_box(SEED), &options))
    });
    group.bench_function("plinko_10_rows", |b| {
        let options = PlinkoOptions::new(10);
        b.iter(|| plinko::process(black_box(SEED), &options))
    });
    group.bench_function("blackjack_6_cards", |b| {
        let options = BlackjackOptions::new(6);
        b.iter(|| blackjack::process(black_box(SEED), &options))
    });

    group.finish();
}

criterion_group!(benches, benchmark_stream, benchmark_decoders);
criterion_main!(benches);
