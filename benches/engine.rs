use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_advisor::{filter, load_dictionary, rank, select, History, HistoryEntry, DEFAULT_TOP_K};

fn bench_engine(c: &mut Criterion) {
    let dictionary = load_dictionary();
    let empty = History::new();
    let mut history = History::new();
    history.push(HistoryEntry::parse("trace", "bybbb").unwrap());

    c.bench_function("filter one round", |b| {
        b.iter(|| filter(black_box(&dictionary), black_box(&history)))
    });

    let opening = filter(&dictionary, &empty);
    c.bench_function("rank opening", |b| {
        b.iter(|| select(rank(black_box(opening.words())), DEFAULT_TOP_K))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
