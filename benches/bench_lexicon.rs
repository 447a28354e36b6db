use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use wordgame_engine::{Lexicon, Rack, WordFinder};

const WORDS: &[&str] = &[
    "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "cat", "car", "card",
];

/// Random lowercase words of 2 to 8 letters, the same for every run.
fn generated_words(n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(123);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(2..=8);
            (0..len)
                .map(|_| rng.gen_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect()
}

fn bench_best_word(c: &mut Criterion, name: &str, lexicon: &Lexicon, letters: &str) {
    let rack: Rack = letters.parse().unwrap();
    let finder = WordFinder::new(lexicon);
    c.bench_function(name, |b| b.iter(|| finder.best_word(&rack)));
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("lexicon.from_words", |b| {
        b.iter(|| Lexicon::from_words(WORDS))
    });

    let words = generated_words(100_000);
    c.bench_function("lexicon.from_words.100k", |b| {
        b.iter(|| Lexicon::from_words(&words))
    });

    let lexicon = Lexicon::from_words(&words);
    c.bench_function("lexicon.contains", |b| {
        b.iter(|| words.iter().take(1000).filter(|w| lexicon.contains(w)).count())
    });

    bench_best_word(c, "finder.best_word.1", &lexicon, "abel");
    bench_best_word(c, "finder.best_word.2", &lexicon, "etaoins");
    bench_best_word(c, "finder.best_word.3", &lexicon, "qzxjkvw");
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
