use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mastermind_core::{score, score_codes, Code, Color};

use Color::*;

fn bench_scoring(c: &mut Criterion) {
    let secret = Code::new([Red, Red, Blue, Green]);
    let guess = Code::new([Blue, Red, Green, Red]);

    c.bench_function("score_codes", |b| {
        b.iter(|| score_codes(black_box(&secret), black_box(&guess)))
    });

    c.bench_function("score_slices", |b| {
        b.iter(|| score(black_box(secret.pegs()), black_box(guess.pegs())))
    });

    let all: Vec<Code> = (0..1296u32)
        .map(|i| {
            let peg = |shift: u32| Color::ALL[((i / 6u32.pow(shift)) % 6) as usize];
            Code::new([peg(0), peg(1), peg(2), peg(3)])
        })
        .collect();

    c.bench_function("score_all_codes", |b| {
        b.iter(|| {
            all.iter()
                .filter(|candidate| score_codes(candidate, &secret).is_solved())
                .count()
        })
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
