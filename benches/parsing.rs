use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use rpg_treasure_roller::{generate_treasure_with, DiceExpression};

pub fn benchmark_parsing(c: &mut Criterion) {
    c.bench_function("parse cursed dice", |b| {
        b.iter(|| DiceExpression::parse(black_box("999d444")))
    });
    c.bench_function("parse full notation", |b| {
        b.iter(|| DiceExpression::parse(black_box("12d6+100*1000")))
    });
    c.bench_function("parse spaced notation", |b| {
        b.iter(|| DiceExpression::parse(black_box(" 2 d 6 - 1 * 10 ")))
    });
}

pub fn benchmark_rolling(c: &mut Criterion) {
    c.bench_function("roll cursed dice", |b| {
        b.iter(|| {
            let dice = DiceExpression::new(999, 444);
            let mut rng = StdRng::seed_from_u64(1);
            dice.roll_with(&mut rng);
        });
    });
}

pub fn benchmark_treasure(c: &mut Criterion) {
    c.bench_function("generate individual treasure", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| generate_treasure_with(black_box("1/4"), "no", &mut rng))
    });
    c.bench_function("generate huge hoard", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| generate_treasure_with(black_box("30"), "yes", &mut rng))
    });
}

criterion_group!(benches, benchmark_parsing, benchmark_rolling, benchmark_treasure);
criterion_main!(benches);
