use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ripple_doku::core::Grid;
use ripple_doku::solve::solve;

fn criterion_benchmark(c: &mut Criterion) {
  let easy: Grid =
    "..3456789..6789123789123456234567891567891234891234567345678912678912345912345678"
      .parse()
      .unwrap();
  let stubborn: Grid =
    ".23456789456789.237891234562345678915678912348912345673456789.2678912345912345678"
      .parse()
      .unwrap();
  c.bench_function("solve easy", |b| b.iter(|| solve(black_box(&easy))));
  c.bench_function("solve stubborn", |b| {
    b.iter(|| solve(black_box(&stubborn)))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
